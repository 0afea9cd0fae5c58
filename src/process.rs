//! End-to-end padding: uploaded bytes in, padded canvas out.
//!
//! Mirrors the two actions of the hosting form — a live preview and a
//! full-quality download. Nothing is kept between calls: each one
//! decodes, computes, and renders from scratch, and a new result simply
//! replaces the previous one on the caller's side.

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::codec::{self, OutputFormat};
use crate::color::BorderColor;
use crate::error::Error;
use crate::frame::{FramePlan, FrameSpec};
use crate::raster::{self, PREVIEW_MAX_EDGE};
use crate::ratio::AspectRatio;

/// A padded canvas together with the geometry that produced it.
#[derive(Clone, Debug)]
pub struct PaddedOutput {
    /// The padded canvas.
    pub image: RgbaImage,
    /// The geometry used to produce it.
    pub plan: FramePlan,
}

impl PaddedOutput {
    /// Encode for download.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, Error> {
        codec::encode(&self.image, format)
    }

    /// Preview-sized copy, longest edge at most [`PREVIEW_MAX_EDGE`].
    pub fn preview(&self) -> DynamicImage {
        let full = DynamicImage::ImageRgba8(self.image.clone());
        raster::shrink_for_preview(&full, PREVIEW_MAX_EDGE)
    }
}

/// Decode `data` and pad it to `ratio` with a `color` border.
pub fn pad_bytes(
    data: &[u8],
    ratio: AspectRatio,
    color: BorderColor,
) -> Result<PaddedOutput, Error> {
    let source = codec::decode(data)?;
    let plan = FrameSpec::new(ratio)
        .color(color)
        .compute(source.width(), source.height())?;
    let image = raster::render(&source, &plan);
    Ok(PaddedOutput { image, plan })
}
