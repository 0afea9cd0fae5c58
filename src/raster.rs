//! Pixel operations: border fill, source blit, preview downscaling.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use log::debug;

use crate::color::BorderColor;
use crate::error::Error;
use crate::frame::{FramePlan, FrameSpec};
use crate::ratio::AspectRatio;

/// Longest edge of the live preview, matching the preview panel of the
/// upload form.
pub const PREVIEW_MAX_EDGE: u32 = 800;

impl From<BorderColor> for Rgba<u8> {
    fn from(c: BorderColor) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// Pad `source` to `ratio` with a `color` border.
///
/// The source is placed centered and unscaled on the smallest canvas of
/// the target ratio that contains it.
///
/// # Example
///
/// ```
/// use framepad::{AspectRatio, BorderColor, pad};
/// use image::DynamicImage;
///
/// let source = DynamicImage::new_rgba8(100, 50);
/// let padded = pad(&source, AspectRatio::SQUARE, BorderColor::BLACK).unwrap();
/// assert_eq!(padded.dimensions(), (100, 100));
/// ```
pub fn pad(
    source: &DynamicImage,
    ratio: AspectRatio,
    color: BorderColor,
) -> Result<RgbaImage, Error> {
    let plan = FrameSpec::new(ratio)
        .color(color)
        .compute(source.width(), source.height())?;
    Ok(render(source, &plan))
}

/// Render a computed [`FramePlan`]: fill the canvas, blit the source.
///
/// `plan` must have been computed from `source`'s dimensions. The source
/// is read, never mutated.
pub fn render(source: &DynamicImage, plan: &FramePlan) -> RgbaImage {
    debug_assert_eq!(
        (source.width(), source.height()),
        (plan.source.width, plan.source.height),
    );
    debug!(
        "render {}x{} onto {}x{} at ({}, {})",
        plan.source.width,
        plan.source.height,
        plan.canvas.width,
        plan.canvas.height,
        plan.placement.0,
        plan.placement.1,
    );

    let mut canvas =
        RgbaImage::from_pixel(plan.canvas.width, plan.canvas.height, plan.color.into());
    let (x, y) = plan.placement;
    imageops::replace(&mut canvas, &source.to_rgba8(), x as i64, y as i64);
    canvas
}

/// Downscale for preview when either edge exceeds `max_edge`.
///
/// Aspect ratio is preserved; images already inside the box come back
/// unchanged. Lanczos resampling. The preview path never feeds back into
/// the full-quality output.
pub fn shrink_for_preview(image: &DynamicImage, max_edge: u32) -> DynamicImage {
    if image.width() <= max_edge && image.height() <= max_edge {
        return image.clone();
    }
    debug!(
        "preview shrink {}x{} to fit {}",
        image.width(),
        image.height(),
        max_edge
    );
    image.resize(max_edge, max_edge, FilterType::Lanczos3)
}
