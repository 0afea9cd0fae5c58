//! Solid-color border padding to fit images into target aspect ratios.
//!
//! Decodes an uploaded image, computes the smallest canvas of the target
//! aspect ratio that fully contains it, and renders the image centered on
//! that canvas with the remaining area filled by a border color. The
//! source is never scaled or cropped — padding only.
//!
//! # Modules
//!
//! - [`ratio`] — Aspect ratio type and the social-media presets
//! - [`color`] — Border color, hex and `rgb()`/`rgba()` parsing
//! - [`frame`] — Canvas geometry: covering canvas and centered placement
//! - [`raster`] — Canvas fill, source blit, preview downscaling
//! - [`codec`] — Byte decoding and PNG/JPEG encoding
//! - [`process`] — End-to-end padding from raw uploaded bytes

#![forbid(unsafe_code)]

pub mod codec;
pub mod color;
pub mod error;
pub mod frame;
pub mod process;
pub mod ratio;
pub mod raster;

pub use codec::OutputFormat;
pub use color::BorderColor;
pub use error::Error;
pub use frame::{FrameError, FramePlan, FrameSpec, Size};
pub use process::{PaddedOutput, pad_bytes};
pub use ratio::{AspectRatio, Preset};
pub use raster::{PREVIEW_MAX_EDGE, pad, render, shrink_for_preview};
