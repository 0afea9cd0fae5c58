//! Crate-wide error taxonomy.

use thiserror::Error;

use crate::frame::FrameError;

/// Errors surfaced to the hosting UI.
///
/// Every failure is synchronous and final — the computation is pure and
/// local, so nothing is retried and no partial output is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive source dimensions or ratio components.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] FrameError),

    /// Uploaded bytes could not be decoded as an image.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(#[source] image::ImageError),

    /// Output encoding failed.
    #[error("image encoding failed: {0}")]
    Encode(#[source] image::ImageError),
}
