//! Canvas geometry for border padding.
//!
//! Computes the smallest canvas of a target aspect ratio that fully
//! contains a source image, and the centered placement of the source on
//! it. Pure geometry — no pixel operations, no allocations.
//!
//! # Example
//!
//! ```
//! use framepad::{AspectRatio, FrameSpec, Size};
//!
//! let plan = FrameSpec::new(AspectRatio::SQUARE)
//!     .compute(1000, 500)
//!     .unwrap();
//!
//! // 2:1 source padded to 1:1 — height grows, 250 px border top and bottom
//! assert_eq!(plan.canvas, Size::new(1000, 1000));
//! assert_eq!(plan.placement, (0, 250));
//! ```

use crate::color::BorderColor;
use crate::ratio::AspectRatio;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel count, for tightest-fit comparisons.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Padding specification: target ratio plus border color.
///
/// # Example
///
/// ```
/// use framepad::{AspectRatio, BorderColor, FrameSpec};
///
/// let plan = FrameSpec::new(AspectRatio::PORTRAIT)
///     .color(BorderColor::BLACK)
///     .compute(800, 800)
///     .unwrap();
///
/// // Square source into 4:5 — width already matches, height grows to 1000.
/// assert_eq!(plan.canvas.height, 1000);
/// assert!(plan.needs_border());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameSpec {
    /// Target aspect ratio of the padded canvas.
    pub ratio: AspectRatio,
    /// Border fill color.
    pub color: BorderColor,
}

impl FrameSpec {
    /// Create a spec with the default white border.
    pub fn new(ratio: AspectRatio) -> Self {
        Self {
            ratio,
            color: BorderColor::WHITE,
        }
    }

    /// Set the border color.
    pub fn color(mut self, color: BorderColor) -> Self {
        self.color = color;
        self
    }

    /// Compute the padded layout for a source image of the given dimensions.
    pub fn compute(&self, source_w: u32, source_h: u32) -> Result<FramePlan, FrameError> {
        if source_w == 0 || source_h == 0 {
            return Err(FrameError::ZeroSourceDimension);
        }
        if self.ratio.width == 0 || self.ratio.height == 0 {
            return Err(FrameError::ZeroRatioComponent);
        }

        let source = Size::new(source_w, source_h);
        let canvas = cover_canvas(source_w, source_h, self.ratio);
        Ok(FramePlan {
            source,
            canvas,
            placement: center_offset(canvas, source),
            color: self.color,
        })
    }
}

/// Computed layout: where the source sits on the padded canvas.
///
/// The canvas covers the source on both axes and matches the target
/// ratio within rounding of one axis. The source is never scaled or
/// cropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FramePlan {
    /// Source dimensions, unscaled and uncropped.
    pub source: Size,
    /// Output canvas dimensions (≥ source on both axes).
    pub canvas: Size,
    /// Top-left offset where the source sits on the canvas.
    pub placement: (u32, u32),
    /// Border fill color.
    pub color: BorderColor,
}

impl FramePlan {
    /// Whether any border is visible (canvas larger than source).
    pub fn needs_border(&self) -> bool {
        self.canvas != self.source
    }

    /// Border thickness per edge: (top, right, bottom, left).
    ///
    /// An odd difference leaves the extra pixel on the bottom/right edge.
    pub fn margins(&self) -> (u32, u32, u32, u32) {
        let (x, y) = self.placement;
        let right = self.canvas.width - self.source.width - x;
        let bottom = self.canvas.height - self.source.height - y;
        (y, right, bottom, x)
    }
}

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// Source image has zero width or height.
    ZeroSourceDimension,
    /// Target ratio has a zero component.
    ZeroRatioComponent,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSourceDimension => f.write_str("source image has zero width or height"),
            Self::ZeroRatioComponent => f.write_str("aspect ratio has a zero component"),
        }
    }
}

impl std::error::Error for FrameError {}

// ============================================================================
// Internal geometry
// ============================================================================

/// Smallest canvas matching `ratio` that covers `sw`×`sh`.
///
/// Evaluates both axis-anchored candidates — width kept with height
/// derived, and height kept with width derived — keeps those that cover
/// the source on both axes, and picks the smaller area. The free axis
/// rounds to nearest.
fn cover_canvas(sw: u32, sh: u32, ratio: AspectRatio) -> Size {
    // u64 cross-multiplication keeps the exact-match test exact.
    let cross_s = sw as u64 * ratio.height as u64;
    let cross_t = sh as u64 * ratio.width as u64;
    if cross_s == cross_t {
        return Size::new(sw, sh);
    }

    let by_width = Size::new(sw, proportional(sw, ratio.height, ratio.width));
    let by_height = Size::new(proportional(sh, ratio.width, ratio.height), sh);

    let covers = |c: Size| c.width >= sw && c.height >= sh;
    match (covers(by_width), covers(by_height)) {
        (true, true) => {
            if by_height.area() < by_width.area() {
                by_height
            } else {
                by_width
            }
        }
        (true, false) => by_width,
        (false, true) => by_height,
        // Unreachable with nearest rounding: the two shortfalls would
        // contradict each other. If it ever happens, both free axes are
        // within rounding of the source — keep the source dimensions
        // rather than crop.
        (false, false) => Size::new(sw, sh),
    }
}

/// `round(basis * num / den)`, at least 1.
fn proportional(basis: u32, num: u32, den: u32) -> u32 {
    let v = (basis as f64 * num as f64 / den as f64).round() as u32;
    if v == 0 { 1 } else { v }
}

/// Floor-centered placement: odd leftovers go to the bottom/right.
fn center_offset(canvas: Size, source: Size) -> (u32, u32) {
    (
        (canvas.width - source.width) / 2,
        (canvas.height - source.height) / 2,
    )
}
