//! Aspect ratio type and social-media presets.

use core::fmt;

/// Target aspect ratio as a pair of positive integers, `width:height`.
///
/// Components are validated when a layout is computed
/// ([`FrameSpec::compute`](crate::FrameSpec::compute)), not on
/// construction.
///
/// # Example
///
/// ```
/// use framepad::AspectRatio;
///
/// assert_eq!(AspectRatio::parse("16:9"), Some(AspectRatio::WIDESCREEN));
/// assert_eq!(AspectRatio::new(4, 5).to_string(), "4:5");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Width component of the ratio.
    pub width: u32,
    /// Height component of the ratio.
    pub height: u32,
}

impl AspectRatio {
    /// 1:1 square.
    pub const SQUARE: Self = Self::new(1, 1);
    /// 4:5 portrait.
    pub const PORTRAIT: Self = Self::new(4, 5);
    /// 16:9 landscape.
    pub const WIDESCREEN: Self = Self::new(16, 9);

    /// Create a ratio from its components.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `w:h` string such as `"4:5"` or `"16 : 9"`.
    ///
    /// Whitespace around each component is ignored. Returns `None` for
    /// anything that is not two decimal integers separated by a colon.
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.split_once(':')?;
        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;
        Some(Self { width, height })
    }

    /// The ratio as a float, `width / height`.
    pub fn as_f64(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// The ratio choices offered by the upload form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 1:1 square post.
    Square,
    /// 4:5 portrait post.
    Portrait,
    /// 16:9 landscape post.
    Widescreen,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Self; 3] = [Self::Square, Self::Portrait, Self::Widescreen];

    /// The ratio this preset pads to.
    pub const fn ratio(self) -> AspectRatio {
        match self {
            Self::Square => AspectRatio::SQUARE,
            Self::Portrait => AspectRatio::PORTRAIT,
            Self::Widescreen => AspectRatio::WIDESCREEN,
        }
    }

    /// Label shown in the ratio selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1 (Square)",
            Self::Portrait => "4:5 (Portrait)",
            Self::Widescreen => "16:9 (Landscape)",
        }
    }

    /// Parse a selector value: the full label, the bare ratio (`"4:5"`),
    /// or a plain name (`"portrait"`). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        for preset in Self::ALL {
            if s.eq_ignore_ascii_case(preset.label()) {
                return Some(preset);
            }
        }
        if let Some(ratio) = AspectRatio::parse(s) {
            return Self::ALL.into_iter().find(|p| p.ratio() == ratio);
        }
        match s.to_ascii_lowercase().as_str() {
            "square" => Some(Self::Square),
            "portrait" => Some(Self::Portrait),
            "landscape" | "widescreen" => Some(Self::Widescreen),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── AspectRatio::parse ──────────────────────────────────────────────

    #[test]
    fn parse_plain() {
        assert_eq!(AspectRatio::parse("16:9"), Some(AspectRatio::new(16, 9)));
        assert_eq!(AspectRatio::parse("4:5"), Some(AspectRatio::PORTRAIT));
    }

    #[test]
    fn parse_with_whitespace() {
        assert_eq!(AspectRatio::parse(" 21 : 9 "), Some(AspectRatio::new(21, 9)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(AspectRatio::parse(""), None);
        assert_eq!(AspectRatio::parse("16"), None);
        assert_eq!(AspectRatio::parse("16x9"), None);
        assert_eq!(AspectRatio::parse("a:b"), None);
        assert_eq!(AspectRatio::parse("-4:5"), None);
    }

    #[test]
    fn parse_accepts_zero_components() {
        // Zero is rejected at compute time, not parse time.
        assert_eq!(AspectRatio::parse("0:1"), Some(AspectRatio::new(0, 1)));
    }

    // ── Preset ──────────────────────────────────────────────────────────

    #[test]
    fn preset_from_label() {
        assert_eq!(Preset::parse("1:1 (Square)"), Some(Preset::Square));
        assert_eq!(Preset::parse("4:5 (portrait)"), Some(Preset::Portrait));
        assert_eq!(Preset::parse("16:9 (Landscape)"), Some(Preset::Widescreen));
    }

    #[test]
    fn preset_from_bare_ratio() {
        assert_eq!(Preset::parse("1:1"), Some(Preset::Square));
        assert_eq!(Preset::parse("16:9"), Some(Preset::Widescreen));
    }

    #[test]
    fn preset_from_name() {
        assert_eq!(Preset::parse("SQUARE"), Some(Preset::Square));
        assert_eq!(Preset::parse("widescreen"), Some(Preset::Widescreen));
    }

    #[test]
    fn preset_unknown() {
        assert_eq!(Preset::parse("3:2"), None);
        assert_eq!(Preset::parse("circle"), None);
        assert_eq!(Preset::parse(""), None);
    }

    #[test]
    fn preset_ratios() {
        assert_eq!(Preset::Square.ratio(), AspectRatio::new(1, 1));
        assert_eq!(Preset::Portrait.ratio(), AspectRatio::new(4, 5));
        assert_eq!(Preset::Widescreen.ratio(), AspectRatio::new(16, 9));
    }

    #[test]
    fn preset_display_round_trips() {
        for preset in Preset::ALL {
            assert_eq!(Preset::parse(&preset.to_string()), Some(preset));
        }
    }
}
