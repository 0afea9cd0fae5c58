//! Border color parsing: hex and CSS functional `rgb()` / `rgba()` notation.

use core::fmt;

/// Border fill color, sRGB with alpha.
///
/// The default is opaque white, which is also the fallback the upload
/// form applies when a color string cannot be parsed.
///
/// # Example
///
/// ```
/// use framepad::BorderColor;
///
/// assert_eq!(BorderColor::parse("#ff8000"), Some(BorderColor::rgb(255, 128, 0)));
/// assert_eq!(BorderColor::parse("rgba(255, 0, 0, 0.5)"), Some(BorderColor::rgba(255, 0, 0, 128)));
/// assert_eq!(BorderColor::parse_or_white("not a color"), BorderColor::WHITE);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for BorderColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl BorderColor {
    /// White, fully opaque.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black, fully opaque.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color picker value.
    ///
    /// Accepts:
    /// - `#RGB` / `RGB` — 3-digit hex, alpha = 0xFF
    /// - `#RGBA` / `RGBA` — 4-digit hex
    /// - `#RRGGBB` / `RRGGBB` — 6-digit hex, alpha = 0xFF
    /// - `#RRGGBBAA` / `RRGGBBAA` — 8-digit hex
    /// - `rgb(r, g, b)` / `rgba(r, g, b, a)` — decimal channels, possibly
    ///   fractional; an `rgba()` alpha in `0.0..=1.0` scales to 8-bit
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if let Some(c) = parse_hex(hex) {
            return Some(c);
        }

        parse_functional(s)
    }

    /// Parse with the form's white fallback.
    pub fn parse_or_white(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::WHITE)
    }
}

impl fmt::Display for BorderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex(hex: &str) -> Option<BorderColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let b = hex.as_bytes();
    match hex.len() {
        3 => Some(BorderColor::rgb(wide(b[0])?, wide(b[1])?, wide(b[2])?)),
        4 => Some(BorderColor::rgba(
            wide(b[0])?,
            wide(b[1])?,
            wide(b[2])?,
            wide(b[3])?,
        )),
        6 => Some(BorderColor::rgb(pair(b[0], b[1])?, pair(b[2], b[3])?, pair(b[4], b[5])?)),
        8 => Some(BorderColor::rgba(
            pair(b[0], b[1])?,
            pair(b[2], b[3])?,
            pair(b[4], b[5])?,
            pair(b[6], b[7])?,
        )),
        _ => None,
    }
}

/// Expand a single hex nibble to a full byte: 'a' → 0xAA.
fn wide(ch: u8) -> Option<u8> {
    let n = hex_digit(ch)?;
    Some(n << 4 | n)
}

fn pair(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? << 4 | hex_digit(lo)?)
}

fn hex_digit(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

/// `rgb(255, 0, 0)` / `rgba(255, 0, 0, 0.5)`.
///
/// Color pickers emit these with fractional channels; fractional parts
/// truncate. A missing closing parenthesis is tolerated.
fn parse_functional(s: &str) -> Option<BorderColor> {
    let rest = strip_prefix_ignore_case(s, "rgba").or_else(|| strip_prefix_ignore_case(s, "rgb"))?;
    let body = rest.trim_start().strip_prefix('(')?;
    let body = body.split(')').next()?;

    let mut values = body.split(',');
    let r = channel(values.next()?)?;
    let g = channel(values.next()?)?;
    let b = channel(values.next()?)?;
    let a = match values.next() {
        Some(v) => alpha_channel(v)?,
        None => 255,
    };
    if values.next().is_some() {
        return None;
    }
    Some(BorderColor { r, g, b, a })
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Decimal channel value, truncated and clamped to 0–255.
fn channel(v: &str) -> Option<u8> {
    let f: f64 = v.trim().parse().ok()?;
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    Some(f.min(255.0) as u8)
}

/// `rgba()` alpha: `0.0..=1.0` scales to 8-bit, larger values are taken
/// as 8-bit directly.
fn alpha_channel(v: &str) -> Option<u8> {
    let f: f64 = v.trim().parse().ok()?;
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    if f <= 1.0 {
        Some((f * 255.0).round() as u8)
    } else {
        Some(f.min(255.0) as u8)
    }
}
