// SPDX-License-Identifier: MIT
//
// shade-color device color — 8-bit sRGB with hex parsing and gamma.
//
// A `Color` is the canonical, quantized form of every color that flows
// through shade: what the user types, what each scale step stores, and
// what the dictionary lists. The perceptual forms (Oklab, OKLCH, CIE Lab)
// are always derived from it on demand, never cached alongside it.
//
// Conversion pipeline:
//
//   hex ↔ Color (8-bit sRGB) ↔ sRGB (0–1) ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//                                              └─────→ XYZ (D65) → CIE Lab

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::lab::Lab;
use crate::oklab::{Oklab, Oklch};

// ─── Color ───────────────────────────────────────────────────────────────────

/// A 24-bit device-RGB color.
///
/// Equality is exact on the three channels, so two colors are equal iff
/// their lowercase hex strings are equal.
///
/// # Examples
///
/// ```
/// use shade_color::Color;
///
/// let indigo: Color = "#6366F1".parse().unwrap();
/// assert_eq!(indigo.to_hex(), "#6366f1");
/// assert_eq!(indigo.to_hex_upper(), "#6366F1");
///
/// let short = Color::parse("fa0").unwrap();
/// assert_eq!(short, Color::rgb8(0xff, 0xaa, 0x00));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from sRGB components in 0.0–1.0.
    ///
    /// Out-of-range components are clamped before rounding to 8 bits.
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb8(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Parse a `#rgb` or `#rrggbb` hex string (the `#` is optional).
    ///
    /// Surrounding whitespace is ignored. Named colors, alpha digits and
    /// functional notations are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] if the text is not a 3- or
    /// 6-digit hex color.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColor {
            input: s.to_string(),
        })
    }

    // ─── Hex Output ──────────────────────────────────────────────────────

    /// Lowercase `#rrggbb`, the normalized form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, for display only.
    #[must_use]
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// sRGB components in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Linear-light sRGB components (gamma removed).
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// Cartesian Oklab coordinates.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (r, g, b) = self.to_linear_srgb();
        Oklab::from_linear_srgb(r, g, b)
    }

    /// Polar OKLCH coordinates. Hue is NaN for achromatic colors.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }

    /// CIE L*a*b* coordinates under D65.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (r, g, b) = self.to_linear_srgb();
        Lab::from_linear_srgb(r, g, b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::parse("#ff8000").unwrap();
        assert_eq!(color, Color::rgb8(255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::parse("#f80").unwrap();
        assert_eq!(color, Color::rgb8(255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash() {
        let color = Color::parse("00ff00").unwrap();
        assert_eq!(color, Color::rgb8(0, 255, 0));
    }

    #[test]
    fn hex_parsing_is_case_insensitive() {
        assert_eq!(Color::parse("#6366F1"), Color::parse("#6366f1"));
    }

    #[test]
    fn hex_parsing_trims_whitespace() {
        assert_eq!(Color::parse("  #6366f1\n").unwrap(), Color::rgb8(0x63, 0x66, 0xf1));
    }

    #[test]
    fn hex_parsing_invalid() {
        for input in ["not-a-color", "xyz", "#12345", "", "#", "#ff000080", "#ggg", "red", "##fff"] {
            assert_eq!(
                Color::parse(input),
                Err(ColorError::InvalidColor { input: input.to_string() }),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn hex_parsing_rejects_non_ascii() {
        // Three bytes, but not three hex digits.
        assert!(Color::parse("é1").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let a: Color = "#abc".parse().unwrap();
        assert_eq!(a, Color::rgb8(0xaa, 0xbb, 0xcc));
    }

    // ── Hex Output ───────────────────────────────────────────────────────

    #[test]
    fn hex_output_is_lowercase() {
        assert_eq!(Color::rgb8(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    }

    #[test]
    fn hex_output_upper_for_display() {
        assert_eq!(Color::rgb8(0xab, 0xcd, 0xef).to_hex_upper(), "#ABCDEF");
    }

    #[test]
    fn display_and_debug() {
        let c = Color::rgb8(1, 2, 3);
        assert_eq!(format!("{c}"), "#010203");
        assert_eq!(format!("{c:?}"), "Color(#010203)");
    }

    // ── Gamma ────────────────────────────────────────────────────────────

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=255u8 {
            let v = f64::from(i) / 255.0;
            let back = linear_to_srgb(srgb_to_linear(v));
            assert!((v - back).abs() < 1e-9, "gamma roundtrip failed at {i}");
        }
    }

    #[test]
    fn from_srgb_clamps_and_rounds() {
        assert_eq!(Color::from_srgb(1.2, -0.3, 0.5), Color::rgb8(255, 0, 128));
    }
}
