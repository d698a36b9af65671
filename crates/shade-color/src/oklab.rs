// SPDX-License-Identifier: MIT
//
// Oklab and OKLCH — the perceptual space every scale is mixed in.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Oklab was designed by Björn Ottosson. The matrices below are from
// https://bottosson.github.io/posts/oklab/ at full f64 precision so that
// formatting to three decimals is stable across platforms.
//
// Pipeline: Linear sRGB ↔ LMS ↔ Oklab (L, a, b) ↔ OKLCH (L, C, H)

use std::fmt;

use crate::color::{Color, linear_to_srgb};
use crate::format::fmt_fixed3;

/// Chroma below which a color is treated as achromatic and its hue is
/// undefined.
///
/// Grays derived from 8-bit sRGB land around 1e-8 after the matrix
/// round-trip; the least chromatic non-gray 8-bit color is near 1e-3.
pub const ACHROMATIC_THRESHOLD: f64 = 1e-4;

/// Slack allowed on each linear channel when testing gamut membership.
const GAMUT_EPSILON: f64 = 1e-6;

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// A color in the Cartesian Oklab space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness, 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Green–red axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
}

impl Oklab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert linear sRGB to Oklab.
    #[must_use]
    pub fn from_linear_srgb(r: f64, g: f64, b: f64) -> Self {
        // Linear sRGB → LMS
        let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
        let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
        let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

        // Cube root (LMS → Oklab intermediate)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_)),
            a: 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_))),
            b: 0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_)),
        }
    }

    /// Convert to linear sRGB. The result may fall outside 0.0–1.0.
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        // Oklab → LMS (cube roots)
        let l_ = 0.215_803_757_3f64.mul_add(self.b, 0.396_337_777_4f64.mul_add(self.a, self.l));
        let m_ = 0.063_854_172_8f64.mul_add(-self.b, 0.105_561_345_8f64.mul_add(-self.a, self.l));
        let s_ = 1.291_485_548f64.mul_add(-self.b, 0.089_484_177_5f64.mul_add(-self.a, self.l));

        // Undo cube root
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // LMS → Linear sRGB
        let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
        let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
        let b = 1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

        (r, g, b)
    }

    /// Polar form. Hue is NaN when chroma is below [`ACHROMATIC_THRESHOLD`].
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = if c < ACHROMATIC_THRESHOLD {
            f64::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Oklch { l: self.l, c, h }
    }

    /// Euclidean distance in Oklab.
    ///
    /// This is the mixing-space metric; nearest-name matching uses
    /// [`perceptual_distance`](crate::perceptual_distance) in CIE Lab.
    #[must_use]
    pub fn distance(self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

// ─── OKLCH ───────────────────────────────────────────────────────────────────

/// A color in polar OKLCH form.
///
/// `h` is in degrees, `[0, 360)`, or NaN for achromatic colors. Callers
/// formatting a hue must go through [`fmt_fixed3`], which renders NaN as
/// `0.000`.
#[derive(Clone, Copy)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid in sRGB).
    pub c: f64,

    /// Hue angle in degrees, or NaN when undefined.
    pub h: f64,
}

impl Oklch {
    /// Create a color from OKLCH values. The hue is normalized unless NaN.
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        let h = if h.is_nan() { h } else { normalize_hue(h) };
        Self { l, c, h }
    }

    /// Whether this color has no defined hue.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.h.is_nan() || self.c.abs() < ACHROMATIC_THRESHOLD
    }

    /// Cartesian Oklab form. An undefined hue contributes no chroma.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        if self.h.is_nan() {
            return Oklab::new(self.l, 0.0, 0.0);
        }
        let h_rad = self.h.to_radians();
        Oklab::new(self.l, self.c * h_rad.cos(), self.c * h_rad.sin())
    }

    /// Mix this color with another in OKLCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`, and values in
    /// between are clamped to that range. Hue interpolation takes the
    /// shortest path around the color wheel; an achromatic endpoint borrows
    /// the hue of the other one.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = match (self.is_achromatic(), other.is_achromatic()) {
            (true, true) => f64::NAN,
            (true, false) => other.h,
            (false, true) => self.h,
            (false, false) => interpolate_hue(self.h, other.h, t),
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = self.to_oklab().to_linear_srgb();
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        range.contains(&r) && range.contains(&g) && range.contains(&b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the maximum in-gamut chroma, preserving lightness
    /// and hue.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;

        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }

    /// Quantize to an 8-bit sRGB [`Color`], gamut-mapping first.
    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.to_gamut().to_oklab().to_linear_srgb();
        Color::from_srgb(
            linear_to_srgb(r.clamp(0.0, 1.0)),
            linear_to_srgb(g.clamp(0.0, 1.0)),
            linear_to_srgb(b.clamp(0.0, 1.0)),
        )
    }
}

impl PartialEq for Oklch {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && match (self.h.is_nan(), other.h.is_nan()) {
                (true, true) => true,
                (false, false) => hue_diff(self.h, other.h) < EPS,
                _ => false,
            }
    }
}

impl fmt::Debug for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

/// CSS functional notation with three fixed decimals: `oklch(L C H)`.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            fmt_fixed3(self.l),
            fmt_fixed3(self.c),
            fmt_fixed3(self.h)
        )
    }
}

// ─── Mixing ──────────────────────────────────────────────────────────────────

/// Interpolate two device colors in OKLCH and quantize the result.
///
/// `weight_of_b` is clamped to `[0, 1]`. The endpoints are returned
/// unchanged, so `mix(a, b, 0.0) == a` and `mix(a, b, 1.0) == b` exactly.
#[must_use]
pub fn mix(a: &Color, b: &Color, weight_of_b: f64) -> Color {
    let t = weight_of_b.clamp(0.0, 1.0);
    if t <= 0.0 {
        return *a;
    }
    if t >= 1.0 {
        return *b;
    }
    a.to_oklch().mix(&b.to_oklch(), t).to_color()
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-14 % 360 + 360 rounds up to exactly 360.0
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
