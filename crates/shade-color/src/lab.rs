// SPDX-License-Identifier: MIT
//
// CIE L*a*b* (D65) — the space nearest-name distances are measured in.
//
// Scales are mixed in OKLCH, but the named-color dictionary is ranked by
// Euclidean distance here. The two spaces order colors differently, so
// swapping one for the other changes which names win.

use crate::color::Color;

/// D65 reference white.
const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

/// (6/29)^3, the linear-segment threshold of the Lab transfer function.
const EPSILON: f64 = 216.0 / 24_389.0;
/// (29/3)^3
const KAPPA: f64 = 24_389.0 / 27.0;

/// A color in CIE L*a*b* under the D65 illuminant. `l` runs 0–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert linear sRGB to Lab through CIE XYZ.
    #[must_use]
    pub fn from_linear_srgb(r: f64, g: f64, b: f64) -> Self {
        let x = 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g));
        let y = 0.072_175f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g));
        let z = 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192 * g));

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Self {
            l: 116.0f64.mul_add(fy, -16.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Euclidean distance (CIE76 ΔE*ab).
    #[must_use]
    pub fn distance(self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA.mul_add(t, 16.0) / 116.0
    }
}

/// Perceptual distance between two device colors: ΔE in CIE Lab.
///
/// Symmetric, non-negative, and exactly zero for equal colors.
#[must_use]
pub fn perceptual_distance(a: &Color, b: &Color) -> f64 {
    if a == b {
        return 0.0;
    }
    a.to_lab().distance(&b.to_lab())
}
