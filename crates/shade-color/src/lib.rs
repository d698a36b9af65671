// SPDX-License-Identifier: MIT
//
// shade-color — color math for the shade palette engine.
//
// Three representations of one color, with pure conversions between them:
//
//   Color  — 24-bit device RGB, the canonical hex form (`#rrggbb`)
//   Oklab  — perceptually uniform Cartesian space
//   Oklch  — polar form of Oklab, where scales are mixed
//
// Plus CIE Lab (D65), used only to rank nearest color names.
//
// Everything here is deterministic f64 arithmetic with no shared state,
// so the same input always yields bit-identical output.

pub mod color;
pub mod error;
pub mod format;
pub mod lab;
pub mod oklab;

pub use color::Color;
pub use error::ColorError;
pub use format::fmt_fixed3;
pub use lab::{Lab, perceptual_distance};
pub use oklab::{ACHROMATIC_THRESHOLD, Oklab, Oklch, mix};
