// SPDX-License-Identifier: MIT
//
// Fixed-precision number formatting for exported color notation.

/// Format a component with exactly three decimals.
///
/// NaN (an undefined hue) renders as `0.000`, and negative zero or values
/// that round to it render without a sign, so the output for a given input
/// is always the same string.
#[must_use]
pub fn fmt_fixed3(v: f64) -> String {
    if v.is_nan() {
        return "0.000".to_string();
    }
    let s = format!("{v:.3}");
    if s == "-0.000" { "0.000".to_string() } else { s }
}
