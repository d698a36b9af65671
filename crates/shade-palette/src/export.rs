//! CSS export — a complete scale as custom-property declarations.
//!
//! ```text
//!   --color-sky-blue-50: oklch(0.980 0.010 273.359);
//!   --color-sky-blue-100: oklch(0.958 0.020 279.937);
//!   ...
//! ```
//!
//! Each step's OKLCH triple is re-derived from its device color at export
//! time, never taken from whatever produced the scale, so two scales with
//! the same colors always export byte-identical text.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::scale::{ColorScale, ScaleStep};
use crate::weights::STEP_COUNT;

/// Prefix shared by every exported custom property.
pub const CSS_PREFIX: &str = "--color-";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Export failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The scale did not have exactly ten steps.
    #[error("cannot export an incomplete scale: expected {} steps, found {len}", STEP_COUNT)]
    IncompleteScale {
        /// Number of steps the scale actually had.
        len: usize,
    },
}

/// Identifier-safe form of a display name: lowercased, surrounding
/// whitespace dropped, each inner whitespace run replaced by one hyphen.
#[must_use]
pub fn token_name(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// One declaration line, newline-terminated.
#[must_use]
pub fn declaration(token: &str, step: &ScaleStep) -> String {
    format!("  {CSS_PREFIX}{token}-{}: {};\n", step.label, step.oklch())
}

/// Format a complete scale as CSS custom-property declarations, steps
/// 50 through 900 in order.
///
/// # Errors
///
/// Returns [`ExportError::IncompleteScale`] if `scale` does not have
/// exactly ten steps; no partial text is produced.
pub fn export(scale: &ColorScale, name: &str) -> Result<String, ExportError> {
    if !scale.is_complete() {
        return Err(ExportError::IncompleteScale { len: scale.len() });
    }
    let token = token_name(name);
    Ok(scale.iter().map(|step| declaration(&token, step)).collect())
}

/// Wrap exported declarations in an `@theme` block.
#[must_use]
pub fn wrap_theme_block(declarations: &str) -> String {
    format!("@theme {{\n{declarations}}}\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{generate, generate_from_hex};
    use pretty_assertions::assert_eq;
    use shade_color::Color;

    #[test]
    fn token_lowercases_and_hyphenates() {
        assert_eq!(token_name("Indigo"), "indigo");
        assert_eq!(token_name("Light Goldenrod Yellow"), "light-goldenrod-yellow");
    }

    #[test]
    fn token_collapses_whitespace_runs() {
        assert_eq!(token_name("Sky \t  Blue"), "sky-blue");
        assert_eq!(token_name("  Sky\nBlue  "), "sky-blue");
    }

    #[test]
    fn indigo_export() {
        let scale = generate(&Color::parse("#6366f1").unwrap());
        let text = export(&scale, "Indigo").unwrap();
        assert_eq!(
            text,
            "  --color-indigo-50: oklch(0.980 0.010 273.359);\n\
             \x20 --color-indigo-100: oklch(0.958 0.020 279.937);\n\
             \x20 --color-indigo-200: oklch(0.897 0.050 276.665);\n\
             \x20 --color-indigo-300: oklch(0.833 0.082 277.606);\n\
             \x20 --color-indigo-400: oklch(0.709 0.143 277.249);\n\
             \x20 --color-indigo-500: oklch(0.585 0.204 277.117);\n\
             \x20 --color-indigo-600: oklch(0.409 0.143 277.050);\n\
             \x20 --color-indigo-700: oklch(0.234 0.081 277.126);\n\
             \x20 --color-indigo-800: oklch(0.146 0.051 275.860);\n\
             \x20 --color-indigo-900: oklch(0.044 0.030 264.052);\n"
        );
    }

    #[test]
    fn black_export_has_zero_hues() {
        let scale = generate(&Color::BLACK);
        let text = export(&scale, "Black").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), STEP_COUNT);
        for line in &lines {
            assert!(line.ends_with(" 0.000);"), "hue not zeroed: {line}");
        }
        assert_eq!(lines[5], "  --color-black-500: oklch(0.000 0.000 0.000);");
        assert_eq!(lines[0], "  --color-black-50: oklch(0.949 0.000 0.000);");
    }

    #[test]
    fn multi_word_names_are_tokenized() {
        let scale = generate(&Color::parse("#f0f8ff").unwrap());
        let text = export(&scale, "Alice Blue").unwrap();
        assert!(text.starts_with("  --color-alice-blue-50: oklch("));
    }

    #[test]
    fn every_line_is_newline_terminated() {
        let scale = generate(&Color::parse("#ef4444").unwrap());
        let text = export(&scale, "Red").unwrap();
        assert!(text.ends_with(";\n"));
        assert_eq!(text.matches('\n').count(), STEP_COUNT);
    }

    #[test]
    fn export_is_deterministic() {
        let a = export(&generate_from_hex("#0ea5e9"), "Sky").unwrap();
        let b = export(&generate_from_hex("#0EA5E9"), "Sky").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_scale_is_rejected() {
        let scale = generate_from_hex("not-a-color");
        assert_eq!(export(&scale, "Custom"), Err(ExportError::IncompleteScale { len: 0 }));
    }

    #[test]
    fn partial_scale_is_rejected() {
        let full = generate(&Color::WHITE);
        let partial = ColorScale::from(full.steps()[..9].to_vec());
        assert_eq!(export(&partial, "White"), Err(ExportError::IncompleteScale { len: 9 }));
    }

    #[test]
    fn oversized_scale_is_rejected() {
        let mut steps = generate(&Color::WHITE).steps().to_vec();
        steps.push(ScaleStep::new(950, Color::BLACK));
        let scale = ColorScale::from(steps);
        assert_eq!(export(&scale, "White"), Err(ExportError::IncompleteScale { len: 11 }));
    }

    #[test]
    fn error_message_reports_length() {
        let err = ExportError::IncompleteScale { len: 3 };
        assert_eq!(
            err.to_string(),
            "cannot export an incomplete scale: expected 10 steps, found 3"
        );
    }

    #[test]
    fn theme_block_wraps_declarations() {
        let body = "  --color-x-50: oklch(1.000 0.000 0.000);\n";
        assert_eq!(
            wrap_theme_block(body),
            "@theme {\n  --color-x-50: oklch(1.000 0.000 0.000);\n}\n"
        );
    }
}
