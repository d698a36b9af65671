//! Tonal scale generation — one base color in, ten ordered steps out.
//!
//! Every non-base step is an OKLCH mix between a fixed anchor (white for
//! tints, black for shades) and the base, weighted by the recipe table in
//! [`weights`](crate::weights). The base step is the caller's color copied
//! verbatim, so it never drifts through a conversion round-trip.

use shade_color::{Color, ColorError, Oklch, mix};
use tracing::debug;

use crate::weights::{BASE_INDEX, STEP_COUNT, STEPS, StepRecipe};

// ---------------------------------------------------------------------------
// ScaleStep
// ---------------------------------------------------------------------------

/// A step label paired with its device color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleStep {
    /// Nominal step label: 50, 100, 200, … 900.
    pub label: u16,
    /// The step's color.
    pub color: Color,
}

impl ScaleStep {
    #[must_use]
    pub const fn new(label: u16, color: Color) -> Self {
        Self { label, color }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// The polar triple, re-derived from the device color on every call.
    #[must_use]
    pub fn oklch(&self) -> Oklch {
        self.color.to_oklch()
    }
}

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// An ordered, lightest-to-darkest sequence of scale steps.
///
/// The generator only ever produces an empty scale (no palette available)
/// or a complete one of [`STEP_COUNT`] steps. Scales assembled by hand via
/// [`From<Vec<ScaleStep>>`] may have any length; the exporter rejects
/// anything that is not complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScale {
    steps: Vec<ScaleStep>,
}

impl ColorScale {
    /// The empty scale: no palette available.
    #[must_use]
    pub const fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the scale has exactly [`STEP_COUNT`] steps.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps.len() == STEP_COUNT
    }

    #[must_use]
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScaleStep> {
        self.steps.get(index)
    }

    /// The base (500) step, if the scale is complete.
    #[must_use]
    pub fn base(&self) -> Option<&ScaleStep> {
        if self.is_complete() {
            self.steps.get(BASE_INDEX)
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScaleStep> {
        self.steps.iter()
    }
}

impl From<Vec<ScaleStep>> for ColorScale {
    fn from(steps: Vec<ScaleStep>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a ColorScale {
    type Item = &'a ScaleStep;
    type IntoIter = std::slice::Iter<'a, ScaleStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the ten-step scale for `base`.
#[must_use]
pub fn generate(base: &Color) -> ColorScale {
    let steps: Vec<ScaleStep> = STEPS
        .iter()
        .map(|recipe| ScaleStep::new(recipe.label, step_color(base, recipe)))
        .collect();
    debug!(base = %base, "generated {} step scale", steps.len());
    ColorScale { steps }
}

/// Parse `text` and generate its scale, surfacing the parse error.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if `text` is not a hex color.
pub fn try_generate(text: &str) -> Result<ColorScale, ColorError> {
    let base = Color::parse(text)?;
    Ok(generate(&base))
}

/// Parse `text` and generate its scale, failing closed.
///
/// Malformed input yields an empty scale rather than a partial one;
/// callers should treat that as "no palette available".
#[must_use]
pub fn generate_from_hex(text: &str) -> ColorScale {
    match try_generate(text) {
        Ok(scale) => scale,
        Err(err) => {
            debug!(%err, "no palette available");
            ColorScale::empty()
        }
    }
}

fn step_color(base: &Color, recipe: &StepRecipe) -> Color {
    match recipe.anchor.color() {
        Some(anchor) => mix(&anchor, base, recipe.base_weight),
        None => *base,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
