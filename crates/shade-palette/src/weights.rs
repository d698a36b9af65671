//! The step recipe table — which anchor each scale step is mixed from and
//! how much of the base color it keeps.
//!
//! These values are hand-tuned design constants, not derived at runtime.
//! They are symmetric around the base step: the lightest step keeps 5% of
//! the base (95% white) and the darkest keeps 10% (90% black). Bump
//! [`WEIGHTS_VERSION`] whenever a value changes, since every exported
//! palette shifts with it.

use shade_color::Color;

/// Revision of [`STEPS`].
pub const WEIGHTS_VERSION: u32 = 1;

/// Number of steps in a complete scale.
pub const STEP_COUNT: usize = 10;

/// Index of the step that is the caller's color, unmodified.
pub const BASE_INDEX: usize = 5;

/// What a step is mixed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Tint: mixed between pure white and the base.
    White,
    /// The base color itself, copied verbatim.
    Base,
    /// Shade: mixed between pure black and the base.
    Black,
}

impl Anchor {
    /// The anchor's device color, or `None` for [`Anchor::Base`].
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::White => Some(Color::WHITE),
            Self::Black => Some(Color::BLACK),
            Self::Base => None,
        }
    }
}

/// One row of the recipe table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecipe {
    /// Nominal step label (50–900).
    pub label: u16,
    /// What the step is mixed from.
    pub anchor: Anchor,
    /// Weight of the base color in the mix, `0.0..=1.0`.
    pub base_weight: f64,
}

const fn step(label: u16, anchor: Anchor, base_weight: f64) -> StepRecipe {
    StepRecipe { label, anchor, base_weight }
}

/// The ten steps, lightest to darkest.
#[rustfmt::skip]
pub const STEPS: [StepRecipe; STEP_COUNT] = [
    step(50,  Anchor::White, 0.05),
    step(100, Anchor::White, 0.10),
    step(200, Anchor::White, 0.25),
    step(300, Anchor::White, 0.40),
    step(400, Anchor::White, 0.70),
    step(500, Anchor::Base,  1.00),
    step(600, Anchor::Black, 0.70),
    step(700, Anchor::Black, 0.40),
    step(800, Anchor::Black, 0.25),
    step(900, Anchor::Black, 0.10),
];

/// Step labels in scale order.
#[must_use]
pub fn labels() -> [u16; STEP_COUNT] {
    STEPS.map(|s| s.label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_fixed() {
        assert_eq!(labels(), [50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn base_step_is_500_and_unmixed() {
        let base = STEPS[BASE_INDEX];
        assert_eq!(base.label, 500);
        assert_eq!(base.anchor, Anchor::Base);
        assert!((base.base_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tints_before_base_and_shades_after() {
        for (i, s) in STEPS.iter().enumerate() {
            let expected = match i.cmp(&BASE_INDEX) {
                std::cmp::Ordering::Less => Anchor::White,
                std::cmp::Ordering::Equal => Anchor::Base,
                std::cmp::Ordering::Greater => Anchor::Black,
            };
            assert_eq!(s.anchor, expected, "step {}", s.label);
        }
    }

    #[test]
    fn weights_rise_toward_base() {
        for pair in STEPS[..=BASE_INDEX].windows(2) {
            assert!(pair[0].base_weight < pair[1].base_weight, "{pair:?}");
        }
        for pair in STEPS[BASE_INDEX..].windows(2) {
            assert!(pair[0].base_weight > pair[1].base_weight, "{pair:?}");
        }
    }

    #[test]
    fn weights_are_symmetric_around_base() {
        for k in 1..STEP_COUNT - BASE_INDEX {
            let lighter = STEPS[BASE_INDEX - k].base_weight;
            let darker = STEPS[BASE_INDEX + k].base_weight;
            assert!((lighter - darker).abs() < f64::EPSILON, "offset {k}: {lighter} vs {darker}");
        }
    }

    #[test]
    fn extremes_are_dominated_by_anchor() {
        assert!(STEPS[0].base_weight <= 0.1);
        assert!(STEPS[STEP_COUNT - 1].base_weight <= 0.1);
    }

    #[test]
    fn anchor_colors() {
        assert_eq!(Anchor::White.color(), Some(Color::WHITE));
        assert_eq!(Anchor::Black.color(), Some(Color::BLACK));
        assert_eq!(Anchor::Base.color(), None);
    }
}
