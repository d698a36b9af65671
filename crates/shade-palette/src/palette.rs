//! A generated scale bundled with its display name.

use shade_color::{Color, ColorError};

use crate::export::{ExportError, export};
use crate::namer::name;
use crate::scale::{ColorScale, generate};

/// Everything a presentation layer needs for one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub scale: ColorScale,
    /// Nearest dictionary name for the base step.
    pub name: String,
}

impl Palette {
    /// Generate the scale for `base` and name its base step once.
    #[must_use]
    pub fn new(base: Color) -> Self {
        let scale = generate(&base);
        let name = name(&base);
        Self { base, scale, name }
    }

    /// Parse `text` and build its palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] for malformed input.
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        Color::parse(text).map(Self::new)
    }

    /// Replace the dictionary name, e.g. with a user-chosen one.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// CSS custom-property declarations for the whole scale.
    ///
    /// # Errors
    ///
    /// Propagates [`ExportError`] from [`export`]; a palette built through
    /// [`Palette::new`] always has a complete scale.
    pub fn export(&self) -> Result<String, ExportError> {
        export(&self.scale, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::BASE_INDEX;

    #[test]
    fn indigo_palette() {
        let p = Palette::from_hex("#6366F1").unwrap();
        assert_eq!(p.base.to_hex(), "#6366f1");
        assert_eq!(p.name, "Indigo");
        assert_eq!(p.scale.steps()[BASE_INDEX].color, p.base);
        assert!(p.export().unwrap().starts_with("  --color-indigo-50: "));
    }

    #[test]
    fn name_override_flows_into_export() {
        let p = Palette::from_hex("#6366f1").unwrap().with_name("Brand Primary");
        let text = p.export().unwrap();
        assert!(text.contains("  --color-brand-primary-500: oklch(0.585 0.204 277.117);\n"));
    }

    #[test]
    fn black_palette_is_named_black() {
        let p = Palette::new(Color::BLACK);
        assert_eq!(p.name, "Black");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(Palette::from_hex("not-a-color").is_err());
    }
}
