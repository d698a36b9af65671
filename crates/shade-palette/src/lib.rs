//! # shade-palette — tonal scales, color names, and CSS export
//!
//! Turns one base color into a ten-step lightness scale, names it, and
//! serializes it as CSS custom properties.
//!
//! # Architecture
//!
//! ```text
//! "#6366f1"
//!     │
//!     ▼
//! scale.rs:      mix white→base and black→base in OKLCH (weights.rs)
//!     │               → 10 × (label, Color), step 500 = input verbatim
//!     ▼
//! namer.rs:      nearest dictionary entry to step 500 (dictionary.rs, CIE Lab)
//!     │               → "Indigo"
//!     ▼
//! export.rs:     "  --color-indigo-50: oklch(0.980 0.010 273.359);\n" …
//! ```
//!
//! Every function is a pure function of its arguments and the static
//! tables, so palettes can be computed from any number of threads and
//! memoized freely by callers.

pub mod dictionary;
pub mod export;
pub mod namer;
pub mod palette;
pub mod scale;
pub mod weights;

pub use dictionary::{DICTIONARY_VERSION, NAMED_COLORS, NamedColor};
pub use export::{CSS_PREFIX, ExportError, export, token_name, wrap_theme_block};
pub use namer::{FALLBACK_NAME, Match, name, name_hex, nearest};
pub use palette::Palette;
pub use scale::{ColorScale, ScaleStep, generate, generate_from_hex, try_generate};
pub use weights::{STEP_COUNT, STEPS, WEIGHTS_VERSION};
