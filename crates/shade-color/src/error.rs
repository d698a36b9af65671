//! Error types for color parsing.

use thiserror::Error;

/// Failure to interpret text as a device color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not a 3- or 6-digit hex color.
    #[error("invalid color '{input}': expected #rgb or #rrggbb")]
    InvalidColor {
        /// The rejected text, verbatim.
        input: String,
    },
}
