//! Nearest color naming — find the dictionary entry closest to a color.
//!
//! Distances are Euclidean in CIE Lab (see
//! [`perceptual_distance`](shade_color::perceptual_distance)). The scan is
//! linear over the whole dictionary with a strict `<` comparison, so among
//! equally near entries the first in dictionary order wins. There is no
//! distance cutoff: the nearest entry is returned however far away it is.
//!
//! Naming is cosmetic and never fails outward. Malformed input degrades to
//! [`FALLBACK_NAME`]; malformed dictionary entries are skipped with a
//! warning.

use std::sync::LazyLock;

use shade_color::{Color, Lab};
use tracing::warn;

use crate::dictionary::{NAMED_COLORS, NamedColor};

/// Name returned when no dictionary entry can be matched.
pub const FALLBACK_NAME: &str = "Custom";

/// A dictionary hit and how far it is from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub entry: &'static NamedColor,
    /// CIE Lab ΔE between the query and the entry.
    pub distance: f64,
}

/// The built-in dictionary with each entry's Lab coordinates, resolved once.
static RESOLVED: LazyLock<Vec<(Lab, &'static NamedColor)>> =
    LazyLock::new(|| resolve(NAMED_COLORS));

fn resolve(entries: &'static [NamedColor]) -> Vec<(Lab, &'static NamedColor)> {
    entries
        .iter()
        .filter_map(|entry| match Color::parse(entry.hex) {
            Ok(color) => Some((color.to_lab(), entry)),
            Err(err) => {
                warn!(name = entry.name, %err, "skipping malformed dictionary entry");
                None
            }
        })
        .collect()
}

fn scan<'a>(
    query: Lab,
    entries: impl IntoIterator<Item = &'a (Lab, &'static NamedColor)>,
) -> Option<Match> {
    let mut best: Option<Match> = None;
    for &(lab, entry) in entries {
        let distance = query.distance(&lab);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Match { entry, distance });
        }
    }
    best
}

/// The built-in dictionary entry nearest to `color`.
///
/// `None` only if the dictionary has no usable entries.
#[must_use]
pub fn nearest(color: &Color) -> Option<Match> {
    scan(color.to_lab(), RESOLVED.iter())
}

/// The entry of `entries` nearest to `color`, for caller-supplied tables.
#[must_use]
pub fn nearest_in(color: &Color, entries: &'static [NamedColor]) -> Option<Match> {
    scan(color.to_lab(), resolve(entries).iter())
}

/// Display name for `color`, or [`FALLBACK_NAME`] if nothing matches.
#[must_use]
pub fn name(color: &Color) -> String {
    nearest(color).map_or_else(|| FALLBACK_NAME.to_string(), |m| m.entry.name.to_string())
}

/// Display name for a hex string. Total: malformed input yields
/// [`FALLBACK_NAME`].
#[must_use]
pub fn name_hex(text: &str) -> String {
    match Color::parse(text) {
        Ok(color) => name(&color),
        Err(err) => {
            warn!(%err, "naming fell back to {FALLBACK_NAME}");
            FALLBACK_NAME.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
