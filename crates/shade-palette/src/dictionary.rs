//! The named-color dictionary used by [`namer`](crate::namer).
//!
//! A fixed, ordered table of `(hex, name)` pairs. Order is part of the
//! contract: when two entries are equally near a query color, the earlier
//! one wins. Bump [`DICTIONARY_VERSION`] whenever an entry is added,
//! removed, renamed, or reordered, since any of those can change the name
//! an existing palette resolves to.
//!
//! The table opens with modern UI swatch families (the 500 shades), then
//! lists the CSS Color Module named colors in alphabetical order with
//! display-friendly names. `grey` spellings are omitted as exact
//! duplicates of their `gray` twins.

/// Revision of [`NAMED_COLORS`].
pub const DICTIONARY_VERSION: u32 = 1;

/// A dictionary entry: a reference color and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Reference color as `#rrggbb`.
    pub hex: &'static str,
    /// Human-readable name, e.g. `"Alice Blue"`.
    pub name: &'static str,
}

const fn entry(hex: &'static str, name: &'static str) -> NamedColor {
    NamedColor { hex, name }
}

/// The dictionary, in match-priority order.
#[rustfmt::skip]
pub const NAMED_COLORS: &[NamedColor] = &[
    // ── UI swatch families ────────────────────────────────
    entry("#64748b", "Slate"),
    entry("#6b7280", "Gray"),
    entry("#71717a", "Zinc"),
    entry("#737373", "Neutral"),
    entry("#78716c", "Stone"),
    entry("#ef4444", "Red"),
    entry("#f97316", "Orange"),
    entry("#f59e0b", "Amber"),
    entry("#eab308", "Yellow"),
    entry("#84cc16", "Lime"),
    entry("#22c55e", "Green"),
    entry("#10b981", "Emerald"),
    entry("#14b8a6", "Teal"),
    entry("#06b6d4", "Cyan"),
    entry("#0ea5e9", "Sky"),
    entry("#3b82f6", "Blue"),
    entry("#6366f1", "Indigo"),
    entry("#8b5cf6", "Violet"),
    entry("#a855f7", "Purple"),
    entry("#d946ef", "Fuchsia"),
    entry("#ec4899", "Pink"),
    entry("#f43f5e", "Rose"),

    // ── CSS named colors ──────────────────────────────────
    entry("#f0f8ff", "Alice Blue"),
    entry("#faebd7", "Antique White"),
    entry("#00ffff", "Aqua"),
    entry("#7fffd4", "Aquamarine"),
    entry("#f0ffff", "Azure"),
    entry("#f5f5dc", "Beige"),
    entry("#ffe4c4", "Bisque"),
    entry("#000000", "Black"),
    entry("#ffebcd", "Blanched Almond"),
    entry("#0000ff", "Blue"),
    entry("#8a2be2", "Blue Violet"),
    entry("#a52a2a", "Brown"),
    entry("#deb887", "Burly Wood"),
    entry("#5f9ea0", "Cadet Blue"),
    entry("#7fff00", "Chartreuse"),
    entry("#d2691e", "Chocolate"),
    entry("#ff7f50", "Coral"),
    entry("#6495ed", "Cornflower Blue"),
    entry("#fff8dc", "Cornsilk"),
    entry("#dc143c", "Crimson"),
    entry("#00ffff", "Cyan"),
    entry("#00008b", "Dark Blue"),
    entry("#008b8b", "Dark Cyan"),
    entry("#b8860b", "Dark Goldenrod"),
    entry("#a9a9a9", "Dark Gray"),
    entry("#006400", "Dark Green"),
    entry("#bdb76b", "Dark Khaki"),
    entry("#8b008b", "Dark Magenta"),
    entry("#556b2f", "Dark Olive Green"),
    entry("#ff8c00", "Dark Orange"),
    entry("#9932cc", "Dark Orchid"),
    entry("#8b0000", "Dark Red"),
    entry("#e9967a", "Dark Salmon"),
    entry("#8fbc8f", "Dark Sea Green"),
    entry("#483d8b", "Dark Slate Blue"),
    entry("#2f4f4f", "Dark Slate Gray"),
    entry("#00ced1", "Dark Turquoise"),
    entry("#9400d3", "Dark Violet"),
    entry("#ff1493", "Deep Pink"),
    entry("#00bfff", "Deep Sky Blue"),
    entry("#696969", "Dim Gray"),
    entry("#1e90ff", "Dodger Blue"),
    entry("#b22222", "Fire Brick"),
    entry("#fffaf0", "Floral White"),
    entry("#228b22", "Forest Green"),
    entry("#ff00ff", "Fuchsia"),
    entry("#dcdcdc", "Gainsboro"),
    entry("#f8f8ff", "Ghost White"),
    entry("#ffd700", "Gold"),
    entry("#daa520", "Goldenrod"),
    entry("#808080", "Gray"),
    entry("#008000", "Green"),
    entry("#adff2f", "Green Yellow"),
    entry("#f0fff0", "Honeydew"),
    entry("#ff69b4", "Hot Pink"),
    entry("#cd5c5c", "Indian Red"),
    entry("#4b0082", "Indigo"),
    entry("#fffff0", "Ivory"),
    entry("#f0e68c", "Khaki"),
    entry("#e6e6fa", "Lavender"),
    entry("#fff0f5", "Lavender Blush"),
    entry("#7cfc00", "Lawn Green"),
    entry("#fffacd", "Lemon Chiffon"),
    entry("#add8e6", "Light Blue"),
    entry("#f08080", "Light Coral"),
    entry("#e0ffff", "Light Cyan"),
    entry("#fafad2", "Light Goldenrod Yellow"),
    entry("#d3d3d3", "Light Gray"),
    entry("#90ee90", "Light Green"),
    entry("#ffb6c1", "Light Pink"),
    entry("#ffa07a", "Light Salmon"),
    entry("#20b2aa", "Light Sea Green"),
    entry("#87cefa", "Light Sky Blue"),
    entry("#778899", "Light Slate Gray"),
    entry("#b0c4de", "Light Steel Blue"),
    entry("#ffffe0", "Light Yellow"),
    entry("#00ff00", "Lime"),
    entry("#32cd32", "Lime Green"),
    entry("#faf0e6", "Linen"),
    entry("#ff00ff", "Magenta"),
    entry("#800000", "Maroon"),
    entry("#66cdaa", "Medium Aquamarine"),
    entry("#0000cd", "Medium Blue"),
    entry("#ba55d3", "Medium Orchid"),
    entry("#9370db", "Medium Purple"),
    entry("#3cb371", "Medium Sea Green"),
    entry("#7b68ee", "Medium Slate Blue"),
    entry("#00fa9a", "Medium Spring Green"),
    entry("#48d1cc", "Medium Turquoise"),
    entry("#c71585", "Medium Violet Red"),
    entry("#191970", "Midnight Blue"),
    entry("#f5fffa", "Mint Cream"),
    entry("#ffe4e1", "Misty Rose"),
    entry("#ffe4b5", "Moccasin"),
    entry("#ffdead", "Navajo White"),
    entry("#000080", "Navy"),
    entry("#fdf5e6", "Old Lace"),
    entry("#808000", "Olive"),
    entry("#6b8e23", "Olive Drab"),
    entry("#ffa500", "Orange"),
    entry("#ff4500", "Orange Red"),
    entry("#da70d6", "Orchid"),
    entry("#eee8aa", "Pale Goldenrod"),
    entry("#98fb98", "Pale Green"),
    entry("#afeeee", "Pale Turquoise"),
    entry("#db7093", "Pale Violet Red"),
    entry("#ffefd5", "Papaya Whip"),
    entry("#ffdab9", "Peach Puff"),
    entry("#cd853f", "Peru"),
    entry("#ffc0cb", "Pink"),
    entry("#dda0dd", "Plum"),
    entry("#b0e0e6", "Powder Blue"),
    entry("#800080", "Purple"),
    entry("#663399", "Rebecca Purple"),
    entry("#ff0000", "Red"),
    entry("#bc8f8f", "Rosy Brown"),
    entry("#4169e1", "Royal Blue"),
    entry("#8b4513", "Saddle Brown"),
    entry("#fa8072", "Salmon"),
    entry("#f4a460", "Sandy Brown"),
    entry("#2e8b57", "Sea Green"),
    entry("#fff5ee", "Seashell"),
    entry("#a0522d", "Sienna"),
    entry("#c0c0c0", "Silver"),
    entry("#87ceeb", "Sky Blue"),
    entry("#6a5acd", "Slate Blue"),
    entry("#708090", "Slate Gray"),
    entry("#fffafa", "Snow"),
    entry("#00ff7f", "Spring Green"),
    entry("#4682b4", "Steel Blue"),
    entry("#d2b48c", "Tan"),
    entry("#008080", "Teal"),
    entry("#d8bfd8", "Thistle"),
    entry("#ff6347", "Tomato"),
    entry("#40e0d0", "Turquoise"),
    entry("#ee82ee", "Violet"),
    entry("#f5deb3", "Wheat"),
    entry("#ffffff", "White"),
    entry("#f5f5f5", "White Smoke"),
    entry("#ffff00", "Yellow"),
    entry("#9acd32", "Yellow Green"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use shade_color::Color;

    #[test]
    fn every_entry_parses() {
        for entry in NAMED_COLORS {
            assert!(Color::parse(entry.hex).is_ok(), "bad hex in {entry:?}");
        }
    }

    #[test]
    fn entries_are_normalized_lowercase() {
        for entry in NAMED_COLORS {
            assert_eq!(entry.hex.len(), 7, "{entry:?}");
            assert_eq!(entry.hex, entry.hex.to_lowercase(), "{entry:?}");
            assert!(entry.hex.starts_with('#'), "{entry:?}");
        }
    }

    #[test]
    fn names_are_non_empty_and_trimmed() {
        for entry in NAMED_COLORS {
            assert!(!entry.name.is_empty());
            assert_eq!(entry.name, entry.name.trim());
        }
    }

    #[test]
    fn table_size_is_stable() {
        assert_eq!(NAMED_COLORS.len(), 163);
    }

    #[test]
    fn swatch_families_come_first() {
        assert_eq!(NAMED_COLORS[0], entry("#64748b", "Slate"));
        assert_eq!(NAMED_COLORS[16], entry("#6366f1", "Indigo"));
    }
}
