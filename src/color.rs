// src/color.rs

/// Literal returned for phantom content.
pub const TRANSPARENT: &str = "transparent";

/// Named theme colors and their CSS literals.
const COLOR_MAP: &[(&str, &str)] = &[
    ("katex-blue", "#6495ed"),
    ("katex-orange", "#ffa500"),
    ("katex-pink", "#ff00af"),
    ("katex-red", "#df0030"),
    ("katex-green", "#28ae7b"),
    ("katex-gray", "gray"),
    ("katex-purple", "#9d38bd"),
];

/// Look up a named theme color.
pub fn lookup(name: &str) -> Option<&'static str> {
    COLOR_MAP
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, literal)| *literal)
}

/// All named colors with their literals, in table order.
pub fn names() -> impl Iterator<Item = (&'static str, &'static str)> {
    COLOR_MAP.iter().copied()
}

/// Resolve the color to paint with.
///
/// Phantom content is always transparent. Known names map through the table;
/// anything else is assumed to already be a literal. `None` means inherit.
pub fn resolve(color: Option<&str>, phantom: bool) -> Option<&str> {
    if phantom {
        return Some(TRANSPARENT);
    }
    color.map(|c| lookup(c).map_or(c, |literal| literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_colors_map_to_literals() {
        assert_eq!(lookup("katex-blue"), Some("#6495ed"));
        assert_eq!(lookup("katex-gray"), Some("gray"));
        assert_eq!(lookup("blue"), None);
    }

    #[test]
    fn unknown_colors_pass_through() {
        assert_eq!(resolve(Some("#123456"), false), Some("#123456"));
        assert_eq!(resolve(Some("katex-red"), false), Some("#df0030"));
    }

    #[test]
    fn phantom_wins_over_any_color() {
        assert_eq!(resolve(Some("katex-red"), true), Some(TRANSPARENT));
        assert_eq!(resolve(None, true), Some(TRANSPARENT));
    }

    #[test]
    fn unset_color_inherits() {
        assert_eq!(resolve(None, false), None);
    }

    #[test]
    fn table_has_seven_entries() {
        assert_eq!(names().count(), 7);
    }
}
