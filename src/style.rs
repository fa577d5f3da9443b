// src/style.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ContextError, Result};

/// The style tier of a nesting level.
///
/// Ordered from smallest to largest, so `Style::Script < Style::Text`.
/// See the TeXbook p. 141. Cramped variants are not tracked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Style {
    /// Second-level sub- and superscripts.
    ScriptScript,
    /// Sub- and superscripts.
    Script,
    /// Math in running text.
    Text,
    /// Math on its own line.
    Display,
}

impl Style {
    /// Every tier, smallest first.
    pub const ALL: [Style; 4] = [
        Style::ScriptScript,
        Style::Script,
        Style::Text,
        Style::Display,
    ];

    /// Style used for a superscript attached to a base in this style.
    pub fn sup(self) -> Style {
        match self {
            Style::Display | Style::Text => Style::Script,
            Style::Script | Style::ScriptScript => Style::ScriptScript,
        }
    }

    /// Style used for a subscript. Identical to `sup` while cramping is ignored.
    pub fn sub(self) -> Style {
        self.sup()
    }

    /// Style used for the numerator of a fraction.
    pub fn frac_num(self) -> Style {
        match self {
            Style::Display => Style::Text,
            Style::Text => Style::Script,
            Style::Script | Style::ScriptScript => Style::ScriptScript,
        }
    }

    /// Style used for the denominator of a fraction.
    pub fn frac_den(self) -> Style {
        self.frac_num()
    }

    /// Glyph scale relative to text style.
    pub fn size_multiplier(self) -> f64 {
        match self {
            Style::Display | Style::Text => 1.0,
            Style::Script => 0.7,
            Style::ScriptScript => 0.5,
        }
    }

    /// Script tiers use tighter spacing rules.
    pub fn is_tight(self) -> bool {
        self <= Style::Script
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Display => "display",
            Style::Text => "text",
            Style::Script => "script",
            Style::ScriptScript => "script_script",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "display" => Ok(Style::Display),
            "text" => Ok(Style::Text),
            "script" => Ok(Style::Script),
            "scriptscript" | "script_script" => Ok(Style::ScriptScript),
            _ => Err(ContextError::InvalidStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = ContextError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Style> for &'static str {
    fn from(style: Style) -> Self {
        style.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tiers_are_ordered_smallest_first() {
        let mut sorted = Style::ALL;
        sorted.sort();
        assert_eq!(sorted, Style::ALL);
        assert!(Style::Display > Style::Text);
    }

    #[test]
    fn scripts_shrink_until_scriptscript() {
        assert_eq!(Style::Display.sup(), Style::Script);
        assert_eq!(Style::Text.sub(), Style::Script);
        assert_eq!(Style::Script.sup(), Style::ScriptScript);
        assert_eq!(Style::ScriptScript.sup(), Style::ScriptScript);
    }

    #[test]
    fn fractions_step_down_one_tier() {
        assert_eq!(Style::Display.frac_num(), Style::Text);
        assert_eq!(Style::Text.frac_den(), Style::Script);
        assert_eq!(Style::Script.frac_num(), Style::ScriptScript);
    }

    #[test]
    fn only_script_tiers_are_tight() {
        let tight: Vec<Style> = Style::ALL.into_iter().filter(|s| s.is_tight()).collect();
        assert_eq!(tight, vec![Style::ScriptScript, Style::Script]);
    }

    #[test]
    fn parse_accepts_both_scriptscript_spellings() {
        assert_eq!("scriptscript".parse::<Style>().unwrap(), Style::ScriptScript);
        assert_eq!("Script_Script".parse::<Style>().unwrap(), Style::ScriptScript);
        assert_eq!(" display ".parse::<Style>().unwrap(), Style::Display);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "huge".parse::<Style>().unwrap_err();
        assert_eq!(err, ContextError::InvalidStyle("huge".into()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }
}
