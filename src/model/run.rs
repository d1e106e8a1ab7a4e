//! Run-level types: the smallest styled text unit in a paragraph.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A three-valued style flag.
///
/// OOXML toggle properties distinguish "not mentioned" from "explicitly off",
/// but the extraction output deliberately collapses the two: a consumer only
/// ever sees the resolved boolean. The variants are kept apart in the model
/// so the resolution happens at one known point ([`Toggle::is_on`]) instead
/// of being smeared through the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Toggle {
    /// The property element is absent.
    #[default]
    Unset,
    /// Explicitly enabled.
    On,
    /// Explicitly disabled.
    Off,
}

impl Toggle {
    /// Resolve to a boolean. `Unset` and `Off` both resolve to `false`.
    pub fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }
}

impl From<bool> for Toggle {
    fn from(on: bool) -> Self {
        if on {
            Toggle::On
        } else {
            Toggle::Off
        }
    }
}

// Wire shape is a plain bool; Unset never survives serialization.
impl Serialize for Toggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_on())
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Toggle::from(bool::deserialize(deserializer)?))
    }
}

/// A run of text with consistent styling, or a synthetic line break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// The text content; empty for line-break runs.
    pub text: String,

    /// Whether this run is a `br` line break.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_line_break: bool,

    /// Bold flag.
    #[serde(default)]
    pub bold: Toggle,

    /// Italic flag.
    #[serde(default)]
    pub italic: Toggle,

    /// Underline flag.
    #[serde(default)]
    pub underline: Toggle,

    /// Text color as `#RRGGBB`; absent when the source says `auto`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size in points (the package stores half-points).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<f32>,

    /// Font family, preferring east-Asian over ascii over high-ansi names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl Run {
    /// Create a plain, unstyled text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a synthetic line-break run. Break runs carry no text: paragraph
    /// text joins runs without a newline, while plain-text rendering of runs
    /// inserts one per break.
    pub fn line_break() -> Self {
        Self {
            is_line_break: true,
            ..Default::default()
        }
    }

    /// Check if any resolved styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold.is_on()
            || self.italic.is_on()
            || self.underline.is_on()
            || self.color.is_some()
            || self.size_pt.is_some()
            || self.font.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_resolution() {
        assert!(!Toggle::Unset.is_on());
        assert!(!Toggle::Off.is_on());
        assert!(Toggle::On.is_on());
    }

    #[test]
    fn test_toggle_serializes_as_bool() {
        // Unset collapses to false on the wire, same as Off.
        assert_eq!(serde_json::to_string(&Toggle::Unset).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Toggle::Off).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Toggle::On).unwrap(), "true");
    }

    #[test]
    fn test_run_wire_shape() {
        let run = Run {
            text: "x".into(),
            bold: Toggle::On,
            size_pt: Some(12.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["bold"], true);
        assert_eq!(json["sizePt"], 12.0);
        assert!(json.get("color").is_none());
        assert!(json.get("isLineBreak").is_none());
    }

    #[test]
    fn test_line_break_run() {
        let run = Run::line_break();
        assert!(run.is_line_break);
        assert!(run.text.is_empty());
        assert!(!run.has_styling());
    }
}
