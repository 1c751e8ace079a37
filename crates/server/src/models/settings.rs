//! Widget settings document.
//!
//! A single JSON document under the `"widget"` key of the settings store.
//! All fields carry `serde(default)` so documents written by older versions
//! still load.

use serde::{Deserialize, Serialize};

/// Where the widget launcher button is anchored on the embedding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Persisted configuration for the embeddable feedback widget.
///
/// Mutated only through the admin settings endpoint; widget request paths
/// read the in-memory copy held by [`crate::state::AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Master switch: when false the widget API reports itself disabled and
    /// rejects submissions.
    pub enabled: bool,
    /// Launcher button anchor position.
    pub position: WidgetPosition,
    /// Accent color as a `#rrggbb` hex string.
    pub primary_color: String,
    /// Label on the launcher button.
    pub button_text: String,
    /// Ordered origin allow-list (host names). Empty = allow all origins.
    pub allowed_domains: Vec<String>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            position: WidgetPosition::default(),
            primary_color: "#2563eb".to_string(),
            button_text: "Feedback".to_string(),
            allowed_domains: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_disabled_and_open() {
        let settings = WidgetSettings::default();
        assert!(!settings.enabled);
        assert_eq!(settings.position, WidgetPosition::BottomRight);
        assert!(settings.allowed_domains.is_empty());
    }

    #[test]
    fn position_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&WidgetPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");

        let parsed: WidgetPosition = serde_json::from_str("\"top-left\"").unwrap();
        assert_eq!(parsed, WidgetPosition::TopLeft);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        // An older stored document that predates `position`
        let parsed: WidgetSettings =
            serde_json::from_str(r#"{"enabled": true, "button_text": "Ideas"}"#).unwrap();
        assert!(parsed.enabled);
        assert_eq!(parsed.button_text, "Ideas");
        assert_eq!(parsed.position, WidgetPosition::BottomRight);
        assert_eq!(parsed.primary_color, "#2563eb");
    }
}
