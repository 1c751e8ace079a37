//! Declarative schema for the admin widget-settings form.
//!
//! The admin panel renders whatever this schema describes; the server only
//! defines the ordered field list, labels, help texts, and visibility
//! predicates. Rendering is out of scope here.

use serde::Serialize;

/// The control a field renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldControl {
    /// On/off switch.
    Toggle,
    /// Single choice from fixed options.
    Select {
        /// Allowed values, in display order.
        options: Vec<&'static str>,
    },
    /// Hex color picker.
    ColorPicker,
    /// Single-line text input.
    Text,
    /// Ordered list of short string entries.
    TagList,
}

/// A visibility predicate: show the field only when another field equals
/// the given boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleWhen {
    /// The controlling field's key.
    pub key: &'static str,
    /// Required value of the controlling field.
    pub equals: bool,
}

/// One field of the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsField {
    /// Settings document key this field edits.
    pub key: &'static str,
    /// How the field is rendered.
    pub control: FieldControl,
    /// Human-facing label.
    pub label: &'static str,
    /// Optional help text shown under the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    /// Optional visibility predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<VisibleWhen>,
}

const SHOWN_WHEN_ENABLED: Option<VisibleWhen> = Some(VisibleWhen {
    key: "enabled",
    equals: true,
});

/// The widget settings form, in render order.
#[must_use]
pub fn widget_settings_form() -> Vec<SettingsField> {
    vec![
        SettingsField {
            key: "enabled",
            control: FieldControl::Toggle,
            label: "Enable widget",
            help: Some("When off, the widget hides itself and submissions are rejected."),
            visible_when: None,
        },
        SettingsField {
            key: "position",
            control: FieldControl::Select {
                options: vec!["bottom-right", "bottom-left", "top-right", "top-left"],
            },
            label: "Position",
            help: Some("Corner of the page the launcher button is anchored to."),
            visible_when: SHOWN_WHEN_ENABLED,
        },
        SettingsField {
            key: "primary_color",
            control: FieldControl::ColorPicker,
            label: "Primary color",
            help: None,
            visible_when: SHOWN_WHEN_ENABLED,
        },
        SettingsField {
            key: "button_text",
            control: FieldControl::Text,
            label: "Button text",
            help: None,
            visible_when: SHOWN_WHEN_ENABLED,
        },
        SettingsField {
            key: "allowed_domains",
            control: FieldControl::TagList,
            label: "Allowed domains",
            help: Some("Domains that may embed the widget. Leave empty to allow all domains."),
            visible_when: SHOWN_WHEN_ENABLED,
        },
    ]
}
