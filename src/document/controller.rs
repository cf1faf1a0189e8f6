use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::button::{ButtonConfig, ButtonRole};
use crate::catalog;
use crate::constants::document::*;
use crate::pricing;

/// A complete controller design (the document aggregate).
///
/// `price` is a cache of [`pricing::price`] over `buttons`. Every mutator in
/// [`crate::mutators`] refreshes it before returning, so it is never edited
/// directly by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    // Missing ids (hand-written import files) read as unsaved
    #[serde(default = "unsaved_id")]
    pub id: String,
    pub name: String,
    pub case_color: String,
    pub buttons: Vec<ButtonConfig>,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub price: f64,
    // Last-applied presets; only used to pre-select pickers and may go stale after hand edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joystick_layout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_button_layout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_button_layout_id: Option<String>,
}

fn unsaved_id() -> String {
    UNSAVED_ID.to_string()
}

impl Default for ControllerConfig {
    /// Built-in starting document, instantiated from the default layout preset
    /// with fresh button ids
    fn default() -> Self {
        let buttons = catalog::full_layout(DEFAULT_LAYOUT_ID)
            .map(|layout| layout.instantiate())
            .unwrap_or_default();

        let mut doc = Self {
            id: UNSAVED_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            case_color: DEFAULT_CASE_COLOR.to_string(),
            buttons,
            width: CASE_WIDTH,
            height: CASE_HEIGHT,
            price: 0.0,
            joystick_layout_id: Some(DEFAULT_LAYOUT_ID.to_string()),
            action_button_layout_id: Some(DEFAULT_LAYOUT_ID.to_string()),
            option_button_layout_id: Some(DEFAULT_LAYOUT_ID.to_string()),
        };
        doc.refresh_price();
        doc
    }
}

impl ControllerConfig {
    /// True while the document has never been saved
    pub fn is_unsaved(&self) -> bool {
        self.id == UNSAVED_ID
    }

    pub fn button(&self, id: &str) -> Option<&ButtonConfig> {
        self.buttons.iter().find(|b| b.id == id)
    }

    pub fn contains_button(&self, id: &str) -> bool {
        self.button(id).is_some()
    }

    /// Buttons carrying `role`, in insertion order
    pub fn buttons_with_role(&self, role: ButtonRole) -> impl Iterator<Item = &ButtonConfig> {
        self.buttons.iter().filter(move |b| b.has_role(role))
    }

    pub fn directional_buttons(&self) -> Vec<&ButtonConfig> {
        self.buttons_with_role(ButtonRole::Directional).collect()
    }

    pub fn action_buttons(&self) -> Vec<&ButtonConfig> {
        self.buttons_with_role(ButtonRole::Action).collect()
    }

    pub fn option_buttons(&self) -> Vec<&ButtonConfig> {
        self.buttons_with_role(ButtonRole::Option).collect()
    }

    pub fn ungrouped_buttons(&self) -> Vec<&ButtonConfig> {
        self.buttons.iter().filter(|b| b.is_ungrouped()).collect()
    }

    pub fn joystick_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.is_joystick()).count()
    }

    pub fn has_unique_button_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.buttons.len());
        self.buttons.iter().all(|b| seen.insert(b.id.as_str()))
    }

    /// Recompute the cached price from the current buttons
    pub fn refresh_price(&mut self) {
        self.price = pricing::price(&self.buttons);
    }

    /// Clamp a point into the case rectangle; NaN lands on 0
    pub fn clamp_to_case(&self, x: f64, y: f64) -> (f64, f64) {
        let clamp = |v: f64, max: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, max.max(0.0)) };
        (clamp(x, self.width), clamp(y, self.height))
    }

    /// Layout id last applied for a category
    pub fn layout_id(&self, role: ButtonRole) -> Option<&str> {
        match role {
            ButtonRole::Directional => self.joystick_layout_id.as_deref(),
            ButtonRole::Action => self.action_button_layout_id.as_deref(),
            ButtonRole::Option => self.option_button_layout_id.as_deref(),
        }
    }

    pub(crate) fn set_layout_id(&mut self, role: ButtonRole, layout_id: &str) {
        let slot = match role {
            ButtonRole::Directional => &mut self.joystick_layout_id,
            ButtonRole::Action => &mut self.action_button_layout_id,
            ButtonRole::Option => &mut self.option_button_layout_id,
        };
        *slot = Some(layout_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ButtonType;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_document_shape() {
        let doc = ControllerConfig::default();
        assert!(doc.is_unsaved());
        assert_eq!(doc.name, "Default Controller");
        assert_eq!(doc.case_color, "#333333");
        assert_eq!(doc.width, 1322.0);
        assert_eq!(doc.height, 548.0);
        assert_eq!(doc.buttons.len(), 7);
        assert_eq!(doc.joystick_count(), 1);
        assert_eq!(doc.layout_id(ButtonRole::Option), Some("default"));
        assert!(doc.has_unique_button_ids());
    }

    #[test]
    fn test_default_document_price() {
        let doc = ControllerConfig::default();
        assert!(approx(doc.price, 157.91));
    }

    #[test]
    fn test_default_documents_do_not_share_button_ids() {
        let a = ControllerConfig::default();
        let b = ControllerConfig::default();
        assert!(a.buttons.iter().all(|x| !b.contains_button(&x.id)));
    }

    #[test]
    fn test_grouped_views_follow_flags() {
        let mut doc = ControllerConfig::default();
        doc.buttons[1].is_option = true;
        doc.buttons[2].is_action = false;

        assert_eq!(doc.directional_buttons().len(), 1);
        assert_eq!(doc.action_buttons().len(), 5);
        assert_eq!(doc.option_buttons().len(), 1);
        assert_eq!(doc.ungrouped_buttons().len(), 1);
        assert_eq!(doc.ungrouped_buttons()[0].id, doc.buttons[2].id);
    }

    #[test]
    fn test_grouped_views_keep_insertion_order() {
        let doc = ControllerConfig::default();
        let labels: Vec<_> = doc.action_buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "X", "Y", "L", "R"]);
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let mut doc = ControllerConfig::default();
        let first = doc.buttons[0].id.clone();
        doc.buttons[1].id = first;
        assert!(!doc.has_unique_button_ids());
    }

    #[test]
    fn test_clamp_to_case() {
        let doc = ControllerConfig::default();
        assert_eq!(doc.clamp_to_case(-5.0, 600.0), (0.0, 548.0));
        assert_eq!(doc.clamp_to_case(2000.0, -1.0), (1322.0, 0.0));
        assert_eq!(doc.clamp_to_case(10.5, 20.25), (10.5, 20.25));
        assert_eq!(doc.clamp_to_case(f64::NAN, f64::INFINITY), (0.0, 548.0));
    }

    #[test]
    fn test_deserializes_web_app_shape() {
        let json = r##"{
            "id": "abc",
            "name": "Mine",
            "caseColor": "#000080",
            "buttons": [
                {"id": "1", "type": "joystick", "x": 300, "y": 250, "color": "#000000",
                 "size": 92, "label": "Joystick 1", "isDirectional": true}
            ],
            "width": 1322,
            "height": 548,
            "price": 121.97,
            "joystickLayoutId": "hori-alpha"
        }"##;
        let doc: ControllerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(doc.buttons[0].button_type, ButtonType::Joystick);
        assert_eq!(doc.joystick_layout_id.as_deref(), Some("hori-alpha"));
        assert_eq!(doc.action_button_layout_id, None);
    }
}
