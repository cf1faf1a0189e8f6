//! Document mutators
//!
//! Each operation consumes a document and returns the next one; callers
//! replace their held value with the result. Operations given an unknown
//! button id or layout id hand the document back unchanged. Every mutator
//! that touches `buttons` or `case_color` refreshes `price` before returning.

use tracing::{debug, warn};

use crate::catalog;
use crate::constants::new_button::*;
use crate::document::{ButtonConfig, ButtonRole, ButtonType, ControllerConfig, new_id};

/// Kind of button created by [`add_button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Directional,
    Joystick,
    Action,
    Option,
}

impl ButtonKind {
    pub fn role(&self) -> ButtonRole {
        match self {
            ButtonKind::Directional | ButtonKind::Joystick => ButtonRole::Directional,
            ButtonKind::Action => ButtonRole::Action,
            ButtonKind::Option => ButtonRole::Option,
        }
    }
}

/// Default label for a new button of `kind`, numbered from the live count
/// (numbers can repeat after deletions)
pub fn default_label(doc: &ControllerConfig, kind: ButtonKind) -> String {
    match kind {
        ButtonKind::Joystick => format!("Joystick {}", doc.joystick_count() + 1),
        ButtonKind::Directional => DIRECTIONAL_LABEL.to_string(),
        ButtonKind::Action => {
            format!("Button {}", doc.buttons_with_role(ButtonRole::Action).count() + 1)
        }
        ButtonKind::Option => {
            format!("Option {}", doc.buttons_with_role(ButtonRole::Option).count() + 1)
        }
    }
}

/// Append a new button of `kind` near the case center.
///
/// Returns the updated document and the new button's id.
pub fn add_button(mut doc: ControllerConfig, kind: ButtonKind) -> (ControllerConfig, String) {
    let center_x = (doc.width / 2.0).floor();
    let center_y = (doc.height / 2.0).floor();

    let (button_type, offset_x, color, size) = match kind {
        ButtonKind::Joystick => (ButtonType::Joystick, DIRECTIONAL_OFFSET_X, JOYSTICK_COLOR, LARGE_SIZE),
        ButtonKind::Directional => (ButtonType::Button, DIRECTIONAL_OFFSET_X, DIRECTIONAL_COLOR, LARGE_SIZE),
        ButtonKind::Action => (ButtonType::Button, 0.0, ACTION_COLOR, LARGE_SIZE),
        ButtonKind::Option => (ButtonType::Button, OPTION_OFFSET_X, OPTION_COLOR, SMALL_SIZE),
    };

    let mut button = ButtonConfig {
        id: new_id(),
        button_type,
        x: center_x + offset_x,
        y: center_y,
        color: color.to_string(),
        size,
        label: default_label(&doc, kind),
        is_directional: false,
        is_action: false,
        is_option: false,
    };
    button.set_role(kind.role(), true);

    let id = button.id.clone();
    debug!(id = %id, kind = ?kind, label = %button.label, "Adding button");
    doc.buttons.push(button);
    doc.refresh_price();
    (doc, id)
}

/// Move a button, clamping the target into the case rectangle.
///
/// A NaN coordinate leaves that axis where it was; infinities clamp to the
/// nearest edge.
pub fn move_button(mut doc: ControllerConfig, id: &str, x: f64, y: f64) -> ControllerConfig {
    let Some(current) = doc.button(id) else {
        return doc;
    };
    let x = if x.is_nan() { current.x } else { x };
    let y = if y.is_nan() { current.y } else { y };
    let (x, y) = doc.clamp_to_case(x, y);
    if let Some(button) = doc.buttons.iter_mut().find(|b| b.id == id) {
        button.x = x;
        button.y = y;
        doc.refresh_price();
    }
    doc
}

/// Replace the button with the same id as `updated`.
///
/// A replacement whose label is blank keeps the current label; other fields
/// are taken as given.
pub fn update_button(mut doc: ControllerConfig, updated: ButtonConfig) -> ControllerConfig {
    if let Some(slot) = doc.buttons.iter_mut().find(|b| b.id == updated.id) {
        let mut updated = updated;
        if updated.label.trim().is_empty() {
            updated.label = std::mem::take(&mut slot.label);
        }
        *slot = updated;
        doc.refresh_price();
    }
    doc
}

pub fn recolor_button(doc: ControllerConfig, id: &str, color: &str) -> ControllerConfig {
    match doc.button(id) {
        Some(button) => {
            let updated = ButtonConfig { color: color.to_string(), ..button.clone() };
            update_button(doc, updated)
        }
        None => doc,
    }
}

/// Set a button's label to the trimmed `label`; blank input is discarded
pub fn relabel_button(doc: ControllerConfig, id: &str, label: &str) -> ControllerConfig {
    let label = label.trim();
    if label.is_empty() {
        return doc;
    }
    match doc.button(id) {
        Some(button) => {
            let updated = ButtonConfig { label: label.to_string(), ..button.clone() };
            update_button(doc, updated)
        }
        None => doc,
    }
}

pub fn delete_button(mut doc: ControllerConfig, id: &str) -> ControllerConfig {
    let before = doc.buttons.len();
    doc.buttons.retain(|b| b.id != id);
    if doc.buttons.len() != before {
        doc.refresh_price();
    }
    doc
}

/// Replace every button with a fresh copy of a full layout preset.
///
/// Takes the preset's name and records it as the joystick and action layout;
/// the option layout id is left as it was.
pub fn apply_full_layout(mut doc: ControllerConfig, layout_id: &str) -> ControllerConfig {
    let Some(layout) = catalog::full_layout(layout_id) else {
        warn!(layout = %layout_id, "Unknown full layout, document unchanged");
        return doc;
    };

    doc.buttons = layout.instantiate();
    doc.name = layout.name.to_string();
    doc.set_layout_id(ButtonRole::Directional, layout.id);
    doc.set_layout_id(ButtonRole::Action, layout.id);
    doc.refresh_price();
    doc
}

/// Swap the buttons of one role for a category preset.
///
/// Buttons lacking the role flag (including ungrouped ones) are kept in
/// order; the preset's buttons are appended with fresh ids.
pub fn apply_category_layout(mut doc: ControllerConfig, role: ButtonRole, layout_id: &str) -> ControllerConfig {
    let Some(layout) = catalog::category_layout(role, layout_id) else {
        warn!(role = role.as_str(), layout = %layout_id, "Unknown layout, document unchanged");
        return doc;
    };

    doc.buttons.retain(|b| !b.has_role(role));
    doc.buttons.extend(layout.instantiate());
    doc.set_layout_id(role, layout.id);
    doc.refresh_price();
    doc
}

pub fn apply_joystick_layout(doc: ControllerConfig, layout_id: &str) -> ControllerConfig {
    apply_category_layout(doc, ButtonRole::Directional, layout_id)
}

pub fn apply_action_layout(doc: ControllerConfig, layout_id: &str) -> ControllerConfig {
    apply_category_layout(doc, ButtonRole::Action, layout_id)
}

pub fn apply_option_layout(doc: ControllerConfig, layout_id: &str) -> ControllerConfig {
    apply_category_layout(doc, ButtonRole::Option, layout_id)
}

pub fn rename(mut doc: ControllerConfig, name: &str) -> ControllerConfig {
    doc.name = name.to_string();
    doc
}

pub fn set_case_color(mut doc: ControllerConfig, color: &str) -> ControllerConfig {
    doc.case_color = color.to_string();
    // case color is part of the price recompute trigger set even though it never changes the amount
    doc.refresh_price();
    doc
}
