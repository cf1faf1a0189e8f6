//! Layout catalog
//!
//! Static, named button placements. Presets are stored as id-less templates;
//! every application instantiates them with fresh ids so two documents built
//! from the same preset never share button identity.
//!
//! - **Full layouts** replace a document's whole button list
//! - **Category layouts** (joystick, action, option) carry only the buttons of
//!   one role and are swapped in without touching the others

mod layouts;
pub mod palette;

pub use palette::{BUTTON_COLORS, BUTTON_TYPE_OPTIONS, CASE_COLORS, ColorOption, TypeOption};

use crate::document::{ButtonConfig, ButtonRole, ButtonType, new_id};

/// Id-less button placement stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonTemplate {
    pub button_type: ButtonType,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    pub size: f64,
    pub label: &'static str,
    pub role: ButtonRole,
}

impl ButtonTemplate {
    /// Deep copy into a document button with a freshly generated id
    pub fn instantiate(&self) -> ButtonConfig {
        let mut button = ButtonConfig {
            id: new_id(),
            button_type: self.button_type,
            x: self.x,
            y: self.y,
            color: self.color.to_string(),
            size: self.size,
            label: self.label.to_string(),
            is_directional: false,
            is_action: false,
            is_option: false,
        };
        button.set_role(self.role, true);
        button
    }
}

/// A whole-document preset
#[derive(Debug)]
pub struct Layout {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub buttons: &'static [ButtonTemplate],
}

impl Layout {
    pub fn instantiate(&self) -> Vec<ButtonConfig> {
        self.buttons.iter().map(ButtonTemplate::instantiate).collect()
    }
}

/// A preset covering one role. Joystick and action presets are cut from the
/// full layouts, so `source` may hold buttons of other roles that are skipped.
#[derive(Debug)]
pub struct CategoryLayout {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub role: ButtonRole,
    source: &'static [ButtonTemplate],
}

impl CategoryLayout {
    pub fn templates(&self) -> impl Iterator<Item = &'static ButtonTemplate> {
        let role = self.role;
        self.source.iter().filter(move |t| t.role == role)
    }

    pub fn instantiate(&self) -> Vec<ButtonConfig> {
        self.templates().map(ButtonTemplate::instantiate).collect()
    }
}

pub static FULL_LAYOUTS: &[Layout] = &[
    Layout {
        id: "default",
        name: "Default Layout",
        description: "Standard configuration with a joystick and buttons",
        buttons: layouts::DEFAULT,
    },
    Layout {
        id: "hitbox",
        name: "Hitbox Style",
        description: "All buttons, no joystick (Hitbox style)",
        buttons: layouts::HITBOX,
    },
    Layout {
        id: "hori-alpha",
        name: "Hori Fighting Stick Alpha",
        description: "Joystick and buttons in the Hori Alpha arrangement",
        buttons: layouts::HORI_ALPHA,
    },
    Layout {
        id: "venom-f500",
        name: "Venom Mayflash F500",
        description: "Arcade style with a joystick and 8 buttons",
        buttons: layouts::VENOM_F500,
    },
];

pub static JOYSTICK_LAYOUTS: &[CategoryLayout] = &[
    CategoryLayout {
        id: "default",
        name: "Default Joystick",
        description: "Standard joystick configuration",
        role: ButtonRole::Directional,
        source: layouts::DEFAULT,
    },
    CategoryLayout {
        id: "hitbox",
        name: "Hitbox Directional",
        description: "Hitbox style directional buttons",
        role: ButtonRole::Directional,
        source: layouts::HITBOX,
    },
    CategoryLayout {
        id: "hori-alpha",
        name: "Hori Alpha Joystick",
        description: "Hori Alpha style joystick",
        role: ButtonRole::Directional,
        source: layouts::HORI_ALPHA,
    },
    CategoryLayout {
        id: "venom-f500",
        name: "Venom F500 Joystick",
        description: "Venom F500 style joystick",
        role: ButtonRole::Directional,
        source: layouts::VENOM_F500,
    },
];

pub static ACTION_LAYOUTS: &[CategoryLayout] = &[
    CategoryLayout {
        id: "default",
        name: "Default Buttons",
        description: "Standard button configuration",
        role: ButtonRole::Action,
        source: layouts::DEFAULT,
    },
    CategoryLayout {
        id: "hitbox",
        name: "Hitbox Buttons",
        description: "Hitbox style buttons",
        role: ButtonRole::Action,
        source: layouts::HITBOX,
    },
    CategoryLayout {
        id: "hori-alpha",
        name: "Hori Alpha Buttons",
        description: "Hori Alpha style buttons",
        role: ButtonRole::Action,
        source: layouts::HORI_ALPHA,
    },
    CategoryLayout {
        id: "venom-f500",
        name: "Venom F500 Buttons",
        description: "Venom F500 style buttons",
        role: ButtonRole::Action,
        source: layouts::VENOM_F500,
    },
];

pub static OPTION_LAYOUTS: &[CategoryLayout] = &[
    CategoryLayout {
        id: "default",
        name: "Default Options",
        description: "Standard option buttons (Start, Select, etc.)",
        role: ButtonRole::Option,
        source: layouts::DEFAULT_OPTIONS,
    },
    CategoryLayout {
        id: "arcade",
        name: "Arcade Options",
        description: "Arcade cabinet style option buttons (1P, 2P, Coin, etc.)",
        role: ButtonRole::Option,
        source: layouts::ARCADE_OPTIONS,
    },
    CategoryLayout {
        id: "modern",
        name: "Modern Console",
        description: "Modern console style option buttons (Options, Share, etc.)",
        role: ButtonRole::Option,
        source: layouts::MODERN_OPTIONS,
    },
];

pub fn full_layout(id: &str) -> Option<&'static Layout> {
    FULL_LAYOUTS.iter().find(|l| l.id == id)
}

/// Presets available for one role
pub fn category_layouts(role: ButtonRole) -> &'static [CategoryLayout] {
    match role {
        ButtonRole::Directional => JOYSTICK_LAYOUTS,
        ButtonRole::Action => ACTION_LAYOUTS,
        ButtonRole::Option => OPTION_LAYOUTS,
    }
}

pub fn category_layout(role: ButtonRole, id: &str) -> Option<&'static CategoryLayout> {
    category_layouts(role).iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_layout_lookup() {
        let hitbox = full_layout("hitbox").unwrap();
        assert_eq!(hitbox.name, "Hitbox Style");
        assert_eq!(hitbox.buttons.len(), 12);
        assert!(full_layout("nope").is_none());
    }

    #[test]
    fn test_every_template_has_positive_size() {
        let all = FULL_LAYOUTS
            .iter()
            .flat_map(|l| l.buttons.iter())
            .chain(OPTION_LAYOUTS.iter().flat_map(|l| l.templates()));
        for template in all {
            assert!(template.size > 0.0, "{} has size {}", template.label, template.size);
        }
    }

    #[test]
    fn test_instantiate_generates_fresh_ids() {
        let layout = full_layout("venom-f500").unwrap();
        let first = layout.instantiate();
        let second = layout.instantiate();
        let ids: HashSet<_> = first.iter().chain(second.iter()).map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), first.len() + second.len());
    }

    #[test]
    fn test_instantiate_sets_exactly_one_role() {
        for button in full_layout("hori-alpha").unwrap().instantiate() {
            let flags = [button.is_directional, button.is_action, button.is_option];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{}", button.label);
        }
    }

    #[test]
    fn test_hitbox_joystick_layout_is_four_arrows() {
        let layout = category_layout(ButtonRole::Directional, "hitbox").unwrap();
        let labels: Vec<_> = layout.templates().map(|t| t.label).collect();
        assert_eq!(labels, ["↑", "←", "↓", "→"]);
        assert!(layout.templates().all(|t| t.button_type == ButtonType::Button));
    }

    #[test]
    fn test_stick_joystick_layouts_are_single_joystick() {
        for id in ["default", "hori-alpha", "venom-f500"] {
            let layout = category_layout(ButtonRole::Directional, id).unwrap();
            let buttons = layout.instantiate();
            assert_eq!(buttons.len(), 1, "{id}");
            assert_eq!(buttons[0].button_type, ButtonType::Joystick);
            assert!(buttons[0].is_directional);
        }
    }

    #[test]
    fn test_action_layouts_exclude_directionals() {
        for layout in ACTION_LAYOUTS {
            let buttons = layout.instantiate();
            assert!(!buttons.is_empty());
            assert!(buttons.iter().all(|b| b.is_action && !b.is_directional), "{}", layout.id);
        }
        assert_eq!(category_layout(ButtonRole::Action, "hitbox").unwrap().instantiate().len(), 8);
    }

    #[test]
    fn test_option_layouts() {
        let ids: Vec<_> = OPTION_LAYOUTS.iter().map(|l| l.id).collect();
        assert_eq!(ids, ["default", "arcade", "modern"]);
        for layout in OPTION_LAYOUTS {
            assert_eq!(layout.instantiate().len(), 4);
        }
        assert!(category_layout(ButtonRole::Option, "hitbox").is_none());
    }
}
