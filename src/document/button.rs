use serde::{Deserialize, Serialize};

/// Rendering shape of a button. Says nothing about its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Joystick,
    Button,
    Dpad,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Joystick => "joystick",
            ButtonType::Button => "button",
            ButtonType::Dpad => "dpad",
        }
    }
}

/// Functional category used by grouped editors and category presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Directional,
    Action,
    Option,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 3] = [ButtonRole::Directional, ButtonRole::Action, ButtonRole::Option];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonRole::Directional => "directional",
            ButtonRole::Action => "action",
            ButtonRole::Option => "option",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One control placed on the case.
///
/// Role flags are independent booleans: a button may carry none of them
/// (ungrouped) or several. Absent flags deserialize as `false` and `false`
/// flags are omitted when serializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub size: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_directional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_action: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_option: bool,
}

impl ButtonConfig {
    pub fn has_role(&self, role: ButtonRole) -> bool {
        match role {
            ButtonRole::Directional => self.is_directional,
            ButtonRole::Action => self.is_action,
            ButtonRole::Option => self.is_option,
        }
    }

    /// True when no role flag is set; such buttons survive every category preset swap
    pub fn is_ungrouped(&self) -> bool {
        !self.is_directional && !self.is_action && !self.is_option
    }

    pub fn set_role(&mut self, role: ButtonRole, value: bool) {
        match role {
            ButtonRole::Directional => self.is_directional = value,
            ButtonRole::Action => self.is_action = value,
            ButtonRole::Option => self.is_option = value,
        }
    }

    pub fn is_joystick(&self) -> bool {
        self.button_type == ButtonType::Joystick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ButtonConfig {
        ButtonConfig {
            id: "b1".to_string(),
            button_type: ButtonType::Button,
            x: 10.0,
            y: 20.0,
            color: "#ff0000".to_string(),
            size: 92.0,
            label: "A".to_string(),
            is_directional: false,
            is_action: true,
            is_option: false,
        }
    }

    #[test]
    fn test_serializes_with_camel_case_and_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["isAction"], true);
        assert!(json.get("isDirectional").is_none());
        assert!(json.get("isOption").is_none());
    }

    #[test]
    fn test_missing_role_flags_default_to_false() {
        let json = r##"{"id":"x","type":"dpad","x":1,"y":2,"color":"#000000","size":40,"label":"D"}"##;
        let button: ButtonConfig = serde_json::from_str(json).unwrap();
        assert_eq!(button.button_type, ButtonType::Dpad);
        assert!(button.is_ungrouped());
    }

    #[test]
    fn test_multiple_roles_are_tolerated() {
        let mut button = sample();
        button.set_role(ButtonRole::Option, true);
        assert!(button.has_role(ButtonRole::Action));
        assert!(button.has_role(ButtonRole::Option));
        assert!(!button.has_role(ButtonRole::Directional));
        assert!(!button.is_ungrouped());
    }
}
