//! Color palettes and button shape choices offered by editors

use crate::document::ButtonType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOption {
    pub name: &'static str,
    pub value: ButtonType,
}

const fn c(name: &'static str, value: &'static str) -> ColorOption {
    ColorOption { name, value }
}

pub static BUTTON_COLORS: &[ColorOption] = &[
    c("Black", "#000000"),
    c("White", "#ffffff"),
    c("Red", "#ff0000"),
    c("Blue", "#0000ff"),
    c("Green", "#00ff00"),
    c("Yellow", "#ffff00"),
    c("Purple", "#800080"),
    c("Orange", "#ffa500"),
    c("Pink", "#ffc0cb"),
    c("Cyan", "#00ffff"),
];

// Case colors are darker/muted variants of the button palette
pub static CASE_COLORS: &[ColorOption] = &[
    c("Black", "#333333"),
    c("White", "#f5f5f5"),
    c("Gray", "#808080"),
    c("Red", "#8b0000"),
    c("Blue", "#000080"),
    c("Green", "#006400"),
];

pub static BUTTON_TYPE_OPTIONS: &[TypeOption] = &[
    TypeOption { name: "Button", value: ButtonType::Button },
    TypeOption { name: "Joystick", value: ButtonType::Joystick },
    TypeOption { name: "D-Pad", value: ButtonType::Dpad },
];

/// Resolve a palette name (case-insensitive) to its hex value
pub fn lookup(palette: &[ColorOption], name: &str) -> Option<&'static str> {
    palette
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.value)
}
