//! Built-in button placements

use super::ButtonTemplate;
use crate::document::ButtonRole::{self, Action, Directional, Option as Opt};
use crate::document::ButtonType::{self, Button, Joystick};

const LARGE: f64 = 92.0;
const SMALL: f64 = 60.0;

const fn t(
    button_type: ButtonType,
    x: f64,
    y: f64,
    color: &'static str,
    size: f64,
    label: &'static str,
    role: ButtonRole,
) -> ButtonTemplate {
    ButtonTemplate { button_type, x, y, color, size, label, role }
}

pub(super) static DEFAULT: &[ButtonTemplate] = &[
    t(Joystick, 300.0, 250.0, "#000000", LARGE, "Joystick 1", Directional),
    t(Button, 500.0, 200.0, "#ff0000", LARGE, "A", Action),
    t(Button, 600.0, 200.0, "#0000ff", LARGE, "B", Action),
    t(Button, 700.0, 200.0, "#00ff00", LARGE, "X", Action),
    t(Button, 800.0, 200.0, "#ffff00", LARGE, "Y", Action),
    t(Button, 500.0, 300.0, "#ffffff", LARGE, "L", Action),
    t(Button, 600.0, 300.0, "#ffffff", LARGE, "R", Action),
];

// All-button layout: four directional keys replace the joystick
pub(super) static HITBOX: &[ButtonTemplate] = &[
    t(Button, 200.0, 200.0, "#000000", LARGE, "↑", Directional),
    t(Button, 120.0, 280.0, "#000000", LARGE, "←", Directional),
    t(Button, 200.0, 280.0, "#000000", LARGE, "↓", Directional),
    t(Button, 280.0, 280.0, "#000000", LARGE, "→", Directional),
    t(Button, 500.0, 200.0, "#ff0000", LARGE, "P", Action),
    t(Button, 600.0, 200.0, "#ff0000", LARGE, "P", Action),
    t(Button, 700.0, 200.0, "#ff0000", LARGE, "P", Action),
    t(Button, 800.0, 200.0, "#ff0000", LARGE, "P", Action),
    t(Button, 500.0, 300.0, "#0000ff", LARGE, "K", Action),
    t(Button, 600.0, 300.0, "#0000ff", LARGE, "K", Action),
    t(Button, 700.0, 300.0, "#0000ff", LARGE, "K", Action),
    t(Button, 800.0, 300.0, "#0000ff", LARGE, "K", Action),
];

pub(super) static HORI_ALPHA: &[ButtonTemplate] = &[
    t(Joystick, 250.0, 250.0, "#000000", LARGE, "Joystick", Directional),
    t(Button, 500.0, 200.0, "#ffff00", LARGE, "Y", Action),
    t(Button, 600.0, 200.0, "#00ff00", LARGE, "X", Action),
    t(Button, 700.0, 200.0, "#ffffff", LARGE, "LB", Action),
    t(Button, 800.0, 200.0, "#ffffff", LARGE, "RB", Action),
    t(Button, 500.0, 300.0, "#ff0000", LARGE, "B", Action),
    t(Button, 600.0, 300.0, "#0000ff", LARGE, "A", Action),
    t(Button, 700.0, 300.0, "#ffffff", LARGE, "LT", Action),
    t(Button, 800.0, 300.0, "#ffffff", LARGE, "RT", Action),
];

// Two rows of four numbered buttons
pub(super) static VENOM_F500: &[ButtonTemplate] = &[
    t(Joystick, 250.0, 250.0, "#000000", LARGE, "Joystick", Directional),
    t(Button, 500.0, 200.0, "#ff0000", LARGE, "1", Action),
    t(Button, 600.0, 200.0, "#0000ff", LARGE, "2", Action),
    t(Button, 700.0, 200.0, "#00ff00", LARGE, "3", Action),
    t(Button, 800.0, 200.0, "#ffff00", LARGE, "4", Action),
    t(Button, 500.0, 300.0, "#800080", LARGE, "5", Action),
    t(Button, 600.0, 300.0, "#ffa500", LARGE, "6", Action),
    t(Button, 700.0, 300.0, "#ffffff", LARGE, "7", Action),
    t(Button, 800.0, 300.0, "#ffffff", LARGE, "8", Action),
];

pub(super) static DEFAULT_OPTIONS: &[ButtonTemplate] = &[
    t(Button, 1000.0, 200.0, "#ffffff", SMALL, "Start", Opt),
    t(Button, 1100.0, 200.0, "#ffffff", SMALL, "Select", Opt),
    t(Button, 1000.0, 300.0, "#ffffff", SMALL, "Home", Opt),
    t(Button, 1100.0, 300.0, "#ffffff", SMALL, "Share", Opt),
];

pub(super) static ARCADE_OPTIONS: &[ButtonTemplate] = &[
    t(Button, 950.0, 400.0, "#ff0000", SMALL, "1P", Opt),
    t(Button, 1050.0, 400.0, "#0000ff", SMALL, "2P", Opt),
    t(Button, 1150.0, 400.0, "#ffff00", SMALL, "Coin", Opt),
    t(Button, 1250.0, 400.0, "#00ff00", SMALL, "Menu", Opt),
];

pub(super) static MODERN_OPTIONS: &[ButtonTemplate] = &[
    t(Button, 1000.0, 450.0, "#000000", SMALL, "Options", Opt),
    t(Button, 1100.0, 450.0, "#000000", SMALL, "Share", Opt),
    t(Button, 1000.0, 350.0, "#000000", SMALL, "PS", Opt),
    t(Button, 1100.0, 350.0, "#000000", SMALL, "Touch", Opt),
];
