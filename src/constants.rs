//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Pricing constants (currency units)
pub mod pricing {
    /// Price of an empty case
    pub const BASE_PRICE: f64 = 99.99;

    /// Charged once per entry in the button list, regardless of type or role
    pub const PER_BUTTON: f64 = 5.99;

    /// Extra charge per joystick-type entry, on top of the per-button charge
    pub const JOYSTICK_SURCHARGE: f64 = 15.99;
}

/// Built-in document defaults
pub mod document {
    /// Id marking the unsaved working document (never a persisted id)
    pub const UNSAVED_ID: &str = "default";

    /// Name of the built-in default document
    pub const DEFAULT_NAME: &str = "Default Controller";

    /// Case background of the built-in default document
    pub const DEFAULT_CASE_COLOR: &str = "#333333";

    /// Case width in case-local units
    pub const CASE_WIDTH: f64 = 1322.0;

    /// Case height in case-local units
    pub const CASE_HEIGHT: f64 = 548.0;

    /// Layout id pre-selected for every category on a fresh document
    pub const DEFAULT_LAYOUT_ID: &str = "default";
}

/// Defaults for buttons created through "add button"
pub mod new_button {
    /// Horizontal offset from case center for directional inputs (left of center)
    pub const DIRECTIONAL_OFFSET_X: f64 = -200.0;

    /// Horizontal offset from case center for option buttons (right of center)
    pub const OPTION_OFFSET_X: f64 = 200.0;

    /// Diameter of joysticks, directional and action buttons
    pub const LARGE_SIZE: f64 = 92.0;

    /// Diameter of option buttons
    pub const SMALL_SIZE: f64 = 60.0;

    pub const JOYSTICK_COLOR: &str = "#000000";
    pub const DIRECTIONAL_COLOR: &str = "#000000";
    pub const ACTION_COLOR: &str = "#ff0000";
    pub const OPTION_COLOR: &str = "#ffffff";

    /// Label given to every new directional button
    pub const DIRECTIONAL_LABEL: &str = "↑";
}

/// Export constants
pub mod export {
    /// JPEG quality (0.95 on the 0..1 scale)
    pub const JPEG_QUALITY: u8 = 95;

    pub const JSON_EXTENSION: &str = "json";
    pub const PNG_EXTENSION: &str = "png";
    pub const JPEG_EXTENSION: &str = "jpg";
}

/// Config file and storage locations
pub mod config {
    /// Directory name under the platform config/data dirs
    pub const APP_DIR: &str = "arcade-designer";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";

    /// Saved-documents collection (one JSON array, rewritten whole on every write)
    pub const STORE_FILENAME: &str = "arcadeControllerConfigs.json";

    /// Working document and selection, persisted between CLI invocations
    pub const WORKING_FILENAME: &str = "working.json";
}
