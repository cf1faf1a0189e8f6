//! Controller document model
//!
//! - **button**: `ButtonConfig`, the placed control, with its shape and role flags
//! - **controller**: `ControllerConfig`, the document aggregate that owns the button list

pub mod button;
pub mod controller;

pub use button::{ButtonConfig, ButtonRole, ButtonType};
pub use controller::ControllerConfig;

/// Generate a fresh opaque id for a button or saved document
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
