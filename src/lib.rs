#![forbid(unsafe_code)]
//! Arcade controller designer
//!
//! Document model, mutators, pricing and layout presets for designing
//! arcade-style controllers, with a JSON-backed saved-document store and
//! image/JSON export.

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod document;
pub mod editor;
pub mod export;
pub mod mutators;
pub mod persistence;
pub mod pricing;
pub mod render;
pub mod store;

pub use document::{ButtonConfig, ButtonRole, ButtonType, ControllerConfig};
pub use editor::{Editor, EditorAction};
pub use mutators::ButtonKind;
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
