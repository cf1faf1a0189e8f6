//! Price derivation for a controller design

use crate::constants::pricing::{BASE_PRICE, JOYSTICK_SURCHARGE, PER_BUTTON};
use crate::document::ButtonConfig;

/// Price of a case fitted with `buttons`.
///
/// Every entry pays the per-button charge; joystick-type entries additionally
/// pay the joystick surcharge.
pub fn price(buttons: &[ButtonConfig]) -> f64 {
    let joysticks = buttons.iter().filter(|b| b.is_joystick()).count();
    BASE_PRICE + buttons.len() as f64 * PER_BUTTON + joysticks as f64 * JOYSTICK_SURCHARGE
}

/// Two-decimal display form used by listings
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
