//! Software rasterizer for image export
//!
//! Draws the case and every button into an `RgbaImage` at one pixel per
//! case unit (optionally scaled). Labels are not drawn.

pub mod encode;

use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use tracing::warn;

use crate::color::HexColor;
use crate::document::{ButtonConfig, ButtonType, ControllerConfig};

const FALLBACK_BUTTON: HexColor = HexColor::rgb(0x80, 0x80, 0x80);
const FALLBACK_CASE: HexColor = HexColor::rgb(0x33, 0x33, 0x33);
const JOYSTICK_RING: HexColor = HexColor::rgb(0x22, 0x22, 0x22);
const SELECTION: HexColor = HexColor::rgb(0x8b, 0x5c, 0xf6);
const OUTLINE_WIDTH: f64 = 4.0;

/// Drawing surface over an RGBA8 image
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: HexColor) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Copy with alpha dropped (for encoders without alpha)
    pub fn to_rgb(&self) -> RgbImage {
        DynamicImage::ImageRgba8(self.image.clone()).to_rgb8()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn blend(&mut self, x: i64, y: i64, color: HexColor) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let alpha = color.a as u32;
        for (dst, src) in pixel.0.iter_mut().zip([color.r, color.g, color.b]) {
            *dst = ((src as u32 * alpha + *dst as u32 * (255 - alpha)) / 255) as u8;
        }
        pixel.0[3] = 0xFF;
    }

    /// Fill pixels whose centers fall inside the axis-aligned rectangle
    pub fn fill_rect(&mut self, left: f64, top: f64, width: f64, height: f64, color: HexColor) {
        let x0 = left.round() as i64;
        let y0 = top.round() as i64;
        let x1 = (left + width).round() as i64;
        let y1 = (top + height).round() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color);
            }
        }
    }

    /// Fill the ring between `inner` and `outer` radius (inner 0 is a disc)
    pub fn fill_ring(&mut self, cx: f64, cy: f64, outer: f64, inner: f64, color: HexColor) {
        let outer_sq = outer * outer;
        let inner_sq = inner * inner;
        let x0 = (cx - outer).floor() as i64;
        let x1 = (cx + outer).ceil() as i64;
        let y0 = (cy - outer).floor() as i64;
        let y1 = (cy + outer).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let d = dx * dx + dy * dy;
                if d <= outer_sq && d >= inner_sq {
                    self.blend(x, y, color);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: HexColor) {
        self.fill_ring(cx, cy, radius, 0.0, color);
    }
}

fn parse_or(value: &str, fallback: HexColor, what: &str) -> HexColor {
    HexColor::parse(value).unwrap_or_else(|| {
        warn!(color = %value, what = what, "Invalid color hex, using fallback");
        fallback
    })
}

fn draw_button(canvas: &mut Canvas, button: &ButtonConfig, scale: f64, selected: bool) {
    let color = parse_or(&button.color, FALLBACK_BUTTON, "button");
    let cx = button.x * scale;
    let cy = button.y * scale;
    let size = button.size * scale;
    let radius = size / 2.0;

    match button.button_type {
        ButtonType::Button => canvas.fill_circle(cx, cy, radius, color),
        ButtonType::Joystick => {
            canvas.fill_circle(cx, cy, radius, JOYSTICK_RING);
            canvas.fill_circle(cx, cy, radius * 0.6, color);
            canvas.fill_circle(cx, cy, radius * 0.2, color.darken(0.6));
        }
        ButtonType::Dpad => {
            let bar = size / 3.0;
            canvas.fill_rect(cx - radius, cy - bar / 2.0, size, bar, color);
            canvas.fill_rect(cx - bar / 2.0, cy - radius, bar, size, color);
        }
    }

    if selected {
        let outline = OUTLINE_WIDTH * scale.max(0.25);
        canvas.fill_ring(cx, cy, radius + outline, radius, SELECTION);
    }
}

/// Rasterize `doc`; `selected` outlines one button
pub fn render(doc: &ControllerConfig, scale: f64, selected: Option<&str>) -> Canvas {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    let width = (doc.width * scale).round().max(1.0) as u32;
    let height = (doc.height * scale).round().max(1.0) as u32;

    let mut canvas = Canvas::new(width, height, parse_or(&doc.case_color, FALLBACK_CASE, "case"));
    for button in &doc.buttons {
        draw_button(&mut canvas, button, scale, selected == Some(button.id.as_str()));
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutators;

    #[test]
    fn test_canvas_matches_case_size() {
        let doc = ControllerConfig::default();
        let canvas = render(&doc, 1.0, None);
        assert_eq!((canvas.width(), canvas.height()), (1322, 548));
        assert_eq!(canvas.image().as_raw().len(), 1322 * 548 * 4);

        let half = render(&doc, 0.5, None);
        assert_eq!((half.width(), half.height()), (661, 274));
    }

    #[test]
    fn test_background_is_case_color() {
        let doc = mutators::set_case_color(ControllerConfig::default(), "#000080");
        let canvas = render(&doc, 1.0, None);
        assert_eq!(canvas.pixel(5, 5), Some([0x00, 0x00, 0x80, 0xFF]));
    }

    #[test]
    fn test_button_drawn_at_center() {
        let doc = ControllerConfig::default();
        let a = doc.buttons.iter().find(|b| b.label == "A").unwrap();
        let canvas = render(&doc, 1.0, None);
        assert_eq!(canvas.pixel(a.x as u32, a.y as u32), Some([0xFF, 0x00, 0x00, 0xFF]));
    }

    #[test]
    fn test_selection_outline() {
        let doc = ControllerConfig::default();
        let a = doc.buttons.iter().find(|b| b.label == "A").unwrap();
        let edge = (a.x + a.size / 2.0 + 2.0) as u32;

        let plain = render(&doc, 1.0, None);
        assert_eq!(plain.pixel(edge, a.y as u32), Some([0x33, 0x33, 0x33, 0xFF]));

        let selected = render(&doc, 1.0, Some(&a.id));
        assert_eq!(selected.pixel(edge, a.y as u32), Some(SELECTION.to_rgba()));
    }

    #[test]
    fn test_invalid_colors_fall_back() {
        let mut doc = ControllerConfig::default();
        doc.case_color = "not-a-color".to_string();
        let canvas = render(&doc, 1.0, None);
        assert_eq!(canvas.pixel(0, 0), Some(FALLBACK_CASE.to_rgba()));
    }

    #[test]
    fn test_button_outside_case_is_clipped() {
        let mut doc = ControllerConfig::default();
        doc.buttons[0].x = -30.0;
        doc.buttons[0].y = 2000.0;
        let canvas = render(&doc, 1.0, None);
        assert_eq!(canvas.width(), 1322);
        assert_eq!(canvas.pixel(1322, 0), None);
    }

    #[test]
    fn test_rgb_drops_alpha() {
        let canvas = Canvas::new(2, 1, HexColor::rgb(1, 2, 3));
        let rgb = canvas.to_rgb();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.into_raw(), vec![1, 2, 3, 1, 2, 3]);
    }
}
