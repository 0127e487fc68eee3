use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Single-series charts (histogram, waste bars).
pub const ACCENT: Color32 = Color32::from_rgb(76, 114, 176);
/// Density curve and interval whiskers drawn over bars.
pub const OVERLAY: Color32 = Color32::from_rgb(64, 64, 64);

/// [`ACCENT`] in HSL. Category colours share its saturation and lightness.
const ACCENT_HUE: f32 = 217.0;
const CATEGORY_SATURATION: f32 = 0.4;
const CATEGORY_LIGHTNESS: f32 = 0.494;

// ---------------------------------------------------------------------------
// Category palette
// ---------------------------------------------------------------------------

/// One colour per category, hues evenly spaced around the wheel starting at
/// the accent hue, so the first category is drawn in the accent colour.
pub fn category_palette(n: usize) -> Vec<Color32> {
    (0..n).map(|i| category_color(i, n)).collect()
}

fn category_color(i: usize, n: usize) -> Color32 {
    let hue = (ACCENT_HUE + 360.0 * i as f32 / n as f32) % 360.0;
    let rgb: Srgb = Hsl::new(hue, CATEGORY_SATURATION, CATEGORY_LIGHTNESS).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
