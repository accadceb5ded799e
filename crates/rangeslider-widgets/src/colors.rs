//! Region color parsing.

use egui::Color32;
use rangeslider_core::Region;

/// Fallback for colors that cannot be parsed.
pub const FALLBACK: Color32 = Color32::from_rgb(128, 128, 128);

/// Parse a CSS hex color (`#rrggbb` or `#rgb`).
///
/// Anything else falls back to mid grey.
pub fn parse_css_color(color: &str) -> Color32 {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return FALLBACK;
    };
    if !hex.is_ascii() {
        return FALLBACK;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let rgb = match hex.len() {
        6 => (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        // #abc expands to #aabbcc
        3 => (
            channel(&hex[0..1]).map(|c| c * 17),
            channel(&hex[1..2]).map(|c| c * 17),
            channel(&hex[2..3]).map(|c| c * 17),
        ),
        _ => return FALLBACK,
    };

    match rgb {
        (Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => FALLBACK,
    }
}

/// Fill color of a region band.
pub fn region_color(region: &Region) -> Color32 {
    parse_css_color(&region.color)
}
