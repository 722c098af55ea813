use crate::convert::{Hsl, hex_to_rgb};

/// Below this saturation a color is named by lightness alone.
const ACHROMATIC_SATURATION: f64 = 10.0;

/// Upper lightness bound (exclusive) for each gray name.
const GRAY_BANDS: [(f64, &str); 4] = [
    (20.0, "Black"),
    (40.0, "Dark Gray"),
    (60.0, "Gray"),
    (80.0, "Light Gray"),
];

/// Upper hue bound (exclusive) for each hue name, starting after red's
/// lower wedge `[0, 15)`. Together with red's upper wedge `[345, 360)` the
/// bands tile the whole circle.
const HUE_BANDS: [(f64, &str); 6] = [
    (45.0, "Orange"),
    (75.0, "Yellow"),
    (165.0, "Green"),
    (255.0, "Blue"),
    (285.0, "Purple"),
    (345.0, "Pink"),
];

/// Coarse English name for `hex`, or `"Unknown"` if it does not parse.
pub fn get_color_name(hex: &str) -> &'static str {
    match hex_to_rgb(hex) {
        Some(rgb) => name_for(rgb.to_hsl()),
        None => "Unknown",
    }
}

pub fn name_for(hsl: Hsl) -> &'static str {
    if hsl.s < ACHROMATIC_SATURATION {
        return GRAY_BANDS
            .iter()
            .find(|(upper, _)| hsl.l < *upper)
            .map_or("White", |&(_, name)| name);
    }

    let h = hsl.h;
    if h < 15.0 || h >= 345.0 {
        return "Red";
    }
    HUE_BANDS
        .iter()
        .find(|(upper, _)| h < *upper)
        .map_or("Red", |&(_, name)| name)
}
