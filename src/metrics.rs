//! WCAG luminance and contrast, plus color-vision-deficiency simulation.

use core::str::FromStr;

use crate::convert::{Rgb, hex_to_rgb, to_channel};
use crate::error::ColorError;

/// Minimum contrast for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum contrast for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum contrast for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum contrast for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

// WCAG 2.x keeps the 0.03928 knee from the sRGB draft rather than 0.04045.
#[inline]
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG contrast ratio in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail of a contrast ratio against each WCAG threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }

    pub fn between(a: Rgb, b: Rgb) -> Self {
        Self::evaluate(contrast_ratio(a, b))
    }
}

/// Black or white, whichever contrasts more with `background`.
/// Ties go to black.
pub fn readable_text_color(background: Rgb) -> Rgb {
    if contrast_ratio(background, Rgb::BLACK) >= contrast_ratio(background, Rgb::WHITE) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Dichromat types with a fixed linear approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorBlindness {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorBlindness {
    pub const ALL: [ColorBlindness; 3] = [
        ColorBlindness::Protanopia,
        ColorBlindness::Deuteranopia,
        ColorBlindness::Tritanopia,
    ];

    /// Row-major transform applied to normalized RGB.
    pub fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            ColorBlindness::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
            ColorBlindness::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.3, 0.7],
            ],
            ColorBlindness::Tritanopia => [
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBlindness::Protanopia => "protanopia",
            ColorBlindness::Deuteranopia => "deuteranopia",
            ColorBlindness::Tritanopia => "tritanopia",
        }
    }

    pub fn apply(self, rgb: Rgb) -> Rgb {
        let (r, g, b) = rgb.normalized();
        let m = self.matrix();
        let row = |i: usize| to_channel((m[i][0] * r + m[i][1] * g + m[i][2] * b) * 255.0);
        Rgb::new(row(0), row(1), row(2))
    }
}

impl FromStr for ColorBlindness {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorBlindness::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownDeficiency(s.to_owned()))
    }
}

/// Simulate how `hex` appears under the named deficiency.
///
/// An unrecognized type or an unparsable color returns `hex` unchanged.
pub fn simulate_color_blindness(hex: &str, kind: &str) -> String {
    match (hex_to_rgb(hex), kind.parse::<ColorBlindness>()) {
        (Some(rgb), Ok(kind)) => kind.apply(rgb).to_hex(),
        _ => hex.to_owned(),
    }
}
