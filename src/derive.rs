//! Color sequences derived from a single seed color.
//!
//! Every generator accepts hex text and yields uppercase hex. An unparsable
//! seed produces an empty result rather than an error.

use crate::convert::{Hsl, Rgb, hex_to_rgb, rgb_to_hex};

pub const DEFAULT_SHADE_COUNT: usize = 10;
pub const DEFAULT_TINT_COUNT: usize = 5;
pub const DEFAULT_TONE_COUNT: usize = 5;

const SHADE_MIN_LIGHTNESS: f64 = 10.0;
const SHADE_MAX_LIGHTNESS: f64 = 90.0;

const MID_GRAY: f64 = 128.0;

/// Classic hue-wheel schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
}

impl Harmony {
    /// Hue offsets of the companions, in output order. The seed is not listed.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Harmony::Complementary => &[180.0],
            Harmony::Analogous => &[-30.0, 30.0],
            Harmony::Triadic => &[120.0, 240.0],
            Harmony::Tetradic => &[90.0, 180.0, 270.0],
        }
    }
}

/// Position `i` of `count` evenly spaced steps over `0.0..=1.0`.
#[inline]
fn step_fraction(i: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// `count` colors with the seed's hue and saturation, lightness swept
/// linearly from 10% to 90%.
pub fn generate_shades(hex: &str, count: usize) -> Vec<String> {
    let Some(seed) = hex_to_rgb(hex) else {
        return Vec::new();
    };
    let hsl = seed.to_hsl();
    let span = SHADE_MAX_LIGHTNESS - SHADE_MIN_LIGHTNESS;

    (0..count)
        .map(|i| {
            let l = SHADE_MIN_LIGHTNESS + span * step_fraction(i, count);
            Hsl { l, ..hsl }.to_rgb().to_hex()
        })
        .collect()
}

fn interpolate_toward(hex: &str, count: usize, target: f64) -> Vec<String> {
    let Some(seed) = hex_to_rgb(hex) else {
        return Vec::new();
    };
    let mix = |c: u8, t: f64| {
        let c = f64::from(c);
        c + (target - c) * t
    };

    (0..count)
        .map(|i| {
            let t = step_fraction(i, count);
            rgb_to_hex(mix(seed.r, t), mix(seed.g, t), mix(seed.b, t))
        })
        .collect()
}

/// Steps from the seed toward white. Index 0 is the seed itself.
pub fn generate_tints(hex: &str, count: usize) -> Vec<String> {
    interpolate_toward(hex, count, 255.0)
}

/// Steps from the seed toward mid-gray `(128, 128, 128)`. Index 0 is the seed.
pub fn generate_tones(hex: &str, count: usize) -> Vec<String> {
    interpolate_toward(hex, count, MID_GRAY)
}

/// The seed followed by its companions for `scheme`.
pub fn generate_harmony(hex: &str, scheme: Harmony) -> Vec<String> {
    let Some(seed) = hex_to_rgb(hex) else {
        return Vec::new();
    };
    harmony_of(seed, scheme)
}

fn harmony_of(seed: Rgb, scheme: Harmony) -> Vec<String> {
    let hsl = seed.to_hsl();
    core::iter::once(seed.to_hex())
        .chain(
            scheme
                .offsets()
                .iter()
                .map(|&deg| hsl.rotate(deg).to_rgb().to_hex()),
        )
        .collect()
}

/// Hue rotated by exactly 180 degrees.
pub fn generate_complementary(hex: &str) -> Option<String> {
    let seed = hex_to_rgb(hex)?;
    Some(seed.to_hsl().rotate(180.0).to_rgb().to_hex())
}

/// `[seed, hue - 30, hue + 30]`.
pub fn generate_analogous(hex: &str) -> Vec<String> {
    generate_harmony(hex, Harmony::Analogous)
}

/// `[seed, hue + 120, hue + 240]`.
pub fn generate_triadic(hex: &str) -> Vec<String> {
    generate_harmony(hex, Harmony::Triadic)
}

/// `[seed, hue + 90, hue + 180, hue + 270]`.
pub fn generate_tetradic(hex: &str) -> Vec<String> {
    generate_harmony(hex, Harmony::Tetradic)
}
