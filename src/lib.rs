#![forbid(unsafe_code)]

//! Color exploration primitives: dominant-color extraction from RGBA pixel
//! data, conversions between hex/RGB/HSL/HSV/CMYK, derived palettes, and
//! WCAG contrast and color-vision metrics.
//!
//! Every function here is pure and total. Malformed input (a bad hex
//! string, a short pixel buffer) yields `None`, an empty `Vec`, or a fixed
//! fallback color rather than an error. The `FromStr` impls and
//! [`ImageBuffer::try_new`] are the strict alternatives.

pub mod convert;
pub mod derive;
pub mod error;
pub mod image;
pub mod median_cut;
pub mod metrics;
pub mod naming;
pub mod palette;
pub mod sampling;

pub use convert::{
    Cmyk, Hsl, Hsv, Rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsl_precise, rgb_to_hsv,
};
pub use derive::{
    Harmony, generate_analogous, generate_complementary, generate_harmony, generate_shades,
    generate_tetradic, generate_tints, generate_tones, generate_triadic,
};
pub use error::ColorError;
pub use image::{ImageBuffer, PixelSource};
pub use metrics::{
    ColorBlindness, ContrastReport, contrast_ratio, readable_text_color, relative_luminance,
    simulate_color_blindness,
};
pub use naming::get_color_name;
pub use palette::{FALLBACK_COLOR, Palette};

/// Palette size used when the caller has no preference.
pub const DEFAULT_MAX_COLORS: usize = 5;

/// Configuration for palette extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Upper bound on returned colors. Zero is treated as one.
    pub max_colors: usize,
    /// Approximate number of pixels to examine, whatever the image size.
    pub sample_target: usize,
    /// Pixels with alpha below this are skipped.
    pub min_alpha: u8,
    /// Pixels whose channel average is below this are skipped.
    pub min_brightness: f64,
    /// Pixels whose channel average is above this are skipped.
    pub max_brightness: f64,
    /// Returned alone when no pixel survives filtering.
    pub fallback: Rgb,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            sample_target: 5000,
            min_alpha: 125,
            min_brightness: 20.0,
            max_brightness: 235.0,
            fallback: FALLBACK_COLOR,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_colors(mut self, n: usize) -> Self {
        self.max_colors = n;
        self
    }

    pub fn sample_target(mut self, n: usize) -> Self {
        self.sample_target = n;
        self
    }

    pub fn min_alpha(mut self, alpha: u8) -> Self {
        self.min_alpha = alpha;
        self
    }

    /// Inclusive band of channel averages that count as color.
    pub fn brightness_range(mut self, min: f64, max: f64) -> Self {
        self.min_brightness = min;
        self.max_brightness = max;
        self
    }

    pub fn fallback(mut self, color: Rgb) -> Self {
        self.fallback = color;
        self
    }
}

/// Extract a representative palette from any pixel source.
///
/// 1. Sample at a stride bounded by `sample_target`.
/// 2. Drop transparent and near-black/near-white pixels.
/// 3. Median-cut the survivors into at most `max_colors` boxes.
/// 4. Average each box, then order brightest first by BT.601 luma.
///
/// Always returns at least one color.
pub fn extract_palette<S: PixelSource + ?Sized>(source: &S, config: &ExtractConfig) -> Palette {
    let max_colors = config.max_colors.max(1);
    let samples = sampling::collect_samples(source, config);
    let (width, height) = source.dimensions();

    tracing::debug!(
        width,
        height,
        pixels = source.pixel_count(),
        stride = samples.stride,
        visited = samples.visited,
        kept = samples.colors.len(),
        unreadable = samples.unreadable,
        "sampled image"
    );

    if samples.colors.is_empty() {
        tracing::debug!(
            fallback = %config.fallback.to_hex(),
            pixels = source.pixel_count(),
            visited = samples.visited,
            unreadable = samples.unreadable,
            filtered = samples.visited - samples.unreadable,
            "no informative pixels, using fallback"
        );
        return Palette::single(config.fallback);
    }

    let centroids = median_cut::median_cut(samples.colors, max_colors);
    let palette = Palette::from_centroids(centroids);

    tracing::debug!(colors = palette.len(), max_colors, "extracted palette");
    palette
}

/// Hex colors for `source`, brightest first.
pub fn extract_colors<S: PixelSource + ?Sized>(source: &S, config: &ExtractConfig) -> Vec<String> {
    extract_palette(source, config).to_hex()
}

/// Hex colors for a flat RGBA buffer, brightest first, at most `max_colors`.
pub fn extract_colors_from_image(image: &ImageBuffer<'_>, max_colors: usize) -> Vec<String> {
    extract_colors(image, &ExtractConfig::new().max_colors(max_colors))
}
