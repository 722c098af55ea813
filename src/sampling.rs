use crate::ExtractConfig;
use crate::convert::Rgb;
use crate::image::PixelSource;

/// Step between examined pixels so that roughly `target` are visited.
pub fn sample_stride(total_pixels: usize, target: usize) -> usize {
    (total_pixels / target.max(1)).max(1)
}

/// Whether a pixel carries palette-worthy color.
///
/// Mostly transparent pixels and near-black or near-white pixels (by
/// unweighted channel average) are treated as background.
pub fn is_informative(px: rgb::RGBA8, config: &ExtractConfig) -> bool {
    if px.a < config.min_alpha {
        return false;
    }
    let avg = (u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) as f64 / 3.0;
    avg >= config.min_brightness && avg <= config.max_brightness
}

/// Outcome of a sampling pass.
#[derive(Debug, Clone, Default)]
pub struct Samples {
    pub colors: Vec<Rgb>,
    pub stride: usize,
    pub visited: usize,
    pub unreadable: usize,
}

/// Walk `source` at a fixed stride and keep the informative pixels.
///
/// Work is bounded by `config.sample_target` regardless of image size.
pub fn collect_samples<S: PixelSource + ?Sized>(source: &S, config: &ExtractConfig) -> Samples {
    let total = source.pixel_count();
    let stride = sample_stride(total, config.sample_target);

    let mut samples = Samples {
        colors: Vec::with_capacity(total.min(config.sample_target.saturating_mul(2))),
        stride,
        ..Samples::default()
    };

    for index in (0..total).step_by(stride) {
        samples.visited += 1;
        let Some(px) = source.pixel(index) else {
            samples.unreadable += 1;
            continue;
        };
        if is_informative(px, config) {
            samples.colors.push(Rgb::new(px.r, px.g, px.b));
        }
    }

    samples
}
