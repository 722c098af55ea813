use crate::convert::Rgb;

/// Returned when no pixel survives filtering.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);

/// ITU-R BT.601 luma on the 0..=255 scale.
///
/// Used only to order extracted palettes. Contrast math uses the WCAG
/// luminance in [`crate::metrics`] instead.
#[inline]
pub fn luma(c: Rgb) -> f64 {
    (f64::from(c.r) * 299.0 + f64::from(c.g) * 587.0 + f64::from(c.b) * 114.0) / 1000.0
}

/// An extracted palette, brightest entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    /// Build from cluster averages: drop repeats, then order by descending luma.
    pub fn from_centroids(centroids: Vec<Rgb>) -> Self {
        let mut entries: Vec<Rgb> = Vec::with_capacity(centroids.len());
        for c in centroids {
            if !entries.contains(&c) {
                entries.push(c);
            }
        }
        luma_sort(&mut entries);
        Self { entries }
    }

    /// A one-entry palette.
    pub fn single(color: Rgb) -> Self {
        Self {
            entries: vec![color],
        }
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uppercase `#RRGGBB` for each entry, in palette order.
    pub fn to_hex(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.to_hex()).collect()
    }
}

/// Stable sort, brightest first.
fn luma_sort(entries: &mut [Rgb]) {
    entries.sort_by(|a, b| {
        luma(*b)
            .partial_cmp(&luma(*a))
            .unwrap_or(core::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_weights() {
        assert_eq!(luma(Rgb::WHITE), 255.0);
        assert_eq!(luma(Rgb::BLACK), 0.0);
        assert!((luma(Rgb::new(255, 0, 0)) - 76.245).abs() < 1e-9);
        assert!((luma(Rgb::new(0, 255, 0)) - 149.685).abs() < 1e-9);
        assert!((luma(Rgb::new(0, 0, 255)) - 29.07).abs() < 1e-9);
    }

    #[test]
    fn sorted_brightest_first() {
        let p = Palette::from_centroids(vec![
            Rgb::new(0, 0, 255),
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
        ]);
        assert_eq!(p.to_hex(), vec!["#00FF00", "#FF0000", "#0000FF"]);
    }

    #[test]
    fn luma_differs_from_wcag_order() {
        let blue = Rgb::new(0, 0, 255);
        let dark_green = Rgb::new(0, 60, 0);
        assert!(
            crate::metrics::relative_luminance(blue)
                > crate::metrics::relative_luminance(dark_green)
        );
        let p = Palette::from_centroids(vec![blue, dark_green]);
        assert_eq!(p.entries(), &[dark_green, blue]);
    }

    #[test]
    fn repeats_are_dropped() {
        let c = Rgb::new(10, 20, 30);
        let p = Palette::from_centroids(vec![c, Rgb::new(90, 90, 90), c]);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn fallback_is_light_gray() {
        assert_eq!(Palette::single(FALLBACK_COLOR).to_hex(), vec!["#CCCCCC"]);
    }
}
