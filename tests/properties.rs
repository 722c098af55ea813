//! Exhaustive and grid sweeps over the conversion and contrast math.

use zenpalette::convert::rgb_to_hsl_precise;
use zenpalette::{
    Hsl, Rgb, contrast_ratio, generate_complementary, generate_shades, hex_to_rgb, hsl_to_rgb,
    hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};

/// Every `step`-th value per channel, always including 255.
fn grid(step: usize) -> impl Iterator<Item = Rgb> {
    let axis = move || (0..=255u8).step_by(step).chain(core::iter::once(255));
    axis().flat_map(move |r| {
        axis().flat_map(move |g| axis().map(move |b| Rgb::new(r, g, b)))
    })
}

fn max_channel_error(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn hex_round_trip() {
    for c in grid(2) {
        let hex = rgb_to_hex(f64::from(c.r), f64::from(c.g), f64::from(c.b));
        assert_eq!(hex_to_rgb(&hex), Some(c));
        assert_eq!(hex_to_rgb(&hex.to_lowercase()), Some(c));
    }
}

#[test]
fn precise_hsl_round_trip_within_one() {
    for c in grid(3) {
        let back = hsl_to_rgb(rgb_to_hsl_precise(c));
        assert!(
            max_channel_error(c, back) <= 1,
            "{c:?} -> {:?} -> {back:?}",
            rgb_to_hsl_precise(c)
        );
    }
}

#[test]
fn rounded_hsl_round_trip_is_bounded() {
    for c in grid(3) {
        let hsl = rgb_to_hsl(c);
        assert!(hsl.h >= 0.0 && hsl.h < 360.0, "{c:?} -> {hsl:?}");
        assert!((0.0..=100.0).contains(&hsl.s) && (0.0..=100.0).contains(&hsl.l));
        let back = hsl_to_rgb(hsl);
        assert!(max_channel_error(c, back) <= 5, "{c:?} -> {hsl:?} -> {back:?}");
    }
}

#[test]
fn rounded_hsv_round_trip_is_bounded() {
    for c in grid(5) {
        let hsv = rgb_to_hsv(c);
        let back = hsv_to_rgb(hsv);
        assert!(max_channel_error(c, back) <= 5, "{c:?} -> {hsv:?} -> {back:?}");
    }
}

#[test]
fn reference_scenario() {
    let rgb = hex_to_rgb("#2596be").unwrap();
    assert_eq!(rgb, Rgb::new(37, 150, 190));
    assert_eq!(rgb_to_hsl(rgb), Hsl::new(196.0, 67.0, 45.0));
}

#[test]
fn contrast_is_symmetric_and_bounded() {
    let colors: Vec<Rgb> = grid(51).collect();
    for &a in &colors {
        assert_eq!(contrast_ratio(a, a), 1.0);
        for &b in &colors {
            let ab = contrast_ratio(a, b);
            assert_eq!(ab, contrast_ratio(b, a), "{a:?} vs {b:?}");
            assert!((1.0..=21.0).contains(&ab), "{a:?} vs {b:?}: {ab}");
        }
    }
    assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
}

#[test]
fn complementary_is_an_involution() {
    for c in grid(17) {
        let hex = c.to_hex();
        let twice = generate_complementary(&generate_complementary(&hex).unwrap()).unwrap();
        let back = hex_to_rgb(&twice).unwrap();
        assert!(max_channel_error(c, back) <= 4, "{hex} -> {twice}");
    }
}

#[test]
fn shades_always_ten() {
    for c in grid(51) {
        let shades = generate_shades(&c.to_hex(), 10);
        assert_eq!(shades.len(), 10);
        let first = rgb_to_hsl(hex_to_rgb(&shades[0]).unwrap()).l;
        let last = rgb_to_hsl(hex_to_rgb(&shades[9]).unwrap()).l;
        assert!((first - 10.0).abs() <= 1.0, "{c:?}: first L={first}");
        assert!((last - 90.0).abs() <= 1.0, "{c:?}: last L={last}");
    }
}
