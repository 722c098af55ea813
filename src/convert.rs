use core::fmt;
use core::str::FromStr;

use crate::error::ColorError;

/// An sRGB color with 8-bit channels.
///
/// Hex text is the canonical external form: [`Rgb::to_hex`] and
/// [`hex_to_rgb`] round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    pub fn to_hsl_precise(self) -> Hsl {
        rgb_to_hsl_precise(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self)
    }

    /// Channels scaled to 0.0..=1.0.
    pub(crate) fn normalized(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }
}

impl From<rgb::RGB8> for Rgb {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

impl From<Rgb> for rgb::RGB8 {
    fn from(c: Rgb) -> Self {
        rgb::RGB8 {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Same saturation and lightness, hue moved by `degrees` and wrapped.
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Percentages. Derived from RGB only; there is no inverse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

/// Wrap any hue into `[0, 360)`. Never negative.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
///
/// Anything else yields `None`; malformed text is an ordinary input here,
/// so callers pick their own default.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format fractional channels as uppercase `#RRGGBB`.
///
/// Each channel is rounded to the nearest integer, then clamped into
/// `0..=255`. NaN formats as `00`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(to_channel(r), to_channel(g), to_channel(b)).to_hex()
}

#[inline]
pub(crate) fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Hue in turns `[0, 1)` from normalized channels; caller guarantees `d > 0`.
fn hue_turns(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

#[inline]
fn round_hue(turns: f64) -> f64 {
    wrap_hue((turns * 360.0).round())
}

#[inline]
fn round_percent(x: f64) -> f64 {
    (x * 100.0).round()
}

/// Unrounded HSL as (hue turns, saturation, lightness), all in `[0, 1]`.
fn hsl_parts(rgb: Rgb) -> (f64, f64, f64) {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    (hue_turns(r, g, b, max, d), s, l)
}

/// RGB to HSL, rounded to whole degrees and percent.
/// Achromatic colors get hue 0 and saturation 0.
///
/// The rounding is lossy: [`hsl_to_rgb`] lands within 5 of each original
/// channel. Use [`rgb_to_hsl_precise`] when the result feeds back into RGB.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = hsl_parts(rgb);
    Hsl::new(round_hue(h), round_percent(s), round_percent(l))
}

/// RGB to HSL without rounding. Round-trips through [`hsl_to_rgb`] within
/// one unit per channel.
pub fn rgb_to_hsl_precise(rgb: Rgb) -> Hsl {
    let (h, s, l) = hsl_parts(rgb);
    Hsl::new(wrap_hue(h * 360.0), s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL to RGB. Out-of-range hue wraps; saturation and lightness clamp.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = to_channel(l * 255.0);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
        to_channel(hue_to_channel(p, q, h) * 255.0),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

/// RGB to HSV, rounded like [`rgb_to_hsl`]. Black has saturation 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else {
        round_hue(hue_turns(r, g, b, max, d))
    };

    Hsv::new(h, round_percent(s), round_percent(max))
}

/// HSV to RGB. Out-of-range hue wraps; saturation and value clamp.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = wrap_hue(hsv.h) / 60.0;
    let s = hsv.s.clamp(0.0, 100.0) / 100.0;
    let v = hsv.v.clamp(0.0, 100.0) / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        to_channel(r * 255.0),
        to_channel(g * 255.0),
        to_channel(b * 255.0),
    )
}

/// RGB to CMYK percentages. Pure black is `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 100.0,
        };
    }

    let inv = 1.0 - k;
    Cmyk {
        c: round_percent((1.0 - r - k) / inv),
        m: round_percent((1.0 - g - k) / inv),
        y: round_percent((1.0 - b - k) / inv),
        k: round_percent(k),
    }
}
