use crate::convert::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    R,
    G,
    B,
}

impl Channel {
    #[inline]
    fn of(self, c: Rgb) -> u8 {
        match self {
            Channel::R => c.r,
            Channel::G => c.g,
            Channel::B => c.b,
        }
    }
}

/// A contiguous run of samples inside the shared sample arena.
#[derive(Debug, Clone)]
struct ColorBox {
    start: usize,
    end: usize,
    /// Per-channel (max - min) over the box.
    ranges: [u8; 3],
}

impl ColorBox {
    fn new(samples: &[Rgb], start: usize, end: usize) -> Self {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];

        for c in &samples[start..end] {
            for (i, v) in [c.r, c.g, c.b].into_iter().enumerate() {
                min[i] = min[i].min(v);
                max[i] = max[i].max(v);
            }
        }

        let ranges = if start < end {
            [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
        } else {
            [0; 3]
        };

        Self {
            start,
            end,
            ranges,
        }
    }

    fn len(&self) -> usize {
        self.end - self.start
    }

    /// Largest single-channel range.
    fn range(&self) -> u8 {
        let [r, g, b] = self.ranges;
        r.max(g).max(b)
    }

    fn can_split(&self) -> bool {
        self.len() > 1 && self.range() > 0
    }

    /// Widest channel; ties prefer R, then G.
    fn widest_channel(&self) -> Channel {
        let [r, g, b] = self.ranges;
        if r >= g && r >= b {
            Channel::R
        } else if g >= b {
            Channel::G
        } else {
            Channel::B
        }
    }

    /// Rounded per-channel mean.
    fn average(&self, samples: &[Rgb]) -> Rgb {
        let members = &samples[self.start..self.end];
        let n = members.len().max(1) as f64;
        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for c in members {
            r += u64::from(c.r);
            g += u64::from(c.g);
            b += u64::from(c.b);
        }
        Rgb::new(
            (r as f64 / n).round() as u8,
            (g as f64 / n).round() as u8,
            (b as f64 / n).round() as u8,
        )
    }
}

/// Index of the splittable box with the largest range; first wins on ties.
fn widest_box(boxes: &[ColorBox]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, b) in boxes.iter().enumerate() {
        if !b.can_split() {
            continue;
        }
        let range = b.range();
        if best.map_or(true, |(_, r)| range > r) {
            best = Some((i, range));
        }
    }
    best.map(|(i, _)| i)
}

/// Median-cut `samples` into at most `max_colors` averaged colors.
///
/// Boxes live as index ranges over one sample arena and are refined from a
/// worklist, so depth does not grow the call stack. Output order follows box
/// order and is not sorted.
pub fn median_cut(mut samples: Vec<Rgb>, max_colors: usize) -> Vec<Rgb> {
    if samples.is_empty() || max_colors == 0 {
        return Vec::new();
    }

    // Never more boxes than samples.
    let mut boxes = Vec::with_capacity(max_colors.min(samples.len()));
    boxes.push(ColorBox::new(&samples, 0, samples.len()));

    while boxes.len() < max_colors {
        let Some(idx) = widest_box(&boxes) else {
            break; // nothing left to split
        };

        let target = &boxes[idx];
        let (start, end) = (target.start, target.end);
        let channel = target.widest_channel();
        let range = target.range();

        samples[start..end].sort_by_key(|c| channel.of(*c));
        let mid = start + (end - start) / 2;
        debug_assert!(start < mid && mid < end);

        tracing::trace!(
            size = end - start,
            range,
            ?channel,
            "splitting box"
        );

        boxes[idx] = ColorBox::new(&samples, start, mid);
        boxes.insert(idx + 1, ColorBox::new(&samples, mid, end));
    }

    boxes.iter().map(|b| b.average(&samples)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    #[test]
    fn empty_samples() {
        assert!(median_cut(Vec::new(), 8).is_empty());
        assert!(median_cut(vec![gray(10)], 0).is_empty());
    }

    #[test]
    fn single_sample_is_returned() {
        assert_eq!(median_cut(vec![Rgb::new(1, 2, 3)], 8), vec![Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn identical_samples_do_not_split() {
        let samples = vec![Rgb::new(40, 80, 120); 500];
        assert_eq!(median_cut(samples, 8), vec![Rgb::new(40, 80, 120)]);
    }

    #[test]
    fn huge_max_colors_is_bounded_by_samples() {
        let samples = vec![gray(30), gray(90), gray(160)];
        let result = median_cut(samples, usize::MAX);
        assert_eq!(result, vec![gray(30), gray(90), gray(160)]);
    }

    #[test]
    fn produces_requested_count() {
        let samples: Vec<Rgb> = (0..100).map(|i| gray(i as u8 * 2)).collect();
        assert_eq!(median_cut(samples, 8).len(), 8);
    }

    #[test]
    fn stops_when_boxes_run_out() {
        let samples = vec![gray(10), gray(200), gray(10)];
        let result = median_cut(samples, 16);
        assert_eq!(result, vec![gray(10), gray(10), gray(200)]);
    }

    #[test]
    fn two_clusters_split_at_median() {
        let mut samples = vec![Rgb::new(200, 40, 40); 10];
        samples.extend(vec![Rgb::new(40, 40, 200); 10]);
        let mut result = median_cut(samples, 2);
        result.sort_by_key(|c| c.r);
        assert_eq!(result, vec![Rgb::new(40, 40, 200), Rgb::new(200, 40, 40)]);
    }

    #[test]
    fn mean_is_rounded() {
        let samples = vec![Rgb::new(10, 10, 10), Rgb::new(11, 11, 12)];
        // one box: means 10.5, 10.5, 11
        assert_eq!(median_cut(samples, 1), vec![Rgb::new(11, 11, 11)]);
    }

    #[test]
    fn channel_tie_prefers_red() {
        let b = ColorBox {
            start: 0,
            end: 2,
            ranges: [50, 50, 50],
        };
        assert_eq!(b.widest_channel(), Channel::R);
        let b = ColorBox {
            ranges: [10, 50, 50],
            ..b
        };
        assert_eq!(b.widest_channel(), Channel::G);
        let b = ColorBox {
            ranges: [10, 20, 50],
            ..b
        };
        assert_eq!(b.widest_channel(), Channel::B);
    }

    #[test]
    fn box_tie_prefers_first() {
        let samples = vec![gray(0), gray(100), gray(150), gray(250)];
        let boxes = vec![
            ColorBox::new(&samples, 0, 2),
            ColorBox::new(&samples, 2, 4),
        ];
        assert_eq!(widest_box(&boxes), Some(0));
    }

    #[test]
    fn deterministic() {
        let samples: Vec<Rgb> = (0..300u32)
            .map(|i| {
                let h = i.wrapping_mul(2_654_435_761);
                Rgb::new(h as u8, (h >> 8) as u8, (h >> 16) as u8)
            })
            .collect();
        let a = median_cut(samples.clone(), 12);
        let b = median_cut(samples, 12);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }
}
