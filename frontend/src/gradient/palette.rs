use crate::gradient::color::Hsl;

/// Brand colours the background drifts through, top of the page to bottom.
pub const DEFAULT_STOPS: [Hsl; 6] = [
    Hsl::new(210.0, 100.0, 40.0), // primary blue
    Hsl::new(200.0, 85.0, 50.0),  // secondary blue
    Hsl::new(30.0, 95.0, 55.0),   // accent orange
    Hsl::new(215.0, 100.0, 50.0), // hero blue
    Hsl::new(210.0, 100.0, 45.0),
    Hsl::new(200.0, 90.0, 55.0),
];

/// Where a progress value lands between two neighbouring stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub blend: f64,
}

/// Maps progress in [0, 1] onto a pair of adjacent stop indices.
///
/// `to` is `from + 1` except at the last stop, where both point at it and
/// `blend` is 0. Out-of-range and NaN progress are clamped first.
pub fn segment(progress: f64, len: usize) -> Segment {
    if len <= 1 {
        return Segment { from: 0, to: 0, blend: 0.0 };
    }
    let last = len - 1;
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let t = progress * last as f64;
    let from = (t.floor() as usize).min(last);
    let to = (from + 1).min(last);
    let blend = (t - from as f64).clamp(0.0, 1.0);
    Segment { from, to, blend }
}

/// Samples the interpolated colour for `progress`. Returns `None` for an empty palette.
pub fn sample(stops: &[Hsl], progress: f64) -> Option<Hsl> {
    if stops.is_empty() {
        return None;
    }
    let Segment { from, to, blend } = segment(progress, stops.len());
    Some(stops[from].lerp(stops[to], blend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_sit_on_first_and_last_stop() {
        assert_eq!(segment(0.0, 6), Segment { from: 0, to: 1, blend: 0.0 });
        assert_eq!(segment(1.0, 6), Segment { from: 5, to: 5, blend: 0.0 });
        assert_eq!(sample(&DEFAULT_STOPS, 0.0), Some(DEFAULT_STOPS[0]));
        assert_eq!(sample(&DEFAULT_STOPS, 1.0), Some(DEFAULT_STOPS[5]));
    }

    #[test]
    fn interior_stop_is_hit_exactly() {
        // 0.4 * 5 == 2.0
        let seg = segment(0.4, 6);
        assert_eq!((seg.from, seg.to), (2, 3));
        assert!(seg.blend.abs() < 1e-9);
    }

    #[test]
    fn indices_stay_valid_for_bad_progress() {
        for p in [-3.0, -0.0, 1.0000001, 42.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let seg = segment(p, 6);
            assert!(seg.from < 6 && seg.to < 6, "{p}");
            assert!(seg.to == seg.from || seg.to == seg.from + 1);
            assert!((0.0..1.0).contains(&seg.blend) || seg.blend == 0.0);
        }
    }

    #[test]
    fn single_stop_palette_is_constant() {
        let only = [Hsl::new(120.0, 50.0, 50.0)];
        assert_eq!(sample(&only, 0.7), Some(only[0]));
        assert_eq!(sample(&[], 0.7), None);
    }

    #[test]
    fn hue_is_monotonic_inside_a_segment() {
        // Second segment runs 200 -> 30, so hue must fall.
        let mut last = f64::INFINITY;
        for step in 0..=20 {
            let p = 0.2 + 0.19 * step as f64 / 20.0;
            let h = sample(&DEFAULT_STOPS, p).map(|c| c.h).unwrap_or_default();
            assert!(h <= last && (30.0..=200.0).contains(&h), "p={p} h={h}");
            last = h;
        }
    }
}
