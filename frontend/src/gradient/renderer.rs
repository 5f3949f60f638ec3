//! Turns scroll progress into the layered background of the decorative surface.
//!
//! Everything here is a pure function of the progress value and the
//! [`BackgroundConfig`], so the same scroll position always paints the same
//! CSS. Smoothing between frames is left to the surface's CSS transition.

use std::f64::consts::PI;

use crate::config::BackgroundConfig;
use crate::gradient::color::Hsl;
use crate::gradient::palette;
use crate::scroll::metrics::ScrollProgress;

/// Hue, saturation, lightness offset and opacity share for one colour stop.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LayerTint {
    dh: f64,
    ds: f64,
    dl: f64,
    alpha: f64,
}

const RADIAL_TINTS: [LayerTint; 3] = [
    LayerTint { dh: 0.0, ds: 0.0, dl: 0.0, alpha: 1.0 },
    LayerTint { dh: 15.0, ds: 5.0, dl: 8.0, alpha: 0.8 },
    LayerTint { dh: 30.0, ds: 10.0, dl: 15.0, alpha: 0.5 },
];

const LINEAR_TINTS: [LayerTint; 3] = [
    LayerTint { dh: 0.0, ds: 0.0, dl: 0.0, alpha: 0.6 },
    LayerTint { dh: 20.0, ds: 0.0, dl: 10.0, alpha: 0.4 },
    LayerTint { dh: 40.0, ds: 0.0, dl: 20.0, alpha: 0.2 },
];

/// The radial glow fades out at this percentage of its radius.
const RADIAL_FADE_STOP: u8 = 70;

/// Orbit centre of the radial glow, in percent of the surface.
const ORBIT_CENTER: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Hsl,
    pub alpha: f64,
}

impl ColorStop {
    fn to_css(self) -> String {
        self.color.to_css(self.alpha)
    }
}

/// Everything needed to paint one frame of the background.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStyle {
    pub base: Hsl,
    pub angle: f64,
    pub opacity: f64,
    pub focus: (f64, f64),
    pub radial: [ColorStop; 3],
    pub linear: [ColorStop; 3],
}

impl GradientStyle {
    /// Value for the CSS `background` property: a radial glow stacked over a
    /// rotating linear wash.
    pub fn to_css(&self) -> String {
        let radial = self
            .radial
            .iter()
            .map(|stop| stop.to_css())
            .collect::<Vec<_>>()
            .join(", ");
        let linear = self
            .linear
            .iter()
            .map(|stop| stop.to_css())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, {}, transparent {}%), linear-gradient({:.2}deg, {}, transparent)",
            self.focus.0, self.focus.1, radial, RADIAL_FADE_STOP, self.angle, linear
        )
    }
}

fn tint(base: Hsl, opacity: f64, tints: [LayerTint; 3]) -> [ColorStop; 3] {
    tints.map(|t| ColorStop {
        color: base.shifted(t.dh, t.ds, t.dl),
        alpha: (opacity * t.alpha).clamp(0.0, 1.0),
    })
}

/// Position of the radial glow centre. Always on the circle of `orbit.radius`
/// around the middle of the surface.
pub fn focus_point(progress: ScrollProgress, config: &BackgroundConfig) -> (f64, f64) {
    let phase = progress.value() * 2.0 * PI * config.orbit.turns;
    (
        ORBIT_CENTER + phase.sin() * config.orbit.radius,
        ORBIT_CENTER + phase.cos() * config.orbit.radius,
    )
}

pub fn render(progress: ScrollProgress, config: &BackgroundConfig) -> GradientStyle {
    let p = progress.value();
    let base = palette::sample(&config.palette, p)
        .unwrap_or(palette::DEFAULT_STOPS[0])
        .shifted(0.0, 0.0, 0.0);
    let opacity = (config.opacity.base + p * config.opacity.range).clamp(0.0, 1.0);

    GradientStyle {
        base,
        angle: config.angle.start + p * config.angle.sweep,
        opacity,
        focus: focus_point(progress, config),
        radial: tint(base, opacity, RADIAL_TINTS),
        linear: tint(base, opacity, LINEAR_TINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::palette::DEFAULT_STOPS;

    fn stops(style: &GradientStyle) -> impl Iterator<Item = &ColorStop> {
        style.radial.iter().chain(style.linear.iter())
    }

    fn at(p: f64) -> GradientStyle {
        render(ScrollProgress::new(p), &BackgroundConfig::default())
    }

    #[test]
    fn top_of_page_uses_first_stop() {
        let style = at(0.0);
        assert_eq!(style.base, DEFAULT_STOPS[0]);
        assert_eq!(style.angle, 135.0);
        assert!((style.opacity - 0.04).abs() < 1e-12);
        assert_eq!(style.focus, (50.0, 75.0));
    }

    #[test]
    fn bottom_of_page_uses_last_stop() {
        let style = at(1.0);
        assert_eq!(style.base, DEFAULT_STOPS[5]);
        assert_eq!(style.angle, 315.0);
        assert!((style.opacity - 0.10).abs() < 1e-12);
    }

    #[test]
    fn derived_colours_stay_in_gamut() {
        for step in 0..=1000 {
            let style = at(step as f64 / 1000.0);
            for stop in stops(&style) {
                let c = stop.color;
                assert!((0.0..=100.0).contains(&c.s), "{:?}", c);
                assert!((0.0..=100.0).contains(&c.l), "{:?}", c);
                assert!((0.0..360.0).contains(&c.h), "{:?}", c);
                assert!((0.0..=1.0).contains(&stop.alpha));
            }
        }
    }

    #[test]
    fn layer_opacities_follow_the_base() {
        let style = at(0.5);
        let alphas: Vec<f64> = stops(&style).map(|s| s.alpha / style.opacity).collect();
        let expected = [1.0, 0.8, 0.5, 0.6, 0.4, 0.2];
        for (got, want) in alphas.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn accent_variants_are_clamped() {
        // Hero blue is fully saturated, so the +5/+10 saturation variants pin at 100.
        let style = at(0.6);
        assert_eq!(style.base, DEFAULT_STOPS[3]);
        assert_eq!(style.radial[1].color, Hsl::new(230.0, 100.0, 58.0));
        assert_eq!(style.radial[2].color, Hsl::new(245.0, 100.0, 65.0));
        assert_eq!(style.linear[2].color, Hsl::new(255.0, 100.0, 70.0));
    }

    #[test]
    fn focus_orbits_the_centre() {
        for step in 0..=200 {
            let (x, y) = at(step as f64 / 200.0).focus;
            let r2 = (x - 50.0).powi(2) + (y - 50.0).powi(2);
            assert!((r2 - 625.0).abs() < 1e-6, "({x}, {y})");
        }
    }

    #[test]
    fn same_progress_same_css() {
        assert_eq!(at(0.37).to_css(), at(0.37).to_css());
    }

    #[test]
    fn css_layout() {
        let css = at(0.0).to_css();
        assert_eq!(
            css,
            "radial-gradient(circle at 50.00% 75.00%, \
             hsl(210.00 100.00% 40.00% / 0.0400), \
             hsl(225.00 100.00% 48.00% / 0.0320), \
             hsl(240.00 100.00% 55.00% / 0.0200), \
             transparent 70%), \
             linear-gradient(135.00deg, \
             hsl(210.00 100.00% 40.00% / 0.0240), \
             hsl(230.00 100.00% 50.00% / 0.0160), \
             hsl(250.00 100.00% 60.00% / 0.0080), \
             transparent)"
        );
    }

    #[test]
    fn small_scroll_steps_give_small_changes() {
        let steps = 2000;
        let mut prev = at(0.0);
        for step in 1..=steps {
            let next = at(step as f64 / steps as f64);
            // Largest hue jump between stops is 185 degrees over one fifth of the page.
            assert!((next.base.h - prev.base.h).abs() < 1.0);
            assert!((next.base.s - prev.base.s).abs() < 0.1);
            assert!((next.base.l - prev.base.l).abs() < 0.1);
            assert!((next.angle - prev.angle).abs() < 0.1);
            assert!((next.opacity - prev.opacity).abs() < 1e-3);
            prev = next;
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(at(-4.0), at(0.0));
        assert_eq!(at(9.0), at(1.0));
    }
}
