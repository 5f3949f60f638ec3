use serde::{Deserialize, Serialize};

/// A colour in HSL space. Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Blends each channel independently. `blend` of 0 returns `self`, 1 returns `other`.
    ///
    /// Hue is blended linearly rather than along the shorter arc, so it always
    /// stays between the two endpoint hues.
    pub fn lerp(self, other: Hsl, blend: f64) -> Hsl {
        Hsl {
            h: self.h + (other.h - self.h) * blend,
            s: self.s + (other.s - self.s) * blend,
            l: self.l + (other.l - self.l) * blend,
        }
    }

    /// Offsets every channel, keeping saturation and lightness inside [0, 100]
    /// and hue inside [0, 360).
    pub fn shifted(self, dh: f64, ds: f64, dl: f64) -> Hsl {
        Hsl {
            h: (self.h + dh).rem_euclid(360.0),
            s: (self.s + ds).clamp(0.0, 100.0),
            l: (self.l + dl).clamp(0.0, 100.0),
        }
    }

    pub fn in_gamut(&self) -> bool {
        (0.0..=360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l)
    }

    /// CSS Color 4 notation, e.g. `hsl(210.00 100.00% 40.00% / 0.0400)`.
    pub fn to_css(&self, alpha: f64) -> String {
        format!(
            "hsl({:.2} {:.2}% {:.2}% / {:.4})",
            self.h,
            self.s,
            self.l,
            alpha.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Hsl::new(210.0, 100.0, 40.0);
        let b = Hsl::new(30.0, 95.0, 55.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_takes_the_long_way_round() {
        let mid = Hsl::new(200.0, 85.0, 50.0).lerp(Hsl::new(30.0, 95.0, 55.0), 0.5);
        assert_eq!(mid, Hsl::new(115.0, 90.0, 52.5));
    }

    #[test]
    fn shifted_clamps_saturation_and_lightness() {
        let c = Hsl::new(350.0, 98.0, 95.0).shifted(30.0, 10.0, 15.0);
        assert_eq!(c.s, 100.0);
        assert_eq!(c.l, 100.0);
        assert!((c.h - 20.0).abs() < 1e-9);

        let dark = Hsl::new(10.0, 2.0, 3.0).shifted(0.0, -5.0, -8.0);
        assert_eq!(dark.s, 0.0);
        assert_eq!(dark.l, 0.0);
    }

    #[test]
    fn css_uses_space_separated_syntax() {
        assert_eq!(
            Hsl::new(210.0, 100.0, 40.0).to_css(0.04),
            "hsl(210.00 100.00% 40.00% / 0.0400)"
        );
    }
}
