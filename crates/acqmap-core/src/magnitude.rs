use crate::constants::MAGNITUDE_LOG_DOMAIN;
use crate::geo::Feature;

/// Square-root scale from a numeric domain onto a numeric range.
///
/// Input is clamped to the domain first, so the output always lies inside
/// the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl SqrtScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        // NaN falls to the bottom of the domain
        let x = if x.is_nan() { d0 } else { x.clamp(lo, hi) };
        let t0 = signed_sqrt(d0);
        let t1 = signed_sqrt(d1);
        if t1 == t0 {
            return r0;
        }
        let t = (signed_sqrt(x) - t0) / (t1 - t0);
        r0 + t * (r1 - r0)
    }
}

#[inline]
fn signed_sqrt(x: f64) -> f64 {
    x.signum() * x.abs().sqrt()
}

/// Maps a feature's magnitude to a display radius: a square-root scale from
/// `[0, 100]` onto `[0, max_radius]`, applied to the natural log of the
/// magnitude.
///
/// Magnitudes at or below 1 (including zero, negative and missing ones) land
/// at radius 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeRadius {
    scale: SqrtScale,
    max_radius: f64,
}

impl MagnitudeRadius {
    pub fn new(max_radius: f64) -> Self {
        let max_radius = if max_radius.is_finite() {
            max_radius.max(0.0)
        } else {
            0.0
        };
        Self {
            scale: SqrtScale::new(MAGNITUDE_LOG_DOMAIN, [0.0, max_radius]),
            max_radius,
        }
    }

    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn radius(&self, magnitude: f64) -> f64 {
        if !(magnitude > 0.0) {
            return 0.0;
        }
        self.scale.apply(magnitude.ln())
    }

    pub fn feature_radius(&self, feature: &Feature) -> f64 {
        feature.magnitude().map_or(0.0, |m| self.radius(m))
    }
}
