//! Orthographic projection of the sphere, as seen from infinitely far away.
//!
//! Points are first rotated into a view frame where `x` points at the
//! viewer, `y` to the right and `z` up. Only `x > 0` is visible.

use crate::geo::Position;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthographic {
    scale: f64,
    translate: [f64; 2],
    rotate_deg: f64,
}

impl Orthographic {
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self {
            scale,
            translate,
            rotate_deg: 0.0,
        }
    }

    /// Spin the globe about its axis; `lambda` is added to every longitude.
    pub fn rotate(mut self, lambda_deg: f64) -> Self {
        self.rotate_deg = lambda_deg;
        self
    }

    /// Unit vector of a geographic position in the view frame.
    pub fn to_view(&self, p: Position) -> DVec3 {
        let lambda = (p.lon + self.rotate_deg).to_radians();
        let phi = p.lat.to_radians();
        let (sin_l, cos_l) = lambda.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        DVec3::new(cos_p * cos_l, cos_p * sin_l, sin_p)
    }

    #[inline]
    pub fn view_to_screen(&self, v: DVec3) -> (f64, f64) {
        (
            self.translate[0] + self.scale * v.y,
            self.translate[1] - self.scale * v.z,
        )
    }

    /// Screen position, or `None` on the far hemisphere.
    pub fn project(&self, p: Position) -> Option<(f64, f64)> {
        let v = self.to_view(p);
        is_visible(v).then(|| self.view_to_screen(v))
    }
}

#[inline]
pub fn is_visible(v: DVec3) -> bool {
    v.x > 0.0
}
