use crate::geo::{Geometry, Position};

/// A small circle on the sphere as a closed polygon ring.
///
/// `radius_deg` is the angular radius; the ring holds one vertex every
/// `precision_deg` degrees of bearing around the centre (at least three).
pub fn geo_circle(center: Position, radius_deg: f64, precision_deg: f64) -> Geometry {
    let steps = if precision_deg > 0.0 {
        (360.0 / precision_deg).ceil().max(3.0) as usize
    } else {
        3
    };
    let delta = radius_deg.to_radians();
    let phi1 = center.lat.to_radians();
    let lambda1 = center.lon.to_radians();
    let (sin_d, cos_d) = delta.sin_cos();
    let (sin_p1, cos_p1) = phi1.sin_cos();

    let mut ring = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let theta = std::f64::consts::TAU * i as f64 / steps as f64;
        let (sin_t, cos_t) = theta.sin_cos();
        let sin_p2 = (sin_p1 * cos_d + cos_p1 * sin_d * cos_t).clamp(-1.0, 1.0);
        let phi2 = sin_p2.asin();
        let lambda2 = lambda1 + (sin_t * sin_d * cos_p1).atan2(cos_d - sin_p1 * sin_p2);
        ring.push(Position::new(lambda2.to_degrees(), phi2.to_degrees()));
    }
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    Geometry::Polygon {
        coordinates: vec![ring],
    }
}
