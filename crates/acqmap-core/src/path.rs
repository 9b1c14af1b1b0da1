//! Draws GeoJSON geometry through an [`Orthographic`] projection onto a
//! [`DrawSurface`], cutting everything at the horizon.

use crate::constants::{HORIZON_EPSILON, HORIZON_STEP_DEG};
use crate::geo::{Feature, FeatureCollection, Geometry, Position};
use crate::projection::{is_visible, Orthographic};
use crate::surface::DrawSurface;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

pub const DEFAULT_POINT_RADIUS: f64 = 4.5;

#[derive(Clone, Copy, Debug)]
pub struct GeoPath<'a> {
    projection: &'a Orthographic,
    point_radius: f64,
}

impl<'a> GeoPath<'a> {
    pub fn new(projection: &'a Orthographic) -> Self {
        Self {
            projection,
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }

    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn collection<S: DrawSurface>(&self, fc: &FeatureCollection, s: &mut S) {
        for f in &fc.features {
            self.feature(f, s);
        }
    }

    pub fn feature<S: DrawSurface>(&self, f: &Feature, s: &mut S) {
        if let Some(g) = &f.geometry {
            self.geometry(g, s);
        }
    }

    pub fn geometry<S: DrawSurface>(&self, g: &Geometry, s: &mut S) {
        match g {
            Geometry::Point { coordinates } => self.point(*coordinates, s),
            Geometry::MultiPoint { coordinates } => {
                for p in coordinates {
                    self.point(*p, s);
                }
            }
            Geometry::LineString { coordinates } => self.line(coordinates, s),
            Geometry::MultiLineString { coordinates } => {
                for l in coordinates {
                    self.line(l, s);
                }
            }
            Geometry::Polygon { coordinates } => self.polygon(coordinates, s),
            Geometry::MultiPolygon { coordinates } => {
                for p in coordinates {
                    self.polygon(p, s);
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    self.geometry(g, s);
                }
            }
        }
    }

    fn point<S: DrawSurface>(&self, p: Position, s: &mut S) {
        if let Some((x, y)) = self.projection.project(p) {
            let r = self.point_radius;
            s.move_to(x + r, y);
            s.arc(x, y, r, 0.0, TAU);
        }
    }

    fn line<S: DrawSurface>(&self, coords: &[Position], s: &mut S) {
        let pts: Vec<DVec3> = coords.iter().map(|p| self.projection.to_view(*p)).collect();
        for run in clip_line(&pts) {
            self.emit(&run, false, s);
        }
    }

    fn polygon<S: DrawSurface>(&self, rings: &[Vec<Position>], s: &mut S) {
        for ring in rings {
            let pts: Vec<DVec3> = ring.iter().map(|p| self.projection.to_view(*p)).collect();
            if let Some(clipped) = clip_ring(&pts) {
                self.emit(&clipped, true, s);
            }
        }
    }

    fn emit<S: DrawSurface>(&self, pts: &[DVec3], closed: bool, s: &mut S) {
        let mut iter = pts.iter().map(|v| self.projection.view_to_screen(*v));
        let Some((x0, y0)) = iter.next() else {
            return;
        };
        s.move_to(x0, y0);
        for (x, y) in iter {
            s.line_to(x, y);
        }
        if closed {
            s.close_path();
        }
    }
}

/// Where the great-circle segment `a → b` meets the horizon plane `x = 0`.
fn horizon_crossing(a: DVec3, b: DVec3) -> DVec3 {
    let denom = a.x - b.x;
    let t = if denom.abs() < HORIZON_EPSILON {
        0.5
    } else {
        a.x / denom
    };
    let p = a + (b - a) * t;
    limb_point(p.z.atan2(p.y))
}

#[inline]
fn limb_angle(v: DVec3) -> f64 {
    v.z.atan2(v.y)
}

#[inline]
fn limb_point(angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(0.0, cos, sin)
}

#[inline]
fn wrap_angle(mut a: f64) -> f64 {
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Tracks how far the hidden part of a ring winds around the horizon, so
/// the visible outline can be closed along the horizon in the same
/// direction.
struct HorizonSweep {
    start: f64,
    last: f64,
    total: f64,
}

impl HorizonSweep {
    fn start(angle: f64) -> Self {
        Self {
            start: angle,
            last: angle,
            total: 0.0,
        }
    }

    fn advance(&mut self, angle: f64) {
        self.total += wrap_angle(angle - self.last);
        self.last = angle;
    }

    /// Points strictly between the sweep's ends.
    fn interior(&self, out: &mut Vec<DVec3>) {
        let step = HORIZON_STEP_DEG.to_radians();
        let n = (self.total.abs() / step).ceil() as usize;
        for i in 1..n {
            out.push(limb_point(self.start + self.total * i as f64 / n as f64));
        }
    }
}

/// Cut an open line at the horizon; returns the visible runs.
pub fn clip_line(pts: &[DVec3]) -> Vec<Vec<DVec3>> {
    let mut runs = Vec::new();
    let mut run: Vec<DVec3> = Vec::new();
    if let Some(&p0) = pts.first() {
        if is_visible(p0) {
            run.push(p0);
        }
    }
    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        match (is_visible(a), is_visible(b)) {
            (true, true) => run.push(b),
            (true, false) => {
                run.push(horizon_crossing(a, b));
                runs.push(std::mem::take(&mut run));
            }
            (false, true) => {
                run.push(horizon_crossing(a, b));
                run.push(b);
            }
            (false, false) => {}
        }
    }
    if run.len() > 1 {
        runs.push(run);
    }
    runs.retain(|r| r.len() > 1);
    runs
}

/// Cut a closed ring at the horizon.
///
/// Returns `None` when no part of the ring is visible. Hidden stretches are
/// replaced by the horizon arc they wind along.
pub fn clip_ring(ring: &[DVec3]) -> Option<Vec<DVec3>> {
    let mut pts = ring;
    if pts.len() > 1 && pts.first() == pts.last() {
        pts = &pts[..pts.len() - 1];
    }
    let n = pts.len();
    if n == 0 {
        return None;
    }
    let visible: Vec<bool> = pts.iter().map(|v| is_visible(*v)).collect();
    if visible.iter().all(|v| *v) {
        return Some(pts.to_vec());
    }
    // start on a visible point whose predecessor is hidden
    let start = (0..n).find(|&i| visible[i] && !visible[(i + n - 1) % n])?;

    let mut out = Vec::with_capacity(n + 8);
    let mut sweep: Option<HorizonSweep> = None;
    for k in 0..n {
        let ia = (start + k) % n;
        let ib = (start + k + 1) % n;
        let (a, b) = (pts[ia], pts[ib]);
        if visible[ia] {
            out.push(a);
        }
        match (visible[ia], visible[ib]) {
            (true, true) => {}
            (true, false) => {
                let exit = horizon_crossing(a, b);
                out.push(exit);
                let mut sw = HorizonSweep::start(limb_angle(exit));
                sw.advance(limb_angle(b));
                sweep = Some(sw);
            }
            (false, false) => {
                if let Some(sw) = sweep.as_mut() {
                    sw.advance(limb_angle(b));
                }
            }
            (false, true) => {
                let entry = horizon_crossing(a, b);
                if let Some(mut sw) = sweep.take() {
                    sw.advance(limb_angle(entry));
                    sw.interior(&mut out);
                }
                out.push(entry);
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_hidden_ring_is_dropped() {
        let ring = [
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(-0.9, 0.1, 0.0),
            DVec3::new(-0.9, 0.0, 0.1),
            DVec3::new(-1.0, 0.0, 0.0),
        ];
        assert!(clip_ring(&ring).is_none());
    }

    #[test]
    fn clipped_ring_ends_on_horizon() {
        let ring = [
            DVec3::new(0.5, 0.0, 0.5).normalize(),
            DVec3::new(-0.5, 0.0, 0.5).normalize(),
            DVec3::new(-0.5, 0.0, -0.5).normalize(),
            DVec3::new(0.5, 0.0, -0.5).normalize(),
            DVec3::new(0.5, 0.0, 0.5).normalize(),
        ];
        let out = clip_ring(&ring).unwrap();
        assert!(out.iter().all(|v| v.x >= -1e-12));
        // exit at the top of the limb, entry at the bottom, arc in between
        assert!(out.iter().filter(|v| v.x.abs() < 1e-12).count() >= 3);
    }

    #[test]
    fn line_split_into_visible_runs() {
        let line = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(-1.0, 0.1, 0.0),
            DVec3::new(1.0, 0.2, 0.0),
        ];
        let runs = clip_line(&line);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
    }
}
