//! The rotating globe: derived layers and the per-frame draw order.

use crate::circle::geo_circle;
use crate::constants::{CIRCLE_PRECISION_DEG, GLOBE_RIM_INSET, MAX_GLOBE_WIDTH, OCEAN_STROKE_WIDTH};
use crate::geo::{FeatureCollection, Geometry};
use crate::magnitude::MagnitudeRadius;
use crate::panel::{LandDetail, MarkerStyle, RenderParameters, TimeWindow};
use crate::path::GeoPath;
use crate::projection::Orthographic;
use crate::surface::DrawSurface;
use crate::topojson::DecodedTopology;
use std::f64::consts::TAU;

/// Side length of the square surface and radius of the globe drawn in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeSize {
    pub width: f64,
    pub radius: f64,
}

impl GlobeSize {
    pub fn new(host_width: f64, padding: f64) -> Self {
        let width = host_width.clamp(0.0, MAX_GLOBE_WIDTH);
        let radius = (width / 2.0 - GLOBE_RIM_INSET - padding).max(0.0);
        Self { width, radius }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.width / 2.0
    }
}

/// Borrowed view of whatever layers are available for this frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobeLayers<'a> {
    pub earth: Option<&'a FeatureCollection>,
    pub quakes: Option<&'a FeatureCollection>,
    pub circles: Option<&'a [Geometry]>,
}

/// Loaded data plus the layers derived from it.
///
/// Boundary geometry is rebuilt when the land detail changes; marker
/// circles when the features or the marker size change.
#[derive(Default)]
pub struct GlobeScene {
    world: Option<DecodedTopology>,
    earth: Option<FeatureCollection>,
    earth_detail: Option<LandDetail>,
    quakes: Option<FeatureCollection>,
    circles: Option<Vec<Geometry>>,
    circles_size: Option<f64>,
}

impl GlobeScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_world(&mut self, world: DecodedTopology) {
        self.world = Some(world);
        self.earth = None;
        self.earth_detail = None;
    }

    pub fn set_quakes(&mut self, quakes: FeatureCollection) {
        self.quakes = Some(quakes);
        self.circles = None;
        self.circles_size = None;
    }

    /// Install features fetched for `requested` only while that window is
    /// still `selected`. Returns whether they were installed.
    pub fn accept_quakes(
        &mut self,
        requested: TimeWindow,
        selected: TimeWindow,
        quakes: FeatureCollection,
    ) -> bool {
        if requested != selected {
            return false;
        }
        self.set_quakes(quakes);
        true
    }

    pub fn refresh(&mut self, params: &RenderParameters) {
        if let Some(world) = &self.world {
            if self.earth_detail != Some(params.land_detail) {
                self.earth_detail = Some(params.land_detail);
                self.earth = match world.feature(params.land_detail.object_name()) {
                    Ok(fc) => Some(fc),
                    Err(e) => {
                        log::warn!("[globe] no boundary layer: {}", e);
                        None
                    }
                };
            }
        }
        if let Some(quakes) = &self.quakes {
            if self.circles_size != Some(params.marker_size) {
                self.circles_size = Some(params.marker_size);
                self.circles = Some(marker_circles(quakes, params.marker_size));
            }
        }
    }

    pub fn layers(&self) -> GlobeLayers<'_> {
        GlobeLayers {
            earth: self.earth.as_ref(),
            quakes: self.quakes.as_ref(),
            circles: self.circles.as_deref(),
        }
    }
}

/// One geodesic circle per point feature, with half the mapped radius as
/// its angular radius in degrees.
pub fn marker_circles(quakes: &FeatureCollection, marker_size: f64) -> Vec<Geometry> {
    let mapper = MagnitudeRadius::new(marker_size);
    quakes
        .features
        .iter()
        .filter_map(|f| {
            let center = f.point()?;
            Some(geo_circle(
                center,
                mapper.feature_radius(f) / 2.0,
                CIRCLE_PRECISION_DEG,
            ))
        })
        .collect()
}

/// Owns the rotation angle, the only state carried between frames.
#[derive(Clone, Debug, Default)]
pub struct GlobeRenderer {
    angle: f64,
}

impl GlobeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in degrees. Grows without bound.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn frame<S: DrawSurface>(
        &mut self,
        s: &mut S,
        size: GlobeSize,
        params: &RenderParameters,
        layers: &GlobeLayers<'_>,
    ) {
        self.angle += params.spin_speed;
        let w = size.width;
        let c = size.center();
        let projection = Orthographic::new(size.radius, [c, c]).rotate(self.angle);
        let path = GeoPath::new(&projection);

        s.clear_rect(0.0, 0.0, w, w);

        // seas
        s.set_line_width(OCEAN_STROKE_WIDTH);
        s.set_fill_style(&params.ocean_color.to_hex());
        s.begin_path();
        s.arc(c, c, size.radius, 0.0, TAU);
        s.fill();
        s.stroke();

        if let Some(earth) = layers.earth {
            s.set_line_width(params.line_width);
            s.set_fill_style(&params.land_color.to_hex());
            s.begin_path();
            path.collection(earth, s);
            s.fill();
            s.stroke();
        }

        let marker_fill = params.marker_color.to_rgba_css(params.marker_opacity);
        match params.marker_style {
            MarkerStyle::Projected => {
                if let Some(circles) = layers.circles {
                    s.set_fill_style(&marker_fill);
                    for circle in circles {
                        s.begin_path();
                        path.geometry(circle, s);
                        s.fill();
                    }
                }
            }
            MarkerStyle::Unprojected => {
                if let Some(quakes) = layers.quakes {
                    s.set_fill_style(&marker_fill);
                    let mapper = MagnitudeRadius::new(params.marker_size);
                    for f in &quakes.features {
                        s.begin_path();
                        path.point_radius(mapper.feature_radius(f)).feature(f, s);
                        s.fill();
                    }
                }
            }
        }
    }
}
