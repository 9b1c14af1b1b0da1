// Shared tuning constants for the globe renderer and the data sources.

// Globe layout
pub const MAX_GLOBE_WIDTH: f64 = 680.0; // the surface never grows past this side length
pub const GLOBE_RIM_INSET: f64 = 2.0; // gap between the globe and the surface edge, before padding
pub const OCEAN_STROKE_WIDTH: f64 = 1.5;

// Markers
pub const CIRCLE_PRECISION_DEG: f64 = 25.0; // ring step of the geodesic marker circles
pub const MAGNITUDE_LOG_DOMAIN: [f64; 2] = [0.0, 100.0];

// Horizon clipping
pub const HORIZON_STEP_DEG: f64 = 6.0; // angular step used when following the horizon circle
pub const HORIZON_EPSILON: f64 = 1e-6;

// Default data sources
pub const PAST_DAY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
pub const PAST_WEEK_URL: &str = "data/acquisitions.geojson";
pub const PAST_MONTH_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/2.5_month.geojson";
pub const WORLD_URL: &str = "https://unpkg.com/world-atlas@1/world/110m.json";
