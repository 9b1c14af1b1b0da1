// Page wiring constants for the web front-end.

// Leaflet page
pub const MAP_CENTER: [f64; 2] = [30.5, -0.09]; // lat, lon
pub const MAP_ZOOM: u32 = 2;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// Caption toggling
pub const LANGUAGE_PARAM: &str = "l"; // query parameter choosing the caption language
pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

// Globe controls
pub const CONTROL_ROW_CLASS: &str = "globe-control";
pub const RANGE_STEP: &str = "any"; // sliders emit any value between their bounds
