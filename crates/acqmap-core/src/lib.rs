pub mod caption;
pub mod circle;
pub mod color;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod globe;
pub mod magnitude;
pub mod panel;
pub mod path;
pub mod projection;
pub mod scan;
pub mod signal;
pub mod sources;
pub mod surface;
pub mod tooltip;
pub mod topojson;

pub use caption::*;
pub use color::Rgb;
pub use constants::*;
pub use error::{Error, Result};
pub use geo::{Feature, FeatureCollection, Geometry, Position};
pub use globe::{GlobeLayers, GlobeRenderer, GlobeScene, GlobeSize};
pub use magnitude::{MagnitudeRadius, SqrtScale};
pub use panel::*;
pub use signal::Signal;
pub use sources::DataSources;
pub use surface::{DrawCall, DrawSurface, RecordingSurface};
pub use tooltip::tooltip_html;
