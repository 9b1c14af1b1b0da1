//! Where the globe's data comes from, and how the fetched bodies are read.

use crate::constants::{PAST_DAY_URL, PAST_MONTH_URL, PAST_WEEK_URL, WORLD_URL};
use crate::error::{Error, Result};
use crate::geo::FeatureCollection;
use crate::panel::{Choice, TimeWindow};
use crate::topojson::{DecodedTopology, Topology};
use serde::Deserialize;

/// URL table for the time windows and the boundary dataset.
///
/// Hosts may override any entry with a JSON object using these field names;
/// missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DataSources {
    pub past_day: String,
    pub past_week: String,
    pub past_month: String,
    pub world: String,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            past_day: PAST_DAY_URL.to_string(),
            past_week: PAST_WEEK_URL.to_string(),
            past_month: PAST_MONTH_URL.to_string(),
            world: WORLD_URL.to_string(),
        }
    }
}

impl DataSources {
    /// Parse overrides and check that no two time windows share a URL.
    pub fn from_json(json: &str) -> Result<Self> {
        let sources: Self = serde_json::from_str(json)?;
        sources.validate()?;
        Ok(sources)
    }

    pub fn validate(&self) -> Result<()> {
        let windows = TimeWindow::ALL;
        for (i, a) in windows.iter().enumerate() {
            for b in &windows[i + 1..] {
                if self.url(*a) == self.url(*b) {
                    return Err(Error::DuplicateSource {
                        first: a.label(),
                        second: b.label(),
                        url: self.url(*a).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn url(&self, window: TimeWindow) -> &str {
        match window {
            TimeWindow::PastDay => &self.past_day,
            TimeWindow::PastWeek => &self.past_week,
            TimeWindow::PastMonth => &self.past_month,
        }
    }
}

pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_topology(body: &str) -> Result<DecodedTopology> {
    let topology: Topology = serde_json::from_str(body)?;
    Ok(topology.decode())
}
