//! Counting acquisitions per address from the acquisitions spreadsheet into
//! the locations file.
//!
//! Rows arrive as plain cell text so the spreadsheet reader stays outside
//! the core. Geocoding is not done here: new addresses get a record with a
//! count and no coordinates.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Header cells naming the address parts, in the order they are joined.
pub const ADDRESS_HEADERS: [&str; 3] = ["City", "Prov./state", "Country"];
pub const DEFAULT_INSTITUTION_HEADER: &str = "Institution";
/// Acquisition sheets are the ones whose name ends with this.
pub const SHEET_SUFFIX: &str = "Acq xlsx";

/// Where the address parts and the institution sit in a sheet's rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetColumns {
    address: Vec<usize>,
    institution: Option<usize>,
}

/// What one spreadsheet row contributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquisitionRow {
    pub address: String,
    pub institution: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub rows: usize,
    pub counted: usize,
    pub blank: usize,
    pub new_locations: usize,
}

impl SheetColumns {
    /// Find the columns from the header row. Missing address columns are
    /// left out of the address; having none of them is an error.
    pub fn from_header<S: AsRef<str>>(header: &[S], institution_header: &str) -> Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.as_ref().trim() == name);
        let mut address = Vec::with_capacity(ADDRESS_HEADERS.len());
        for name in ADDRESS_HEADERS {
            match find(name) {
                Some(col) => address.push(col),
                None => log::warn!("[scan] no {:?} column", name),
            }
        }
        if address.is_empty() {
            return Err(Error::MissingAddressColumns(ADDRESS_HEADERS.join(", ")));
        }
        let institution = find(institution_header);
        if institution.is_none() {
            log::warn!("[scan] no {:?} column, institutions not counted", institution_header);
        }
        Ok(Self {
            address,
            institution,
        })
    }

    /// The address is the non-empty address cells joined by single spaces.
    pub fn row<S: AsRef<str>>(&self, cells: &[S]) -> AcquisitionRow {
        let cell = |col: usize| {
            cells
                .get(col)
                .map(|c| c.as_ref().trim())
                .filter(|c| !c.is_empty())
        };
        let address = self
            .address
            .iter()
            .filter_map(|&col| cell(col))
            .collect::<Vec<_>>()
            .join(" ");
        AcquisitionRow {
            address,
            institution: self.institution.and_then(cell).map(str::to_string),
        }
    }
}

/// Parse an existing locations file as an ordered map, for merging.
pub fn parse_location_map(json: &str) -> Result<Map<String, Value>> {
    Ok(serde_json::from_str(json)?)
}

/// Recount `locations` from `rows`.
///
/// Every existing `count` and every `org names` tally is zeroed first, then
/// each row adds one to its address and, when it names one, its
/// institution. Existing records keep their other fields and their order;
/// unseen addresses are appended.
pub fn scan_acquisitions<I>(locations: &mut Map<String, Value>, rows: I) -> ScanReport
where
    I: IntoIterator<Item = AcquisitionRow>,
{
    for record in locations.values_mut() {
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        obj.insert("count".into(), Value::from(0u64));
        if let Some(orgs) = obj.get_mut("org names").and_then(Value::as_object_mut) {
            for tally in orgs.values_mut() {
                *tally = Value::from(0u64);
            }
        }
    }

    let mut report = ScanReport::default();
    for row in rows {
        report.rows += 1;
        if row.address.is_empty() {
            report.blank += 1;
            continue;
        }
        let record = locations.entry(row.address.clone()).or_insert_with(|| {
            report.new_locations += 1;
            log::info!("[scan] new location {:?}", row.address);
            Value::Object(Map::new())
        });
        if !record.is_object() {
            log::warn!("[scan] replacing malformed record {:?}", row.address);
            *record = Value::Object(Map::new());
        }
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        increment(obj, "count");
        if let Some(institution) = &row.institution {
            let orgs = obj
                .entry("org names")
                .or_insert_with(|| Value::Object(Map::new()));
            if !orgs.is_object() {
                *orgs = Value::Object(Map::new());
            }
            if let Some(orgs) = orgs.as_object_mut() {
                increment(orgs, institution);
            }
        }
        report.counted += 1;
    }
    report
}

fn increment(map: &mut Map<String, Value>, key: &str) {
    let n = map.get(key).and_then(Value::as_u64).unwrap_or(0);
    map.insert(key.to_string(), Value::from(n + 1));
}
