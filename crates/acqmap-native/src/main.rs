use acqmap_core::dataset::{parse_locations, reformat, ReformatOptions};
use acqmap_core::scan::{
    parse_location_map, scan_acquisitions, SheetColumns, DEFAULT_INSTITUTION_HEADER, SHEET_SUFFIX,
};
use acqmap_core::sources::parse_feature_collection;
use acqmap_core::MagnitudeRadius;
use anyhow::{anyhow, Context};
use calamine::{open_workbook_auto, Reader};
use clap::{Parser, Subcommand};
use serde_json::Map;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "acqmap", about = "Prepare and check the bundled acquisitions dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recount acquisitions and institutions per address from the
    /// acquisitions spreadsheet into a locations file.
    Scan {
        workbook: PathBuf,
        locations: PathBuf,
        /// Sheet to read; defaults to the first one named "... Acq xlsx".
        #[arg(long)]
        sheet: Option<String>,
        #[arg(long, default_value = DEFAULT_INSTITUTION_HEADER)]
        institution_column: String,
    },
    /// Turn a geocoded locations file into a GeoJSON feature collection.
    Reformat {
        locations: PathBuf,
        output: PathBuf,
        /// Include institution names as tooltip content.
        #[arg(long)]
        with_popups: bool,
    },
    /// Summarise a feature collection as the globe would draw it.
    Inspect {
        collection: PathBuf,
        #[arg(long, default_value_t = 10.0)]
        marker_size: f64,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Scan {
            workbook,
            locations,
            sheet,
            institution_column,
        } => scan(&workbook, &locations, sheet, &institution_column)?,
        Command::Reformat {
            locations,
            output,
            with_popups,
        } => {
            let text = fs::read_to_string(&locations)
                .with_context(|| format!("reading {}", locations.display()))?;
            let records = parse_locations(&text)
                .with_context(|| format!("parsing {}", locations.display()))?;
            let (fc, report) = reformat(&records, ReformatOptions { with_popups });
            let json = serde_json::to_string(&fc)?;
            fs::write(&output, json).with_context(|| format!("writing {}", output.display()))?;
            log::info!(
                "[reformat] records={} written={} skipped={} -> {}",
                report.records,
                report.written,
                report.skipped,
                output.display()
            );
        }
        Command::Inspect {
            collection,
            marker_size,
        } => {
            let text = fs::read_to_string(&collection)
                .with_context(|| format!("reading {}", collection.display()))?;
            let fc = parse_feature_collection(&text)
                .with_context(|| format!("parsing {}", collection.display()))?;
            let mapper = MagnitudeRadius::new(marker_size);
            let mut mag_range: Option<(f64, f64)> = None;
            let mut radius_range: Option<(f64, f64)> = None;
            let mut invisible = 0usize;
            for f in &fc.features {
                let r = mapper.feature_radius(f);
                if r <= 0.0 {
                    invisible += 1;
                    log::warn!(
                        "[inspect] {} maps to radius 0 (mag={:?})",
                        f.place().unwrap_or("<unnamed>"),
                        f.magnitude()
                    );
                }
                radius_range = Some(widen(radius_range, r));
                if let Some(m) = f.magnitude() {
                    mag_range = Some(widen(mag_range, m));
                }
            }
            log::info!(
                "[inspect] features={} mag={:?} radius={:?} zero_radius={}",
                fc.len(),
                mag_range,
                radius_range,
                invisible
            );
        }
    }
    Ok(())
}

fn scan(
    workbook: &Path,
    locations: &Path,
    sheet: Option<String>,
    institution_column: &str,
) -> anyhow::Result<()> {
    let mut book = open_workbook_auto(workbook)
        .with_context(|| format!("opening {}", workbook.display()))?;
    let name = match sheet {
        Some(name) => name,
        None => book
            .sheet_names()
            .into_iter()
            .find(|n| n.ends_with(SHEET_SUFFIX))
            .ok_or_else(|| anyhow!("no sheet ending in {:?} in {}", SHEET_SUFFIX, workbook.display()))?,
    };
    let range = book
        .worksheet_range(&name)
        .with_context(|| format!("reading sheet {:?}", name))?;
    let mut rows = range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect::<Vec<String>>());
    let header = rows
        .next()
        .ok_or_else(|| anyhow!("sheet {:?} is empty", name))?;
    let columns = SheetColumns::from_header(&header, institution_column)?;

    let mut records = if locations.exists() {
        let text = fs::read_to_string(locations)
            .with_context(|| format!("reading {}", locations.display()))?;
        parse_location_map(&text).with_context(|| format!("parsing {}", locations.display()))?
    } else {
        log::info!("[scan] starting a new {}", locations.display());
        Map::new()
    };
    let report = scan_acquisitions(&mut records, rows.map(|cells| columns.row(cells.as_slice())));
    let json = serde_json::to_string(&records)?;
    fs::write(locations, json).with_context(|| format!("writing {}", locations.display()))?;
    log::info!(
        "[scan] sheet={:?} rows={} counted={} blank={} new={} -> {}",
        name,
        report.rows,
        report.counted,
        report.blank,
        report.new_locations,
        locations.display()
    );
    Ok(())
}

fn widen(range: Option<(f64, f64)>, v: f64) -> (f64, f64) {
    match range {
        Some((lo, hi)) => (lo.min(v), hi.max(v)),
        None => (v, v),
    }
}
