use astrotraj::config::proxima::ProximaLink;
use astrotraj::coordinates::spherical;
use astrotraj::models::TimestampedRecord;
use astrotraj::radiation::link_budget;
use astrotraj::trajectory::source;
use csv::Writer;
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

/// One exported row: the raw table columns, the reconstructed epoch, and the
/// solar-ecliptic position resolved to Cartesian axes.
#[derive(Serialize)]
struct OutputRow {
    #[serde(rename = "Epoch (TAI)")]
    epoch: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Fractional DOY")]
    fdoy: f64,
    #[serde(rename = "Sun Range (AU)")]
    srange: f64,
    #[serde(rename = "SE Latitude (deg)")]
    seclat: f64,
    #[serde(rename = "SE Longitude (deg)")]
    seclon: f64,
    #[serde(rename = "Jupiter Range (Rj)")]
    prange: f64,
    #[serde(rename = "PE Latitude (deg)")]
    peqlat: f64,
    #[serde(rename = "PE Longitude (deg)")]
    peqlon: f64,
    #[serde(rename = "SE Position X (AU)")]
    se_x: f64,
    #[serde(rename = "SE Position Y (AU)")]
    se_y: f64,
    #[serde(rename = "SE Position Z (AU)")]
    se_z: f64,
}

fn output_row(record: &TimestampedRecord) -> OutputRow {
    let se = spherical::solar_ecliptic_position(&record.record);

    OutputRow {
        epoch: record.epoch.to_string(),
        year: record.record.year,
        fdoy: record.record.fdoy,
        srange: record.record.srange,
        seclat: record.record.seclat,
        seclon: record.record.seclon,
        prange: record.record.prange,
        peqlat: record.record.peqlat,
        peqlon: record.record.peqlon,
        se_x: se.x,
        se_y: se.y,
        se_z: se.z,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let records = source::load_default_trajectory()?;
    println!(
        "Loaded {} trajectory records spanning {} to {}",
        records.len(),
        records.first().map(|r| r.epoch.to_string()).unwrap_or_default(),
        records.last().map(|r| r.epoch.to_string()).unwrap_or_default(),
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("trajectory_data.csv"))?;
    let mut writer = Writer::from_writer(file);
    for record in &records {
        writer.serialize(output_row(record))?;
    }
    writer.flush()?;
    println!("Trajectory data has been written to output/trajectory_data.csv");

    // How strong would a transmitter at Proxima Centauri need to be?
    let transmit_power = link_budget::required_transmit_power(&ProximaLink)?;
    println!(
        "Transmitter power needs to be {:.6} Petawatts",
        link_budget::to_petawatts(transmit_power)
    );

    Ok(())
}
