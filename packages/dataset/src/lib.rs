#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Historical crash dataset loader.
//!
//! Loads the static crash CSV once per session into an in-memory,
//! read-only table of [`CrashRecord`]s. Rows missing coordinates or a
//! valid crash hour are skipped with a warning rather than failing the
//! load, since state crash exports routinely contain partial rows.

pub mod summary;

use std::io::Read;
use std::path::Path;

use route_risk_crash_models::{CrashRecord, CrashSeverity};
use serde::Deserialize;
use thiserror::Error;

/// Errors from dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading the CSV file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed at the file level (e.g., malformed headers).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw CSV row, keyed by the source export's column headers.
///
/// All fields are optional at this layer; [`RawRecord::into_crash_record`]
/// decides which omissions disqualify a row.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
    #[serde(rename = "Crash Hour")]
    crash_hour: Option<u8>,
    #[serde(rename = "Crash Severity Description")]
    severity: Option<String>,
    #[serde(rename = "Work Zone Crash")]
    work_zone: Option<String>,
    #[serde(rename = "Motorcycle Crash")]
    motorcycle: Option<String>,
    #[serde(rename = "Unrestrained Occupants")]
    unrestrained_occupants: Option<String>,
    #[serde(rename = "Crash County Description")]
    county: Option<String>,
    #[serde(rename = "CollisionImpact Description")]
    impact_type: Option<String>,
}

impl RawRecord {
    /// Converts a raw row into a [`CrashRecord`], or `None` when the row
    /// lacks coordinates or a valid hour.
    fn into_crash_record(self) -> Option<CrashRecord> {
        let latitude = self.latitude?;
        let longitude = self.longitude?;
        let crash_hour = self.crash_hour.filter(|h| *h <= 23)?;

        Some(CrashRecord {
            latitude,
            longitude,
            crash_hour,
            severity: self
                .severity
                .as_deref()
                .map_or(CrashSeverity::Other, CrashSeverity::from_description),
            work_zone: self.work_zone.as_deref().is_some_and(parse_flag),
            motorcycle: self.motorcycle.as_deref().is_some_and(parse_flag),
            unrestrained_occupants: self
                .unrestrained_occupants
                .as_deref()
                .is_some_and(parse_flag),
            county: self.county.filter(|c| !c.is_empty()),
            impact_type: self.impact_type.filter(|i| !i.is_empty()),
        })
    }
}

/// Parses the dataset's boolean-ish flag encodings ("Yes", "Y", "1", ...).
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// The in-memory crash dataset.
///
/// Loaded once per session and treated as read-only afterwards; the risk
/// scorer receives the records as a borrowed slice.
#[derive(Debug, Clone, Default)]
pub struct CrashDataset {
    records: Vec<CrashRecord>,
}

impl CrashDataset {
    /// Loads the dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or the CSV is
    /// structurally malformed. Individually unusable rows are skipped with
    /// a warning.
    pub fn from_csv_path(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_csv_reader(file)?;
        log::info!(
            "Loaded {} crash records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads the dataset from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the CSV is structurally malformed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let mut records = Vec::new();
        let mut skipped: u64 = 0;

        for result in csv_reader.deserialize::<RawRecord>() {
            match result {
                Ok(raw) => match raw.into_crash_record() {
                    Some(record) => records.push(record),
                    None => skipped += 1,
                },
                Err(e) => {
                    log::warn!("Skipping unparseable crash row: {e}");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} crash rows without usable coordinates or hour");
        }

        Ok(Self { records })
    }

    /// The loaded records.
    #[must_use]
    pub fn records(&self) -> &[CrashRecord] {
        &self.records
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no usable rows were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct county names present in the dataset, sorted.
    #[must_use]
    pub fn counties(&self) -> Vec<String> {
        let mut counties: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.county.clone())
            .collect();
        counties.sort();
        counties.dedup();
        counties
    }

    /// Returns a dataset restricted to the given counties
    /// (case-insensitive).
    #[must_use]
    pub fn filter_counties(&self, counties: &[String]) -> Self {
        let wanted: Vec<String> = counties.iter().map(|c| c.to_lowercase()).collect();
        Self {
            records: self
                .records
                .iter()
                .filter(|r| {
                    r.county
                        .as_deref()
                        .is_some_and(|c| wanted.contains(&c.to_lowercase()))
                })
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Latitude,Longitude,Crash Hour,Crash Severity Description,Work Zone Crash,Motorcycle Crash,Unrestrained Occupants,Crash County Description,CollisionImpact Description
36.16,-86.78,21,Fatal Injury,Yes,No,No,DAVIDSON,Rear End
36.17,-86.77,9,Property Damage Only,No,Yes,Yes,DAVIDSON,Angle
35.15,-90.05,14,Suspected Minor Injury,No,No,No,SHELBY,Head On
,-86.78,12,Property Damage Only,No,No,No,DAVIDSON,Rear End
36.18,-86.76,25,Property Damage Only,No,No,No,DAVIDSON,Rear End
";

    fn sample() -> CrashDataset {
        CrashDataset::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn loads_usable_rows_and_skips_partial_ones() {
        let dataset = sample();
        // Missing latitude and hour 25 are skipped.
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records()[0];
        assert_eq!(first.crash_hour, 21);
        assert_eq!(first.severity, CrashSeverity::Fatal);
        assert!(first.work_zone);
        assert!(!first.motorcycle);
        assert!(!first.unrestrained_occupants);
        assert_eq!(first.county.as_deref(), Some("DAVIDSON"));
        assert_eq!(first.impact_type.as_deref(), Some("Rear End"));

        let second = &dataset.records()[1];
        assert!(second.motorcycle);
        assert!(second.unrestrained_occupants);
    }

    #[test]
    fn counties_are_distinct_and_sorted() {
        assert_eq!(sample().counties(), vec!["DAVIDSON", "SHELBY"]);
    }

    #[test]
    fn filters_by_county_case_insensitively() {
        let dataset = sample();
        let filtered = dataset.filter_counties(&["davidson".to_string()]);
        assert_eq!(filtered.len(), 2);
        assert!(
            filtered
                .records()
                .iter()
                .all(|r| r.county.as_deref() == Some("DAVIDSON"))
        );
    }

    #[test]
    fn parses_flag_variants() {
        assert!(parse_flag("Yes"));
        assert!(parse_flag(" y "));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("No"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("Unknown"));
    }
}
