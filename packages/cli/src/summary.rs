//! Dataset summary subcommand.
//!
//! Prints the dashboard-style breakdowns: crashes by county, by collision
//! impact type, and work-zone / motorcycle / unrestrained-occupant
//! involvement, with an optional county filter.

use std::path::Path;

use route_risk_dataset::{CrashDataset, summary};

/// Loads the dataset and prints summary tables, optionally restricted to a
/// comma-separated list of counties.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
pub fn run(data_path: &Path, counties: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut dataset = CrashDataset::from_csv_path(data_path)?;

    if let Some(counties) = counties {
        let selected: Vec<String> = counties
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        dataset = dataset.filter_counties(&selected);
        println!("Crash summary for {}:", selected.join(", "));
    } else {
        println!("Crash summary (all counties):");
    }

    println!("  {} records", dataset.len());
    println!();

    println!("Crashes by county");
    for row in summary::crashes_by_county(dataset.records()) {
        println!("  {:<30} {}", row.label, row.count);
    }
    println!();

    println!("Crashes by impact type");
    for row in summary::crashes_by_impact_type(dataset.records()) {
        println!("  {:<30} {}", row.label, row.count);
    }
    println!();

    let work_zone = summary::work_zone_involvement(dataset.records());
    println!(
        "Work zone crashes:          {} yes / {} no",
        work_zone.involved, work_zone.not_involved
    );

    let motorcycle = summary::motorcycle_involvement(dataset.records());
    println!(
        "Motorcycle crashes:         {} yes / {} no",
        motorcycle.involved, motorcycle.not_involved
    );

    let unrestrained = summary::unrestrained_involvement(dataset.records());
    println!(
        "Unrestrained occupants:     {} yes / {} no",
        unrestrained.involved, unrestrained.not_involved
    );

    Ok(())
}
