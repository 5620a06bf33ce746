//! Summary tabulations over the crash dataset.
//!
//! These back the dashboard-style breakdowns: crashes by county, by
//! collision impact type, and involvement counts for work zones,
//! motorcycles, and unrestrained occupants.

use std::collections::BTreeMap;

use route_risk_crash_models::CrashRecord;

/// A labelled count in a summary table, sorted by descending count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    /// Group label (county name, impact description, ...).
    pub label: String,
    /// Number of crashes in the group.
    pub count: u64,
}

/// Yes/no involvement counts for a boolean crash attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Involvement {
    /// Crashes where the attribute applies.
    pub involved: u64,
    /// Crashes where it does not.
    pub not_involved: u64,
}

/// Crash counts grouped by county. Records without a county are grouped
/// under `"Unknown"`.
#[must_use]
pub fn crashes_by_county(records: &[CrashRecord]) -> Vec<CountRow> {
    count_by(records, |r| {
        r.county.clone().unwrap_or_else(|| "Unknown".to_string())
    })
}

/// Crash counts grouped by collision impact description.
#[must_use]
pub fn crashes_by_impact_type(records: &[CrashRecord]) -> Vec<CountRow> {
    count_by(records, |r| {
        r.impact_type
            .clone()
            .unwrap_or_else(|| "Unknown".to_string())
    })
}

/// Work-zone crash involvement counts.
#[must_use]
pub fn work_zone_involvement(records: &[CrashRecord]) -> Involvement {
    involvement(records, |r| r.work_zone)
}

/// Motorcycle crash involvement counts.
#[must_use]
pub fn motorcycle_involvement(records: &[CrashRecord]) -> Involvement {
    involvement(records, |r| r.motorcycle)
}

/// Unrestrained-occupant involvement counts.
#[must_use]
pub fn unrestrained_involvement(records: &[CrashRecord]) -> Involvement {
    involvement(records, |r| r.unrestrained_occupants)
}

fn count_by(records: &[CrashRecord], key: impl Fn(&CrashRecord) -> String) -> Vec<CountRow> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    let mut rows: Vec<CountRow> = counts
        .into_iter()
        .map(|(label, count)| CountRow { label, count })
        .collect();
    // BTreeMap gives a stable label order; sort by count on top of it.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn involvement(records: &[CrashRecord], flag: impl Fn(&CrashRecord) -> bool) -> Involvement {
    let involved = records.iter().filter(|r| flag(r)).count() as u64;
    Involvement {
        involved,
        not_involved: records.len() as u64 - involved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_risk_crash_models::CrashSeverity;

    fn record(county: Option<&str>, impact: Option<&str>, work_zone: bool) -> CrashRecord {
        CrashRecord {
            latitude: 36.0,
            longitude: -86.0,
            crash_hour: 12,
            severity: CrashSeverity::Other,
            work_zone,
            motorcycle: false,
            unrestrained_occupants: false,
            county: county.map(String::from),
            impact_type: impact.map(String::from),
        }
    }

    #[test]
    fn counts_by_county_descending() {
        let records = vec![
            record(Some("DAVIDSON"), None, false),
            record(Some("DAVIDSON"), None, false),
            record(Some("SHELBY"), None, false),
            record(None, None, false),
        ];
        let rows = crashes_by_county(&records);
        assert_eq!(rows[0].label, "DAVIDSON");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|r| r.label == "Unknown" && r.count == 1));
    }

    #[test]
    fn counts_by_impact_type() {
        let records = vec![
            record(None, Some("Rear End"), false),
            record(None, Some("Rear End"), false),
            record(None, Some("Angle"), false),
        ];
        let rows = crashes_by_impact_type(&records);
        assert_eq!(rows[0].label, "Rear End");
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn involvement_counts() {
        let records = vec![
            record(None, None, true),
            record(None, None, false),
            record(None, None, false),
        ];
        let wz = work_zone_involvement(&records);
        assert_eq!(wz.involved, 1);
        assert_eq!(wz.not_involved, 2);
    }

    #[test]
    fn motorcycle_involvement_counts() {
        let mut records = vec![
            record(None, None, false),
            record(None, None, false),
            record(None, None, false),
        ];
        records[0].motorcycle = true;
        records[2].motorcycle = true;

        let mc = motorcycle_involvement(&records);
        assert_eq!(mc.involved, 2);
        assert_eq!(mc.not_involved, 1);
    }
}
