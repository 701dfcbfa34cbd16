use std::collections::HashMap;

use thiserror::Error;

use crate::domain::fleet_report::FleetReport;
use crate::domain::models::{Report, StationResult, floor_percentage};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UptimeError {
    #[error("station {0} has chargers but no availability reports")]
    NoReports(u32),
}

/// Computes every station's uptime, ascending by station id. The first
/// station that fails aborts the whole batch.
pub fn all_station_uptimes(fleet: &FleetReport) -> Result<Vec<StationResult>, UptimeError> {
    let mut station_ids: Vec<u32> = fleet.station_to_chargers().keys().copied().collect();
    station_ids.sort_unstable();

    let mut results = Vec::with_capacity(station_ids.len());
    for station_id in station_ids {
        let chargers = &fleet.station_to_chargers()[&station_id];
        let uptime_pct = station_uptime(station_id, chargers, fleet.charger_reports())?;
        results.push(StationResult {
            station_id,
            uptime_pct,
        });
    }

    Ok(results)
}

/// Uptime percentage for one station.
///
/// The observation window is the bounding range of every report (up or
/// down) across the station's chargers. Up-intervals are pooled across
/// chargers, sorted by (start, end) and merged in one sweep; touching
/// intervals count as one contiguous span.
pub fn station_uptime(
    station_id: u32,
    chargers: &[u32],
    charger_reports: &HashMap<u32, Vec<Report>>,
) -> Result<u64, UptimeError> {
    let mut window: Option<(u64, u64)> = None;
    let mut up_intervals: Vec<(u64, u64)> = Vec::new();

    for charger_id in chargers {
        let Some(reports) = charger_reports.get(charger_id) else {
            continue;
        };
        for report in reports {
            window = Some(match window {
                None => (report.start(), report.end()),
                Some((min_start, max_end)) => (
                    min_start.min(report.start()),
                    max_end.max(report.end()),
                ),
            });
            if report.is_up() {
                up_intervals.push((report.start(), report.end()));
            }
        }
    }

    let Some((min_start, max_end)) = window else {
        return Err(UptimeError::NoReports(station_id));
    };

    let total_window = max_end - min_start;
    if total_window == 0 || up_intervals.is_empty() {
        return Ok(0);
    }

    up_intervals.sort_unstable();

    let (mut current_start, mut current_end) = up_intervals[0];
    let mut total_up = 0_u64;

    for &(start, end) in &up_intervals[1..] {
        if start <= current_end {
            current_end = current_end.max(end);
        } else {
            total_up += current_end - current_start;
            current_start = start;
            current_end = end;
        }
    }
    total_up += current_end - current_start;

    Ok(floor_percentage(total_up, total_window).min(100))
}
