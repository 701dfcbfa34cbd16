use std::fmt::Write as _;
use std::fs;

use crate::app::config::AppConfig;
use crate::app::error::AppError;
use crate::domain::fleet_report::parse_fleet_report;
use crate::domain::models::StationResult;
use crate::domain::uptime::all_station_uptimes;

pub fn run(config: AppConfig) -> Result<(), AppError> {
    let input = fs::read_to_string(&config.input_path).map_err(|source| AppError::ReadInput {
        path: config.input_path.clone(),
        source,
    })?;

    let rendered = evaluate(&input)?;

    // Results are rendered in full before anything is written, so a
    // failure never leaves partial output behind.
    print!("{rendered}");
    Ok(())
}

pub fn evaluate(input: &str) -> Result<String, AppError> {
    let fleet = parse_fleet_report(input)?;
    let results = all_station_uptimes(&fleet)?;

    tracing::info!(
        stations = results.len(),
        chargers = fleet.charger_reports().len(),
        "station uptimes computed"
    );

    Ok(render_results(&results))
}

fn render_results(results: &[StationResult]) -> String {
    let mut rendered = String::new();
    for result in results {
        let _ = writeln!(rendered, "{} {}", result.station_id, result.uptime_pct);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::{evaluate, run};
    use crate::app::config::AppConfig;
    use crate::app::error::AppError;
    use crate::domain::fleet_report::ParseError;
    use crate::domain::models::StationResult;
    use crate::domain::uptime::UptimeError;

    fn fixture(path: &str) -> String {
        format!(
            "{}/testdata/uptime/{path}",
            env!("CARGO_MANIFEST_DIR").replace("\\", "/")
        )
    }

    fn read_fixture(path: &str) -> String {
        std::fs::read_to_string(fixture(path)).expect("fixture should be readable")
    }

    #[test]
    fn renders_sorted_station_lines_for_typical_input() {
        let rendered = evaluate(&read_fixture("two_stations.txt")).expect("input should evaluate");

        assert_eq!(rendered, "0 100\n1 0\n");
    }

    #[test]
    fn renders_partial_uptime_with_floor_division() {
        let rendered = evaluate(&read_fixture("partial_uptime.txt")).expect("input should evaluate");

        assert_eq!(rendered, "2 75\n");
    }

    #[test]
    fn malformed_fixture_produces_no_output() {
        let result = evaluate(&read_fixture("shared_charger.txt"));

        match result {
            Err(AppError::Parse(ParseError::ChargerReassigned(1001))) => {}
            other => panic!("expected charger reassignment error, got {other:?}"),
        }
    }

    #[test]
    fn station_without_reports_aborts_evaluation() {
        let input = "[Stations]\n0 1\n[Charger Availability Reports]\n";

        let result = evaluate(input);

        match result {
            Err(AppError::Uptime(UptimeError::NoReports(0))) => {}
            other => panic!("expected missing-reports error, got {other:?}"),
        }
    }

    #[test]
    fn run_fails_for_unreadable_input_path() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let missing = dir.path().join("does-not-exist.txt");

        let result = run(AppConfig {
            input_path: missing.to_string_lossy().into_owned(),
        });

        match result {
            Err(AppError::ReadInput { path, .. }) => {
                assert_eq!(path, missing.to_string_lossy())
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn run_succeeds_for_file_written_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("input.txt");
        std::fs::write(
            &path,
            "[Stations]\n0 1\n[Charger Availability Reports]\n1 0 100 true\n",
        )
        .expect("input file should be written");

        run(AppConfig {
            input_path: path.to_string_lossy().into_owned(),
        })
        .expect("well-formed input should run");
    }

    #[test]
    fn render_has_no_trailing_formatting_beyond_newlines() {
        let rendered = super::render_results(&[
            StationResult {
                station_id: 1,
                uptime_pct: 50,
            },
            StationResult {
                station_id: 2,
                uptime_pct: 100,
            },
        ]);

        assert_eq!(rendered, "1 50\n2 100\n");
    }
}
