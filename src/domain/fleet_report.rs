use std::collections::HashMap;

use thiserror::Error;

use crate::domain::models::{InvalidInterval, Report};

pub const STATIONS_HEADER: &str = "[Stations]";
pub const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Validated in-memory model of one input file: which chargers belong to
/// which station, the inverse ownership index, and every availability
/// report grouped by charger. Only `parse_fleet_report` builds one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FleetReport {
    station_to_chargers: HashMap<u32, Vec<u32>>,
    charger_to_station: HashMap<u32, u32>,
    charger_reports: HashMap<u32, Vec<Report>>,
}

impl FleetReport {
    pub fn station_to_chargers(&self) -> &HashMap<u32, Vec<u32>> {
        &self.station_to_chargers
    }

    pub fn charger_reports(&self) -> &HashMap<u32, Vec<Report>> {
        &self.charger_reports
    }

    pub fn station_of(&self, charger_id: u32) -> Option<u32> {
        self.charger_to_station.get(&charger_id).copied()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("section header {0} is repeated or out of order")]
    MisplacedHeader(&'static str),
    #[error("data line before any section header")]
    DataBeforeHeader,
    #[error("station line must name a station id and at least one charger id")]
    StationWithoutChargers,
    #[error("station {0} is declared more than once")]
    DuplicateStation(u32),
    #[error("charger {0} is assigned to more than one station")]
    ChargerReassigned(u32),
    #[error("report line must contain charger id, start, end and availability flag")]
    MalformedReportLine,
    #[error("invalid unsigned integer: {0:?}")]
    InvalidInteger(String),
    #[error("invalid availability flag: {0:?}")]
    InvalidAvailability(String),
    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),
    #[error("report references undeclared charger {0}")]
    UnknownCharger(u32),
    #[error("input declares no stations")]
    NoStations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    BeforeStations,
    Stations,
    Reports,
}

pub fn parse_fleet_report(input: &str) -> Result<FleetReport, ParseError> {
    let mut fleet = FleetReport::default();
    let mut state = ParseState::BeforeStations;

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            STATIONS_HEADER => {
                if state != ParseState::BeforeStations {
                    return Err(ParseError::MisplacedHeader(STATIONS_HEADER));
                }
                state = ParseState::Stations;
                continue;
            }
            REPORTS_HEADER => {
                if state != ParseState::Stations {
                    return Err(ParseError::MisplacedHeader(REPORTS_HEADER));
                }
                state = ParseState::Reports;
                continue;
            }
            _ => {}
        }

        match state {
            ParseState::BeforeStations => return Err(ParseError::DataBeforeHeader),
            ParseState::Stations => parse_station_line(line, &mut fleet)?,
            ParseState::Reports => parse_report_line(line, &mut fleet)?,
        }
    }

    if fleet.station_to_chargers.is_empty() {
        return Err(ParseError::NoStations);
    }

    Ok(fleet)
}

fn parse_station_line(line: &str, fleet: &mut FleetReport) -> Result<(), ParseError> {
    let mut tokens = line.split_whitespace();
    let station_token = tokens.next().ok_or(ParseError::StationWithoutChargers)?;
    let station_id = parse_u32(station_token)?;

    if fleet.station_to_chargers.contains_key(&station_id) {
        return Err(ParseError::DuplicateStation(station_id));
    }

    let mut chargers = Vec::new();
    for token in tokens {
        let charger_id = parse_u32(token)?;
        if fleet.charger_to_station.contains_key(&charger_id) {
            return Err(ParseError::ChargerReassigned(charger_id));
        }
        fleet.charger_to_station.insert(charger_id, station_id);
        chargers.push(charger_id);
    }

    if chargers.is_empty() {
        return Err(ParseError::StationWithoutChargers);
    }

    fleet.station_to_chargers.insert(station_id, chargers);
    Ok(())
}

fn parse_report_line(line: &str, fleet: &mut FleetReport) -> Result<(), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [charger_token, start_token, end_token, up_token] = tokens.as_slice() else {
        return Err(ParseError::MalformedReportLine);
    };

    let charger_id = parse_u32(charger_token)?;
    let start = parse_u64(start_token)?;
    let end = parse_u64(end_token)?;
    let up = parse_availability(up_token)?;

    if !fleet.charger_to_station.contains_key(&charger_id) {
        return Err(ParseError::UnknownCharger(charger_id));
    }

    let report = Report::new(start, end, up)?;
    fleet
        .charger_reports
        .entry(charger_id)
        .or_default()
        .push(report);
    Ok(())
}

fn parse_u32(token: &str) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

fn parse_u64(token: &str) -> Result<u64, ParseError> {
    token
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

fn parse_availability(token: &str) -> Result<bool, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidAvailability(token.to_string())),
    }
}
