use thiserror::Error;

/// One availability record for a single charger: the charger was either
/// operational or not throughout `[start, end]` (nanosecond timestamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    start: u64,
    end: u64,
    up: bool,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("report interval ends at {end} before it starts at {start}")]
pub struct InvalidInterval {
    pub start: u64,
    pub end: u64,
}

impl Report {
    pub fn new(start: u64, end: u64, up: bool) -> Result<Self, InvalidInterval> {
        if end < start {
            return Err(InvalidInterval { start, end });
        }
        Ok(Self { start, end, up })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_up(&self) -> bool {
        self.up
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationResult {
    pub station_id: u32,
    pub uptime_pct: u64,
}

/// floor(100 * total_up / total_window), widened to u128 so the
/// multiplication cannot overflow near the top of the u64 range.
pub fn floor_percentage(total_up: u64, total_window: u64) -> u64 {
    if total_window == 0 {
        return 0;
    }
    (u128::from(total_up) * 100 / u128::from(total_window)) as u64
}

#[cfg(test)]
mod tests {
    use super::{InvalidInterval, Report, floor_percentage};

    #[test]
    fn accepts_ordered_and_zero_length_intervals() {
        let report = Report::new(10, 20, true).expect("ordered interval must be valid");
        assert_eq!(report.start(), 10);
        assert_eq!(report.end(), 20);
        assert!(report.is_up());

        let instant = Report::new(5, 5, false).expect("zero-length interval must be valid");
        assert_eq!(instant.start(), instant.end());
        assert!(!instant.is_up());
    }

    #[test]
    fn rejects_reversed_interval() {
        let result = Report::new(20, 10, true);
        assert_eq!(result, Err(InvalidInterval { start: 20, end: 10 }));
    }

    #[test]
    fn computes_exact_floor_percentage() {
        assert_eq!(floor_percentage(50, 200), 25);
        assert_eq!(floor_percentage(1, 3), 33);
        assert_eq!(floor_percentage(2, 3), 66);
        assert_eq!(floor_percentage(0, 100), 0);
        assert_eq!(floor_percentage(100, 100), 100);
    }

    #[test]
    fn zero_window_yields_zero() {
        assert_eq!(floor_percentage(0, 0), 0);
        assert_eq!(floor_percentage(42, 0), 0);
    }

    #[test]
    fn survives_u64_scale_inputs_without_overflow() {
        assert_eq!(floor_percentage(u64::MAX, u64::MAX), 100);
        assert_eq!(floor_percentage(u64::MAX / 2, u64::MAX), 49);
        assert_eq!(floor_percentage(u64::MAX - 1, u64::MAX), 99);
    }
}
