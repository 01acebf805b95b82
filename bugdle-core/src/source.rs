use std::fmt;

use chrono::{Datelike, NaiveDate};

pub const PUZZLE_TODAY_PATH: &str = "puzzle";
pub const PUZZLE_RANDOM_PATH: &str = "puzzle/random";
pub const PUZZLE_DATE_PATH: &str = "puzzle/date";
pub const SUBMIT_PATH: &str = "submit";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day a historical puzzle is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    pub fn parse(value: &str) -> Result<Self, DateError> {
        let v = value.trim();
        // chrono accepts unpadded fields; the backend route does not.
        if v.len() != 10 {
            return Err(DateError::Malformed(value.to_string()));
        }
        NaiveDate::parse_from_str(v, DATE_FORMAT)
            .map(PuzzleDate)
            .map_err(|_| DateError::Malformed(value.to_string()))
    }

    /// Build from calendar fields; `month` and `day` are 1-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(PuzzleDate)
            .ok_or(DateError::OutOfRange { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for PuzzleDate {
    type Err = DateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Malformed(String),
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Malformed(v) => write!(f, "expected a YYYY-MM-DD date, got '{v}'"),
            DateError::OutOfRange { year, month, day } => {
                write!(f, "no such calendar day {year}-{month}-{day}")
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Which of the three puzzle endpoints to read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleSource {
    Today,
    Random,
    Date(PuzzleDate),
}

impl PuzzleSource {
    /// Source for a date picker change; an empty selection loads nothing.
    pub fn from_selection(dates: &[PuzzleDate]) -> Option<Self> {
        dates.first().copied().map(PuzzleSource::Date)
    }

    /// Endpoint path relative to the API base, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            PuzzleSource::Today => PUZZLE_TODAY_PATH.to_string(),
            PuzzleSource::Random => PUZZLE_RANDOM_PATH.to_string(),
            PuzzleSource::Date(d) => format!("{PUZZLE_DATE_PATH}/{d}"),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path())
    }
}

impl fmt::Display for PuzzleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleSource::Today => f.write_str("today"),
            PuzzleSource::Random => f.write_str("random"),
            PuzzleSource::Date(d) => d.fmt(f),
        }
    }
}

pub fn submit_url(base_url: &str) -> String {
    join_url(base_url, SUBMIT_PATH)
}

/// Join an API base (absolute or root-relative) and an endpoint path.
/// An empty base behaves like `/`.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim();
    let base = if base.is_empty() { "/" } else { base };
    let path = path.trim().trim_start_matches('/');
    if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trips_through_backend_format() {
        let d = PuzzleDate::parse("2024-01-05").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 5));
        assert_eq!(d.to_string(), "2024-01-05");
        assert_eq!(PuzzleDate::from_ymd(2024, 1, 5).unwrap(), d);
    }

    #[test]
    fn date_rejects_bad_input() {
        assert!(matches!(
            PuzzleDate::parse("2024-1-5"),
            Err(DateError::Malformed(_))
        ));
        assert!(PuzzleDate::parse("2024-02-30").is_err());
        assert!(PuzzleDate::parse("yesterday").is_err());
        assert_eq!(
            PuzzleDate::from_ymd(2023, 2, 29),
            Err(DateError::OutOfRange {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn source_urls() {
        let date = PuzzleDate::parse("2024-01-05").unwrap();
        assert_eq!(PuzzleSource::Today.url("/"), "/puzzle");
        assert_eq!(PuzzleSource::Random.url("/"), "/puzzle/random");
        assert_eq!(PuzzleSource::Date(date).url("/"), "/puzzle/date/2024-01-05");
        assert_eq!(
            PuzzleSource::Date(date).url("https://bugdle.example/api"),
            "https://bugdle.example/api/puzzle/date/2024-01-05"
        );
        assert_eq!(submit_url(""), "/submit");
        assert_eq!(submit_url("/app/"), "/app/submit");
    }

    #[test]
    fn picking_a_date_targets_the_date_endpoint() {
        let picked = [PuzzleDate::parse("2024-01-05").unwrap()];
        let source = PuzzleSource::from_selection(&picked).unwrap();
        assert_eq!(source.url("/"), "/puzzle/date/2024-01-05");
        assert_eq!(PuzzleSource::from_selection(&[]), None);
    }
}
