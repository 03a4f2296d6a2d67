use reqwest;
use std::{error::Error, fmt, io};

/// Failure of the epoch reconstruction for a single (year, fdoy) pair.
#[derive(Debug)]
pub enum TimestampError {
    InvalidFractionalDay(f64),
    YearOutOfRange(i32, hifitime::errors::Errors),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::InvalidFractionalDay(v) => write!(
                f,
                "fractional day of year must be finite and non-negative, got {}",
                v
            ),
            TimestampError::YearOutOfRange(year, e) => {
                write!(f, "year {} is not a representable calendar year: {}", year, e)
            }
        }
    }
}

impl Error for TimestampError {}

#[derive(Debug)]
pub enum TrajectoryErrors {
    IoError(std::io::Error),
    ReqwestError(reqwest::Error),
    HttpStatus(reqwest::StatusCode),
    MalformedTable(String),
    MalformedRow(usize, String),
    YearOutOfRange(usize, f64),
    Timestamp(usize, TimestampError),
    MissingData,
}

impl fmt::Display for TrajectoryErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryErrors::IoError(e) => write!(f, "I/O error: {}", e),
            TrajectoryErrors::ReqwestError(e) => write!(f, "Request error: {}", e),
            TrajectoryErrors::HttpStatus(s) => write!(f, "HTTP request failed: {}", s),
            TrajectoryErrors::MalformedTable(detail) => write!(f, "malformed table: {}", detail),
            TrajectoryErrors::MalformedRow(row, detail) => {
                write!(f, "malformed row {}: {}", row, detail)
            }
            TrajectoryErrors::YearOutOfRange(row, year) => write!(
                f,
                "row {}: year {} outside the representable calendar range",
                row, year
            ),
            TrajectoryErrors::Timestamp(row, e) => write!(f, "row {}: {}", row, e),
            TrajectoryErrors::MissingData => write!(f, "trajectory data is missing"),
        }
    }
}

impl Error for TrajectoryErrors {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for TrajectoryErrors {
    fn from(err: io::Error) -> Self {
        TrajectoryErrors::IoError(err)
    }
}

impl From<reqwest::Error> for TrajectoryErrors {
    fn from(err: reqwest::Error) -> Self {
        TrajectoryErrors::ReqwestError(err)
    }
}
