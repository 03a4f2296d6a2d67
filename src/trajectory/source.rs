use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;

use super::errors::TrajectoryErrors;
use super::parser;
use super::timestamp;
use crate::models::TimestampedRecord;

const CACHE_DURATION_HOURS: i64 = 24 * 30;
const CACHE_FILE: &str = "p10trjjup.asc";
const SPDF_URL: &str =
    "https://spdf.gsfc.nasa.gov/pub/data/pioneer/pioneer10/traj/jupiter/p10trjjup.asc";

lazy_static! {
    static ref SPDF_SOURCE: Mutex<SpdfSource> = Mutex::new(SpdfSource::new());
}

/// A supplier of raw trajectory table bytes.
///
/// Implementations own the acquisition failure modes (network, disk); the
/// parsing and timestamp reconstruction downstream treat an unreadable table
/// as a precondition failure.
pub trait TrajectorySource {
    fn fetch_table(&mut self) -> Result<Vec<u8>, TrajectoryErrors>;
}

/// An in-memory table, for fixtures and headless batch runs.
pub struct StaticSource {
    data: Vec<u8>,
}

impl StaticSource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl TrajectorySource for StaticSource {
    fn fetch_table(&mut self) -> Result<Vec<u8>, TrajectoryErrors> {
        Ok(self.data.clone())
    }
}

/// Supplies the Pioneer 10 Jupiter-encounter table from the NASA SPDF
/// archive, preferring the copy embedded at compile time, then the on-disk
/// cache, then the network.
pub struct SpdfSource {
    cache_path: PathBuf,
    last_update: Option<DateTime<Utc>>,
}

impl SpdfSource {
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("astrotraj");
        fs::create_dir_all(&cache_dir).unwrap_or_default();

        Self {
            cache_path: cache_dir.join(CACHE_FILE),
            last_update: None,
        }
    }

    /// The table downloaded at compile time. Empty when the build had no
    /// network access.
    fn embedded_table() -> &'static [u8] {
        include_bytes!(concat!(env!("OUT_DIR"), "/p10trjjup.asc"))
    }

    /// Downloads the table into the on-disk cache.
    fn download_table(&self) -> Result<(), TrajectoryErrors> {
        println!("Downloading trajectory data from {}", SPDF_URL);
        let client = reqwest::blocking::Client::new();
        let response = client.get(SPDF_URL).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(TrajectoryErrors::HttpStatus(status));
        }

        fs::write(&self.cache_path, response.bytes()?)?;
        Ok(())
    }

    fn update_cache_if_needed(&mut self) -> Result<Vec<u8>, TrajectoryErrors> {
        let should_update = match self.last_update {
            None => !self.cache_path.exists(),
            Some(last_update) => Utc::now() - last_update > Duration::hours(CACHE_DURATION_HOURS),
        };

        if should_update {
            println!("Updating trajectory data cache...");
            self.download_table()?;
            self.last_update = Some(Utc::now());
        }

        let data = fs::read(&self.cache_path)?;
        if data.is_empty() {
            return Err(TrajectoryErrors::MissingData);
        }
        Ok(data)
    }
}

impl TrajectorySource for SpdfSource {
    fn fetch_table(&mut self) -> Result<Vec<u8>, TrajectoryErrors> {
        let embedded = Self::embedded_table();
        if !embedded.is_empty() {
            return Ok(embedded.to_vec());
        }
        self.update_cache_if_needed()
    }
}

/// Loads a trajectory table from any source and reconstructs the epoch of
/// every record. A source that yields no records at all is reported as
/// missing data.
pub fn load_trajectory<S: TrajectorySource>(
    source: &mut S,
) -> Result<Vec<TimestampedRecord>, TrajectoryErrors> {
    let data = source.fetch_table()?;
    let records = parser::parse_table(&data)?;
    if records.is_empty() {
        return Err(TrajectoryErrors::MissingData);
    }
    timestamp::with_timestamps(records)
}

/// Loads the Pioneer 10 Jupiter-encounter trajectory from the default
/// SPDF-backed source.
pub fn load_default_trajectory() -> Result<Vec<TimestampedRecord>, TrajectoryErrors> {
    let mut source = SPDF_SOURCE.lock().unwrap();
    load_trajectory(&mut *source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hifitime::Epoch;

    #[test]
    fn loads_and_timestamps_a_static_table() {
        let mut source = StaticSource::new(
            b"1973 309.5 5.023 -1.33 100.38 1127.2 10.52 201.44\n".to_vec(),
        );
        let records = load_trajectory(&mut source).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].epoch,
            Epoch::from_gregorian_tai(1973, 11, 6, 12, 0, 0, 0)
        );
        assert_eq!(records[0].record.srange, 5.023);
    }

    #[test]
    fn empty_table_is_missing_data() {
        let mut source = StaticSource::new(Vec::new());
        let err = load_trajectory(&mut source).unwrap_err();
        assert!(matches!(err, TrajectoryErrors::MissingData));
    }
}
