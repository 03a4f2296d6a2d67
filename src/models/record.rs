use hifitime::Epoch;

/// One row of the SPDF Pioneer 10 Jupiter-encounter trajectory table.
/// Column order is fixed by the archive's format sheet; the positional
/// fields pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRecord {
    pub year: i32,
    pub fdoy: f64,   // fractional day of year [days]
    pub srange: f64, // spacecraft-Sun range [AU]
    pub seclat: f64, // solar ecliptic latitude [deg]
    pub seclon: f64, // solar ecliptic longitude [deg]
    pub prange: f64, // spacecraft-Jupiter range [Jupiter radii]
    pub peqlat: f64, // planet equatorial latitude [deg]
    pub peqlon: f64, // planet equatorial longitude [deg]
}

/// A trajectory record augmented with its reconstructed absolute epoch.
/// The epoch is derived from `year` and `fdoy` once at load time and is
/// never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedRecord {
    pub record: TrajectoryRecord,
    pub epoch: Epoch,
}
