use hifitime::{Duration, Epoch};

use super::errors::{TimestampError, TrajectoryErrors};
use crate::constants::SECONDS_PER_DAY;
use crate::models::{TimestampedRecord, TrajectoryRecord};

/// Reconstructs the absolute epoch encoded by a (year, fractional
/// day-of-year) pair: midnight of January 1 of `year` plus `fdoy` days of
/// 86400 s each.
///
/// Epochs are built on the TAI Gregorian calendar, where every day of the
/// offset is exactly 86400 s long. Values of `fdoy` at or past the end of
/// the year roll over into the following year(s); the archive uses this to
/// continue a series across a year boundary.
pub fn reconstruct_epoch(year: i32, fdoy: f64) -> Result<Epoch, TimestampError> {
    if !fdoy.is_finite() || fdoy < 0.0 {
        return Err(TimestampError::InvalidFractionalDay(fdoy));
    }

    let start_of_year = Epoch::maybe_from_gregorian_tai(year, 1, 1, 0, 0, 0, 0)
        .map_err(|e| TimestampError::YearOutOfRange(year, e))?;

    Ok(start_of_year + Duration::from_seconds(SECONDS_PER_DAY * fdoy))
}

/// Maps a parsed record sequence to the same sequence augmented with the
/// reconstructed epoch. The first bad row aborts the whole batch.
pub fn with_timestamps(
    records: Vec<TrajectoryRecord>,
) -> Result<Vec<TimestampedRecord>, TrajectoryErrors> {
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            let epoch = reconstruct_epoch(record.year, record.fdoy)
                .map_err(|e| TrajectoryErrors::Timestamp(row, e))?;
            Ok(TimestampedRecord { record, epoch })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(1972; "leap year")]
    #[test_case(1973; "common year")]
    #[test_case(2024; "recent leap year")]
    fn zero_fdoy_is_january_first_midnight(year: i32) {
        let epoch = reconstruct_epoch(year, 0.0).unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_tai_at_midnight(year, 1, 1));
    }

    #[test_case(1973, 0.5; "half a day")]
    #[test_case(1973, 309.5; "late in the year")]
    #[test_case(1972, 60.25; "past the leap day")]
    #[test_case(1973, 400.0; "rolled into the next year")]
    fn linear_in_the_fractional_day_offset(year: i32, fdoy: f64) {
        let start = reconstruct_epoch(year, 0.0).unwrap();
        let epoch = reconstruct_epoch(year, fdoy).unwrap();
        assert_abs_diff_eq!(
            (epoch - start).to_seconds(),
            SECONDS_PER_DAY * fdoy,
            epsilon = 1e-3
        );
    }

    #[test]
    fn leap_year_rolls_over_after_366_days() {
        assert_eq!(
            reconstruct_epoch(2024, 366.0).unwrap(),
            reconstruct_epoch(2025, 0.0).unwrap()
        );
    }

    #[test]
    fn common_year_rolls_over_after_365_days() {
        assert_eq!(
            reconstruct_epoch(2023, 365.0).unwrap(),
            reconstruct_epoch(2024, 0.0).unwrap()
        );
    }

    #[test]
    fn mid_year_epoch_lands_on_the_expected_date() {
        // 1973-01-01 plus 309.5 days is 1973-11-06T12:00:00
        let epoch = reconstruct_epoch(1973, 309.5).unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_tai(1973, 11, 6, 12, 0, 0, 0));
    }

    #[test_case(-0.5; "negative")]
    #[test_case(f64::NAN; "not a number")]
    #[test_case(f64::INFINITY; "infinite")]
    fn rejects_invalid_fractional_days(fdoy: f64) {
        let err = reconstruct_epoch(1973, fdoy).unwrap_err();
        assert!(matches!(err, TimestampError::InvalidFractionalDay(_)));
    }

    #[test]
    fn batch_reconstruction_reports_the_offending_row() {
        let good = TrajectoryRecord {
            year: 1973,
            fdoy: 309.5,
            srange: 5.023,
            seclat: -1.33,
            seclon: 100.38,
            prange: 1127.2,
            peqlat: 10.52,
            peqlon: 201.44,
        };
        let bad = TrajectoryRecord {
            fdoy: -1.0,
            ..good.clone()
        };

        let err = with_timestamps(vec![good.clone(), bad, good]).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryErrors::Timestamp(1, TimestampError::InvalidFractionalDay(_))
        ));
    }
}
