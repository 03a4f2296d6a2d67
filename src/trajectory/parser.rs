use super::errors::TrajectoryErrors;
use crate::models::TrajectoryRecord;

/// Column names in the order fixed by the archive's format sheet.
const COLUMNS: [&str; 8] = [
    "year", "fdoy", "srange", "seclat", "seclon", "prange", "peqlat", "peqlon",
];

/// Parses the whitespace-delimited trajectory table into records.
///
/// Blank lines are skipped; everything else must carry exactly the eight
/// documented columns. The first bad row aborts the whole parse, since a
/// partially reconstructed time series would be misleading.
pub fn parse_table(data: &[u8]) -> Result<Vec<TrajectoryRecord>, TrajectoryErrors> {
    let text = std::str::from_utf8(data)
        .map_err(|e| TrajectoryErrors::MalformedTable(format!("not valid UTF-8: {}", e)))?;

    let mut records = Vec::new();
    let mut row = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(row, line)?);
        row += 1;
    }
    Ok(records)
}

fn parse_row(row: usize, line: &str) -> Result<TrajectoryRecord, TrajectoryErrors> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != COLUMNS.len() {
        return Err(TrajectoryErrors::MalformedRow(
            row,
            format!("expected {} columns, found {}", COLUMNS.len(), fields.len()),
        ));
    }

    let mut values = [0.0_f64; 8];
    for (i, field) in fields.iter().enumerate() {
        values[i] = field.parse::<f64>().map_err(|_| {
            TrajectoryErrors::MalformedRow(
                row,
                format!("column '{}' is not numeric: '{}'", COLUMNS[i], field),
            )
        })?;
    }

    // The archive stores every column as a real, the year included; it is
    // truncated toward zero to recover the calendar year.
    let year = values[0].trunc();
    if year < i32::MIN as f64 || year > i32::MAX as f64 {
        return Err(TrajectoryErrors::YearOutOfRange(row, year));
    }

    Ok(TrajectoryRecord {
        year: year as i32,
        fdoy: values[1],
        srange: values[2],
        seclat: values[3],
        seclon: values[4],
        prange: values[5],
        peqlat: values[6],
        peqlon: values[7],
    })
}
