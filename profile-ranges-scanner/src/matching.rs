use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use profile_ranges::{record, Delta, RangeTable};

use crate::ScanError;

/// The values found for one range in one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeMatch {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl RangeMatch {
    pub fn delta(&self) -> Delta {
        Delta::between(self.start, self.end)
    }
}

/// Matches the lines of a measurement file against every range of `ranges`.
///
/// The result holds one [RangeMatch] per range, in table order. When several lines contain the
/// same marker the last of them wins. A line can resolve the start and end of any number of
/// ranges. Lines containing a marker but no readable value are logged and ignored.
pub fn match_reader<R: BufRead>(ranges: &RangeTable, reader: R) -> std::io::Result<Vec<RangeMatch>> {
    let mut matches = vec![RangeMatch::default(); ranges.len()];

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let mut value = None;

        for (range, range_match) in ranges.iter().zip(matches.iter_mut()) {
            let start_hit = line.contains(range.start_marker());
            let end_hit = line.contains(range.end_marker());
            if !start_hit && !end_hit {
                continue;
            }

            let Some(value) = *value.get_or_insert_with(|| parse_value(&line, index + 1)) else {
                continue;
            };
            if start_hit {
                range_match.start = Some(value);
            }
            if end_hit {
                range_match.end = Some(value);
            }
        }
    }

    Ok(matches)
}

fn parse_value(line: &str, line_number: usize) -> Option<i64> {
    match record::value_field(line) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(line = line_number, %err, "ignoring measurement record");
            None
        }
    }
}

/// Matches the measurement file at `path`.
///
/// A missing file is reported as [ScanError::MissingMeasurements] so callers can decide to skip
/// the scenario.
pub fn match_measurements(ranges: &RangeTable, path: &Path) -> Result<Vec<RangeMatch>, ScanError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::MissingMeasurements {
                path: path.to_owned(),
            }
        } else {
            ScanError::Read {
                path: path.to_owned(),
                source,
            }
        }
    })?;

    match_reader(ranges, BufReader::new(file)).map_err(|source| ScanError::Read {
        path: path.to_owned(),
        source,
    })
}
