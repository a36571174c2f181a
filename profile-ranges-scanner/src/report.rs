use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use profile_ranges::{Delta, RangeTable};

use crate::{RangeMatch, ScanError, Scenario};

/// One line of a results file, `name: 1.5ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub delta: Delta,
}

impl Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.delta)
    }
}

/// The deltas of one scenario, one line per range in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub lines: Vec<ReportLine>,
}

impl ScenarioReport {
    pub fn new(scenario: Scenario, ranges: &RangeTable, matches: &[RangeMatch]) -> Self {
        debug_assert_eq!(ranges.len(), matches.len());
        let lines = ranges
            .iter()
            .zip(matches)
            .map(|(range, range_match)| ReportLine {
                name: range.name().to_owned(),
                delta: range_match.delta(),
            })
            .collect();

        Self { scenario, lines }
    }

    /// Writes the results file into the scenario directory, replacing any previous one.
    pub fn write_results(&self, results_file: &str) -> Result<PathBuf, ScanError> {
        let path = self.scenario.path.join(results_file);
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&path)?);
            for line in &self.lines {
                writeln!(writer, "{line}")?;
            }
            writer.flush()
        };
        write().map_err(|source| ScanError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Writes the scenario path followed by the indented report lines.
    pub fn write_console<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.scenario.path.display())?;
        for line in &self.lines {
            writeln!(out, " {line}")?;
        }
        Ok(())
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &ReportLine> {
        self.lines.iter().filter(|line| !line.delta.is_resolved())
    }
}
