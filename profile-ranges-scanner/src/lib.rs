//! # Profile Ranges Scanner
//! Walks a result tree, matches the measurement file of every scenario directory against a
//! [RangeTable] and writes a results file next to it.
//!
//! ```no_run
//! use profile_ranges::RangeTable;
//! use profile_ranges_scanner::{ScanConfig, Scanner};
//!
//! let ranges = RangeTable::from_path("ranges").unwrap();
//! let config = ScanConfig::default();
//! let summary = Scanner::new(&config, &ranges)
//!     .run(&mut std::io::stdout().lock())
//!     .unwrap();
//! println!("{} scenarios", summary.reports.len());
//! ```

use std::io::Write;

use profile_ranges::RangeTable;

mod config;
mod discover;
mod error;
mod matching;
mod report;

pub use config::{
    MissingMeasurements, ScanConfig, DEFAULT_MEASUREMENT_FILE, DEFAULT_RESULTS_FILE, DEFAULT_ROOT,
    DEFAULT_SCENARIO_KINDS,
};
pub use discover::{Scenario, ScenarioDirs, ScenarioFilter};
pub use error::ScanError;
pub use matching::{match_measurements, match_reader, RangeMatch};
pub use report::{ReportLine, ScenarioReport};

/// The outcome of a run over a result tree.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Reports in processing order.
    pub reports: Vec<ScenarioReport>,
    /// Scenarios without a measurement file, only filled when they are skipped.
    pub skipped: Vec<Scenario>,
}

impl RunSummary {
    pub fn unresolved_count(&self) -> usize {
        self.reports
            .iter()
            .map(|report| report.unresolved().count())
            .sum()
    }
}

#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a ScanConfig,
    ranges: &'a RangeTable,
    filter: ScenarioFilter,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig, ranges: &'a RangeTable) -> Self {
        Self {
            config,
            ranges,
            filter: ScenarioFilter::new(config.scenario_kinds.iter().cloned()),
        }
    }

    pub fn scenarios(&self) -> ScenarioDirs<'_> {
        ScenarioDirs::new(&self.config.root, &self.filter)
    }

    /// Matches the measurement file of a single scenario.
    pub fn scan(&self, scenario: &Scenario) -> Result<ScenarioReport, ScanError> {
        let path = scenario.path.join(&self.config.measurement_file);
        tracing::debug!(path = %path.display(), "scanning measurements");
        let matches = match_measurements(self.ranges, &path)?;
        Ok(ScenarioReport::new(scenario.clone(), self.ranges, &matches))
    }

    /// Scans and reports every scenario of the result tree, one after the other.
    ///
    /// Console output is written to `out`. A missing measurement file aborts the run unless the
    /// configuration asks to skip such scenarios.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, ScanError> {
        if !self.config.root.is_dir() {
            return Err(ScanError::MissingRoot {
                path: self.config.root.clone(),
            });
        }

        let mut summary = RunSummary::default();
        for scenario in self.scenarios() {
            let report = match self.scan(&scenario) {
                Ok(report) => report,
                Err(ScanError::MissingMeasurements { path })
                    if self.config.missing_measurements == MissingMeasurements::Skip =>
                {
                    tracing::warn!(
                        path = %path.display(),
                        "skipping scenario without measurements"
                    );
                    summary.skipped.push(scenario);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let results = report.write_results(&self.config.results_file)?;
            report.write_console(out).map_err(ScanError::Console)?;
            tracing::debug!(path = %results.display(), "wrote results");

            summary.reports.push(report);
        }

        tracing::info!(
            scenarios = summary.reports.len(),
            skipped = summary.skipped.len(),
            unresolved = summary.unresolved_count(),
            "finished scanning {}",
            self.config.root.display()
        );

        Ok(summary)
    }
}
