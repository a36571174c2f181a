//! # Range Deck
//! Reports the profile range deltas of every scenario in a result tree.
//!
//! The ranges are read from a definition file, every scenario directory below the result root is
//! scanned and its deltas are written to a results file inside the directory and to stdout.
//! Logging goes to stderr and can be tuned with `RUST_LOG`.

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use profile_ranges::RangeTable;
use profile_ranges_scanner::{
    MissingMeasurements, ScanConfig, Scanner, DEFAULT_MEASUREMENT_FILE, DEFAULT_RESULTS_FILE,
    DEFAULT_ROOT, DEFAULT_SCENARIO_KINDS,
};
use tracing_subscriber::EnvFilter;

pub mod statistics;

#[derive(Debug, Parser)]
#[command(name = "range-deck", version, about)]
pub struct Args {
    /// Range definitions, one `name:startMarker:endMarker` per line
    #[arg(short, long, default_value = "ranges")]
    pub ranges: PathBuf,

    /// Root of the result tree
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Name of the measurement file inside a scenario directory
    #[arg(long, default_value = DEFAULT_MEASUREMENT_FILE)]
    pub measurement_file: String,

    /// Name of the results file written into a scenario directory
    #[arg(long, default_value = DEFAULT_RESULTS_FILE)]
    pub results_file: String,

    /// Directory name that marks a scenario (repeatable)
    #[arg(
        short,
        long = "scenario",
        value_name = "KIND",
        default_values_t = DEFAULT_SCENARIO_KINDS.map(String::from)
    )]
    pub scenario_kinds: Vec<String>,

    /// Skip scenario directories without a measurement file instead of failing
    #[arg(long)]
    pub skip_missing: bool,

    /// Print per-kind statistics after all scenarios were reported
    #[arg(long)]
    pub summary: bool,
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            root: self.root.clone(),
            measurement_file: self.measurement_file.clone(),
            results_file: self.results_file.clone(),
            scenario_kinds: self.scenario_kinds.clone(),
            missing_measurements: if self.skip_missing {
                MissingMeasurements::Skip
            } else {
                MissingMeasurements::Fail
            },
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,range_deck=info,profile_ranges_scanner=info,profile_ranges=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let ranges = RangeTable::from_path(&args.ranges)
        .with_context(|| format!("failed to load ranges from {}", args.ranges.display()))?;
    if ranges.is_empty() {
        tracing::warn!(path = %args.ranges.display(), "no ranges defined");
    }

    let config = args.scan_config();
    let summary = Scanner::new(&config, &ranges)
        .run(out)
        .with_context(|| format!("failed to scan {}", config.root.display()))?;

    if args.summary {
        writeln!(out)?;
        writeln!(out, "summary")?;
        for kind in
            statistics::calculate_statistics(&config.scenario_kinds, &ranges, &summary.reports)
        {
            writeln!(out, "{kind}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[test]
fn test_default_args() {
    let args = Args::parse_from(["range-deck"]);
    assert_eq!(args.scan_config(), ScanConfig::default());
    assert_eq!(args.ranges, PathBuf::from("ranges"));
    assert!(!args.summary);
}

#[test]
fn test_scenario_kinds_replace_defaults() {
    let args = Args::parse_from([
        "range-deck",
        "-s",
        "hot",
        "--scenario",
        "lukewarm",
        "--skip-missing",
    ]);
    let config = args.scan_config();
    assert_eq!(config.scenario_kinds, ["hot", "lukewarm"]);
    assert_eq!(config.missing_measurements, MissingMeasurements::Skip);
}
