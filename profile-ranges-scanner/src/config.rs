use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "OUTPUT";
pub const DEFAULT_MEASUREMENT_FILE: &str = "outpucik-points";
pub const DEFAULT_RESULTS_FILE: &str = "outpucik-results";
pub const DEFAULT_SCENARIO_KINDS: [&str; 3] = ["cold", "warm", "preload"];

/// What to do with a scenario directory that has no measurement file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingMeasurements {
    /// Abort the run.
    #[default]
    Fail,
    /// Log a warning and continue with the next scenario.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Root of the result tree.
    pub root: PathBuf,
    /// Name of the measurement file inside every scenario directory.
    pub measurement_file: String,
    /// Name of the results file written into every scenario directory.
    pub results_file: String,
    /// Directory names that mark a scenario.
    pub scenario_kinds: Vec<String>,
    pub missing_measurements: MissingMeasurements,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            measurement_file: DEFAULT_MEASUREMENT_FILE.to_owned(),
            results_file: DEFAULT_RESULTS_FILE.to_owned(),
            scenario_kinds: DEFAULT_SCENARIO_KINDS.map(String::from).to_vec(),
            missing_measurements: MissingMeasurements::Fail,
        }
    }
}

impl ScanConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}
