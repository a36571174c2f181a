use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("result tree root {} is not a directory", path.display())]
    MissingRoot { path: PathBuf },
    #[error("measurement file {} not found", path.display())]
    MissingMeasurements { path: PathBuf },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report to the console")]
    Console(#[source] std::io::Error),
}
