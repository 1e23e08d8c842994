use thiserror::Error;

/// Errors surfaced by the benchmark library.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A run was requested with no algorithm selected. The run does not start.
    #[error("Please select at least one algorithm to test")]
    EmptySelection,

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid run configuration: {0}")]
    InvalidConfig(String),

    /// Selection changes are refused while a run is in progress.
    #[error("Selection cannot change while experiments are running")]
    SelectionLocked,

    #[error("Experiments are already running")]
    AlreadyRunning,

    #[error("No experiment is running")]
    NotRunning,

    #[error("Benchmark worker thread panicked")]
    WorkerPanicked,

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
