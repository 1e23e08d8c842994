// Sorting Benchmark Library

use crossbeam::channel::Sender;

/// Consumer of the events a run publishes.
///
/// The driver calls `report` synchronously from the thread doing the
/// measurements, so implementations should return quickly.
pub trait Reporter {
    fn report(&mut self, event: RunEvent);
}

// Channel reporter used by background runs
impl Reporter for Sender<RunEvent> {
    fn report(&mut self, event: RunEvent) {
        if self.send(event).is_err() {
            tracing::debug!("Run event dropped, receiver is gone");
        }
    }
}

// Collecting reporter, handy for synchronous runs
impl Reporter for Vec<RunEvent> {
    fn report(&mut self, event: RunEvent) {
        self.push(event);
    }
}

// Implementations
pub mod algorithms;
pub mod config;
pub mod control;
pub mod driver;
pub mod error;
pub mod logging;
pub mod rand;
pub mod record;
pub mod report;
pub mod selection;
pub mod session;

// Export the main types
pub use algorithms::{AlgorithmKind, AlgorithmSpec, Category, SortFn, catalog};
pub use config::RunConfig;
pub use control::RunControl;
pub use driver::{ExperimentDriver, RunHandle};
pub use error::{BenchError, Result};
pub use record::{ResultRecord, RunEvent, RunOutcome, RunResult};
pub use report::{PerformanceSummary, SummaryRow, export_csv, export_file_name, write_csv};
pub use selection::Selection;
pub use session::{RunPhase, RunState, Session};
