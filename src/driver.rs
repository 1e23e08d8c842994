//! The experiment driver: walks the size ladder, times every selected
//! algorithm, and publishes one record per size as soon as it is done.

use std::collections::HashSet;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam::channel::{self, Receiver};
use tracing::{debug, info, trace};

use crate::algorithms::{AlgorithmSpec, SortFn};
use crate::config::RunConfig;
use crate::control::RunControl;
use crate::error::{BenchError, Result};
use crate::rand::{random_array, set_seed};
use crate::record::{ResultRecord, RunEvent, RunOutcome, RunResult};
use crate::Reporter;

pub struct ExperimentDriver {
    config: RunConfig,
    control: RunControl,
}

impl ExperimentDriver {
    pub fn new(config: RunConfig) -> Self {
        Self::with_control(config, RunControl::new())
    }

    /// Create a driver that observes an existing control handle.
    pub fn with_control(config: RunConfig, control: RunControl) -> Self {
        Self { config, control }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn control(&self) -> &RunControl {
        &self.control
    }

    /// Run the whole ladder on the calling thread.
    ///
    /// Returns `EmptySelection` without doing anything if `algorithms` is
    /// empty. Cancellation is not an error: the result just carries
    /// `RunOutcome::Cancelled` and the records finished before it.
    pub fn run_experiment<R: Reporter + ?Sized>(
        &self,
        algorithms: &[AlgorithmSpec],
        reporter: &mut R,
    ) -> Result<RunResult> {
        self.prepare(algorithms)?;
        Ok(self.execute(algorithms, reporter))
    }

    /// Run the ladder on a background thread, publishing events over a channel.
    ///
    /// Flags are reset before the worker starts, so a cancel issued as soon as
    /// this returns is always honored.
    pub fn spawn(self, algorithms: Vec<AlgorithmSpec>) -> Result<RunHandle> {
        self.prepare(&algorithms)?;

        let (sender, receiver) = channel::unbounded();
        let control = self.control.clone();
        let worker = thread::Builder::new()
            .name("sortbench-driver".to_string())
            .spawn(move || {
                let mut sender = sender;
                self.execute(&algorithms, &mut sender)
            })?;

        Ok(RunHandle {
            events: receiver,
            control,
            worker: Some(worker),
        })
    }

    fn prepare(&self, algorithms: &[AlgorithmSpec]) -> Result<()> {
        if algorithms.is_empty() {
            return Err(BenchError::EmptySelection);
        }
        self.config.validate()?;

        let mut seen = HashSet::new();
        for algo in algorithms {
            if !seen.insert(algo.name) {
                return Err(BenchError::InvalidConfig(format!(
                    "algorithm {} selected twice",
                    algo.name
                )));
            }
        }

        self.control.reset();
        Ok(())
    }

    fn execute<R: Reporter + ?Sized>(
        &self,
        algorithms: &[AlgorithmSpec],
        reporter: &mut R,
    ) -> RunResult {
        if let Some(seed) = self.config.seed {
            set_seed(seed);
        }

        let sizes = &self.config.sizes;
        let total = sizes.len();
        info!(
            algorithms = algorithms.len(),
            sizes = total,
            trials = self.config.trials,
            "Starting experiments"
        );

        let start = Instant::now();
        let mut records = Vec::with_capacity(total);
        let mut outcome = RunOutcome::Completed;

        for (i, &size) in sizes.iter().enumerate() {
            if !self.checkpoint() {
                outcome = RunOutcome::Cancelled;
                break;
            }

            let Some(record) = self.measure_size(size, algorithms, reporter) else {
                outcome = RunOutcome::Cancelled;
                break;
            };

            let progress = (i + 1) as f64 / total as f64 * 100.0;
            debug!(size, progress, "Size finished");
            records.push(record.clone());
            reporter.report(RunEvent::Record { record, progress });
        }

        info!(
            outcome = ?outcome,
            records = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Experiments stopped"
        );
        reporter.report(RunEvent::Finished(outcome));

        RunResult { outcome, records }
    }

    /// Measure every algorithm at one size. `None` means the run was
    /// cancelled part way and the partial record was thrown away.
    fn measure_size<R: Reporter + ?Sized>(
        &self,
        size: usize,
        algorithms: &[AlgorithmSpec],
        reporter: &mut R,
    ) -> Option<ResultRecord> {
        let trials = self.config.trials;
        let mut record = ResultRecord::new(size);

        for algo in algorithms {
            if !self.checkpoint() {
                return None;
            }
            if !algo.supports(size) {
                trace!(algorithm = algo.name, size, "Above size cap, skipped");
                continue;
            }

            reporter.report(RunEvent::Status(status_label(algo.name, size)));

            let mut total_ms = 0.0;
            for trial in 0..trials {
                if !self.checkpoint() {
                    return None;
                }
                let input = random_array(size, self.config.value_range);
                let elapsed_ms = time_sort(algo.sort, &input);
                trace!(algorithm = algo.name, size, trial, elapsed_ms, "Trial done");
                total_ms += elapsed_ms;
                thread::yield_now();
            }

            record.insert(algo.name, total_ms / trials as f64);
        }

        if self.control.is_cancelled() {
            return None;
        }
        Some(record)
    }

    /// Block while paused, then report whether the run may go on.
    fn checkpoint(&self) -> bool {
        if self.control.is_cancelled() {
            return false;
        }
        if self.control.is_paused() {
            debug!("Run paused");
            while self.control.is_paused() {
                if self.control.is_cancelled() {
                    return false;
                }
                thread::sleep(self.config.pause_poll_interval);
            }
            debug!("Run resumed");
        }
        !self.control.is_cancelled()
    }
}

/// Handle to a run executing on a background thread.
pub struct RunHandle {
    events: Receiver<RunEvent>,
    control: RunControl,
    worker: Option<JoinHandle<RunResult>>,
}

impl RunHandle {
    pub fn control(&self) -> &RunControl {
        &self.control
    }

    pub fn events(&self) -> &Receiver<RunEvent> {
        &self.events
    }

    /// Next event, blocking. `None` once the worker is done and every event
    /// has been received.
    pub fn recv(&self) -> Option<RunEvent> {
        self.events.recv().ok()
    }

    pub fn try_recv(&self) -> Option<RunEvent> {
        self.events.try_recv().ok()
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(|w| w.is_finished())
    }

    pub fn cancel(&self) {
        self.control.cancel();
    }

    /// Wait for the worker thread and take its result.
    pub fn join(mut self) -> Result<RunResult> {
        let worker = self.worker.take().ok_or(BenchError::NotRunning)?;
        worker.join().map_err(|_| BenchError::WorkerPanicked)
    }
}

/// Time one sort on a private copy of `input`, in fractional milliseconds.
pub fn time_sort(sort: SortFn, input: &[i64]) -> f64 {
    let mut copy = input.to_vec();
    let start = Instant::now();
    sort(std::hint::black_box(&mut copy));
    let elapsed = start.elapsed();
    std::hint::black_box(&copy);
    elapsed.as_secs_f64() * 1000.0
}

pub fn status_label(name: &str, size: usize) -> String {
    format!("Testing {} with n={}", name, format_count(size))
}

/// Group digits in thousands: 100000 becomes "100,000".
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmKind;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(750), "750");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(75000), "75,000");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(
            status_label("Merge Sort", 10000),
            "Testing Merge Sort with n=10,000"
        );
    }

    #[test]
    fn test_time_sort_leaves_input_untouched() {
        let input = vec![3, 2, 1];
        let ms = time_sort(AlgorithmKind::BubbleSort.spec().sort, &input);
        assert!(ms >= 0.0);
        assert_eq!(input, vec![3, 2, 1]);
    }

    #[test]
    fn test_duplicate_selection_rejected() {
        let driver = ExperimentDriver::new(RunConfig::default().with_sizes(vec![10]));
        let spec = *AlgorithmKind::HeapSort.spec();
        let mut events: Vec<RunEvent> = Vec::new();
        let err = driver
            .run_experiment(&[spec, spec], &mut events)
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_cancel_while_paused() {
        let driver = ExperimentDriver::new(RunConfig::default());
        driver.control().pause();
        driver.control().cancel();
        assert!(!driver.checkpoint());
    }
}
