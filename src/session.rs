//! Consumer-side view of benchmark runs.
//!
//! A `Session` holds what a front end renders: the selection, the records
//! received so far, progress and the status label. It starts runs on a
//! background driver thread and folds the driver's events into that state.

use std::path::Path;

use tracing::{error, info};

use crate::algorithms::AlgorithmSpec;
use crate::config::RunConfig;
use crate::control::RunControl;
use crate::driver::{ExperimentDriver, RunHandle};
use crate::error::{BenchError, Result};
use crate::record::{ResultRecord, RunEvent, RunOutcome};
use crate::report::{self, PerformanceSummary};
use crate::selection::Selection;

/// `Idle -> Running <-> Paused -> Completed | Cancelled`, back to `Idle` on
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl RunPhase {
    /// Running or paused.
    pub fn is_active(&self) -> bool {
        matches!(self, RunPhase::Running | RunPhase::Paused)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunState {
    pub phase: RunPhase,
    pub progress_percent: f64,
    pub current_label: String,
}

impl RunState {
    pub fn running(&self) -> bool {
        self.phase.is_active()
    }

    pub fn paused(&self) -> bool {
        self.phase == RunPhase::Paused
    }
}

pub struct Session {
    config: RunConfig,
    selection: Selection,
    results: Vec<ResultRecord>,
    state: RunState,
    handle: Option<RunHandle>,
}

impl Session {
    pub fn new(config: RunConfig) -> Self {
        Self::with_selection(config, Selection::new())
    }

    pub fn with_selection(config: RunConfig, selection: Selection) -> Self {
        Self {
            config,
            selection,
            results: Vec::new(),
            state: RunState::default(),
            handle: None,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> Result<&mut RunConfig> {
        if self.state.running() {
            return Err(BenchError::AlreadyRunning);
        }
        Ok(&mut self.config)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selection is read once per run and frozen while it is going.
    pub fn selection_mut(&mut self) -> Result<&mut Selection> {
        if self.state.running() {
            return Err(BenchError::SelectionLocked);
        }
        Ok(&mut self.selection)
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn control(&self) -> Option<&RunControl> {
        self.handle.as_ref().map(|h| h.control())
    }

    /// Start a run over the currently selected algorithms.
    ///
    /// An empty selection is rejected before anything changes, so earlier
    /// results stay in place.
    pub fn start(&mut self) -> Result<()> {
        if self.state.running() {
            return Err(BenchError::AlreadyRunning);
        }
        let algorithms = self.selection.active();
        if algorithms.is_empty() {
            return Err(BenchError::EmptySelection);
        }
        // A stopped run may still be winding down
        self.finish_worker();

        let names: Vec<_> = algorithms.iter().map(|a| a.name).collect();
        let handle = ExperimentDriver::new(self.config.clone()).spawn(algorithms)?;
        info!(algorithms = ?names, "Run started");

        self.results.clear();
        self.state = RunState {
            phase: RunPhase::Running,
            progress_percent: 0.0,
            current_label: String::new(),
        };
        self.handle = Some(handle);
        Ok(())
    }

    /// Fold one driver event into the session state.
    pub fn apply(&mut self, event: &RunEvent) {
        match event {
            RunEvent::Status(label) => {
                if self.state.running() {
                    self.state.current_label = label.clone();
                }
            }
            RunEvent::Record { record, progress } => {
                self.results.push(record.clone());
                self.state.progress_percent = *progress;
            }
            RunEvent::Finished(outcome) => {
                if self.state.running() {
                    self.state.phase = match outcome {
                        RunOutcome::Completed => RunPhase::Completed,
                        RunOutcome::Cancelled => RunPhase::Cancelled,
                    };
                    self.state.current_label = outcome.label().to_string();
                }
            }
        }
    }

    /// Block for the next event of the active run and apply it. `None` once
    /// the run is over and its worker has been joined.
    pub fn next_event(&mut self) -> Option<RunEvent> {
        let event = self.handle.as_ref()?.recv();
        match event {
            Some(event) => {
                self.apply(&event);
                Some(event)
            }
            None => {
                self.finish_worker();
                None
            }
        }
    }

    /// Non-blocking `next_event`.
    pub fn try_next_event(&mut self) -> Option<RunEvent> {
        let handle = self.handle.as_ref()?;
        match handle.try_recv() {
            Some(event) => {
                self.apply(&event);
                Some(event)
            }
            None => {
                if handle.is_finished() && handle.events().is_empty() {
                    self.finish_worker();
                }
                None
            }
        }
    }

    /// Drain the active run until its worker exits.
    pub fn wait(&mut self) {
        while self.next_event().is_some() {}
    }

    /// Pause a running run or resume a paused one. Returns true when the run
    /// is now paused.
    pub fn toggle_pause(&mut self) -> Result<bool> {
        if !self.state.running() {
            return Err(BenchError::NotRunning);
        }
        let handle = self.handle.as_ref().ok_or(BenchError::NotRunning)?;
        let paused = handle.control().toggle_pause();
        self.state.phase = if paused {
            RunPhase::Paused
        } else {
            RunPhase::Running
        };
        Ok(paused)
    }

    /// Request cancellation. The phase flips to `Cancelled` right away; the
    /// worker stops at its next checkpoint and records it already finished are
    /// still delivered.
    pub fn stop(&mut self) -> Result<()> {
        if !self.state.running() {
            return Err(BenchError::NotRunning);
        }
        if let Some(handle) = &self.handle {
            handle.control().cancel();
            handle.control().resume();
        }
        self.state.phase = RunPhase::Cancelled;
        self.state.current_label = RunOutcome::Cancelled.label().to_string();
        info!(records = self.results.len(), "Run cancelled");
        Ok(())
    }

    /// Clear results, progress and label and go back to `Idle`.
    pub fn reset(&mut self) -> Result<()> {
        if self.state.running() {
            return Err(BenchError::AlreadyRunning);
        }
        self.finish_worker();
        self.results.clear();
        self.state = RunState::default();
        Ok(())
    }

    pub fn active_algorithms(&self) -> Vec<AlgorithmSpec> {
        self.selection.active()
    }

    pub fn summary(&self) -> PerformanceSummary {
        PerformanceSummary::new(&self.results, &self.active_algorithms())
    }

    pub fn export_csv(&self) -> Result<String> {
        report::export_csv(&self.results, &self.active_algorithms())
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        report::write_csv(path, &self.results, &self.active_algorithms())
    }

    // Join the worker, discarding any events nobody consumed.
    fn finish_worker(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.cancel();
        if let Err(e) = handle.join() {
            error!("Benchmark worker ended abnormally: {}", e);
            if self.state.running() {
                self.state.phase = RunPhase::Cancelled;
                self.state.current_label = RunOutcome::Cancelled.label().to_string();
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.finish_worker();
    }
}
