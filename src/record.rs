/// Mean timings for every algorithm that ran at one input size.
///
/// An algorithm that was skipped at this size (because the size exceeds its
/// `max_input_size`) has no entry at all; it is never recorded as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub size: usize,
    /// (algorithm name, mean milliseconds) in selection order
    timings: Vec<(&'static str, f64)>,
}

impl ResultRecord {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            timings: Vec::new(),
        }
    }

    /// Set the mean time for `name`, replacing any earlier value.
    pub fn insert(&mut self, name: &'static str, mean_ms: f64) {
        match self.timings.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = mean_ms,
            None => self.timings.push((name, mean_ms)),
        }
    }

    pub fn with_timing(mut self, name: &'static str, mean_ms: f64) -> Self {
        self.insert(name, mean_ms);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.timings
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, ms)| ms)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn timings(&self) -> &[(&'static str, f64)] {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

impl std::fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "n={}", self.size)?;
        for (name, ms) in &self.timings {
            write!(f, ", {}={:.3} ms", name, ms)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

impl RunOutcome {
    /// Status label shown once the run is over.
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "Experiments completed!",
            RunOutcome::Cancelled => "Experiments cancelled",
        }
    }
}

/// Everything a run publishes, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Describes the algorithm and size about to be measured.
    Status(String),
    /// A finished size, together with overall progress in percent.
    Record {
        record: ResultRecord,
        progress: f64,
    },
    Finished(RunOutcome),
}

/// What a synchronous run hands back once it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub outcome: RunOutcome,
    pub records: Vec<ResultRecord>,
}
