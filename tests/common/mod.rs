#![allow(dead_code)]

use std::time::Duration;

use sortbench::{AlgorithmKind, AlgorithmSpec, RunConfig, RunEvent};

/// Small, seeded config so driver tests stay fast and repeatable.
pub fn quick_config(sizes: &[usize], trials: usize) -> RunConfig {
    RunConfig::default()
        .with_sizes(sizes.to_vec())
        .with_trials(trials)
        .with_seed(42)
        .with_pause_poll_interval(Duration::from_millis(5))
}

pub fn spec(kind: AlgorithmKind) -> AlgorithmSpec {
    *kind.spec()
}

pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

pub fn record_sizes(events: &[RunEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            RunEvent::Record { record, .. } => Some(record.size),
            _ => None,
        })
        .collect()
}
