use std::time::Duration;

use crate::error::{BenchError, Result};

/// Input sizes every run walks through, smallest first.
pub const DEFAULT_SIZES: [usize; 19] = [
    10, 25, 50, 100, 250, 500, 750, 1000, 2000, 3000, 5000, 7500, 10000, 15000, 20000, 30000,
    50000, 75000, 100000,
];
pub const DEFAULT_TRIALS: usize = 5;
/// Generated values are drawn from `0..DEFAULT_VALUE_RANGE`.
pub const DEFAULT_VALUE_RANGE: i64 = 10_000;
pub const DEFAULT_PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Size ladder, strictly increasing
    pub sizes: Vec<usize>,
    /// Trials averaged per algorithm and size
    pub trials: usize,
    pub value_range: i64,
    /// How long a paused run sleeps between flag checks
    pub pause_poll_interval: Duration,
    /// Seed for the input generator; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            value_range: DEFAULT_VALUE_RANGE,
            pause_poll_interval: DEFAULT_PAUSE_POLL_INTERVAL,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pause_poll_interval(mut self, interval: Duration) -> Self {
        self.pause_poll_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "size ladder must not be empty".to_string(),
            ));
        }
        if let Some(w) = self.sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(BenchError::InvalidConfig(format!(
                "size ladder must be strictly increasing, found {} before {}",
                w[0], w[1]
            )));
        }
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig(
                "trials per size must be at least 1".to_string(),
            ));
        }
        if self.value_range <= 0 {
            return Err(BenchError::InvalidConfig(format!(
                "value range must be positive, got {}",
                self.value_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sizes.first(), Some(&10));
        assert_eq!(config.sizes.last(), Some(&100_000));
        assert_eq!(config.trials, 5);
    }

    #[test]
    fn test_rejects_unordered_ladder() {
        let config = RunConfig::default().with_sizes(vec![10, 50, 25]);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig(_))
        ));

        let config = RunConfig::default().with_sizes(vec![10, 10]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_trials_and_empty_ladder() {
        assert!(RunConfig::default().with_trials(0).validate().is_err());
        assert!(
            RunConfig::default()
                .with_sizes(Vec::new())
                .validate()
                .is_err()
        );
    }
}
