use std::time::Duration;

/// How often and how patiently a board query is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub retries: usize,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(30);

    pub fn new(retries: usize, delay: Duration) -> Self {
        RetryPolicy { retries, delay }
    }

    /// Single attempt, used when the snapshot cannot be re-read
    pub fn no_retry() -> Self {
        RetryPolicy {
            retries: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn attempts(&self) -> usize {
        self.retries + 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retries: 1,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Settings for one planning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Apply anticipated bomb and stone results to the working grid
    pub update_matrix: bool,
    pub retry: RetryPolicy,
    pub verbose: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            update_matrix: true,
            retry: RetryPolicy::default(),
            verbose: false,
        }
    }
}
