use std::time::Duration;

use tokio::time::Instant;

/// Fixed wall-clock budget starting at construction.
#[derive(Debug, Copy, Clone)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }

    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    /// `step`, shortened so it never runs past the deadline.
    pub fn clip(&self, step: Duration) -> Duration {
        step.min(self.remaining())
    }
}
