//! Wall-clock budget shared by all search algorithms.

use std::time::{Duration, Instant};

/// Tracks elapsed time against a budget.
///
/// Searches call [`update`](Timer::update) at their abort points and return
/// their best solution as soon as it reports `true`. A zero budget is
/// exhausted on the first update.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_hubloc::timer::Timer;
///
/// let mut timer = Timer::new(Duration::ZERO);
/// timer.start();
/// assert!(timer.update());
/// assert!(timer.check());
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    max_time: Duration,
    started_at: Option<Instant>,
    elapsed: Duration,
    exceeded: bool,
}

impl Timer {
    /// Creates a stopped timer with the given budget.
    pub fn new(max_time: Duration) -> Self {
        Self {
            max_time,
            started_at: None,
            elapsed: Duration::ZERO,
            exceeded: false,
        }
    }

    /// Clears elapsed time and the exceeded flag.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.exceeded = false;
    }

    /// Starts (or restarts) measuring.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.elapsed = Duration::ZERO;
        self.exceeded = false;
    }

    /// Records the latest elapsed time and reports whether the budget is
    /// spent.
    ///
    /// The budget counts as spent once the elapsed time reaches it, not only
    /// when it goes past it, so a zero budget is spent on the first update.
    pub fn update(&mut self) -> bool {
        if let Some(start) = self.started_at {
            self.elapsed = start.elapsed();
        }
        self.exceeded = self.elapsed >= self.max_time;
        self.exceeded
    }

    /// Stops measuring and returns the elapsed time.
    pub fn stop(&mut self) -> Duration {
        self.update();
        self.started_at = None;
        self.elapsed
    }

    /// Whether the last update found the budget spent.
    pub fn check(&self) -> bool {
        self.exceeded
    }

    /// Sets the budget.
    pub fn set(&mut self, max_time: Duration) {
        self.max_time = max_time;
    }

    /// The configured budget.
    pub fn max_time(&self) -> Duration {
        self.max_time
    }

    /// Elapsed time recorded by the last update.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
