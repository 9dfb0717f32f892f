//! Timing fixtures
//!
//! `TestTimer` reports how long a test took when it goes out of scope;
//! `speedup` picks a short random delay so tests do not wait the full
//! default sleep.

use crate::orchestrator::MathSettings;
use rand::Rng;
use std::time::{Duration, Instant};

/// Prints `Test took X.XX seconds!` when dropped
///
/// ```
/// use fixture_showcase::testing::fixtures::TestTimer;
///
/// let timer = TestTimer::start();
/// assert!(timer.report().starts_with("Test took "));
/// ```
pub struct TestTimer {
    started: Instant,
}

impl TestTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self) -> String {
        format!("Test took {:.2} seconds!", self.elapsed().as_secs_f64())
    }
}

impl Drop for TestTimer {
    fn drop(&mut self) {
        println!("{}", self.report());
    }
}

/// A random sleep between 0.02 and 0.20 seconds, in 0.02 second steps
pub fn speedup() -> Duration {
    let steps: u64 = rand::rng().random_range(1..=10);
    Duration::from_millis(steps * 20)
}

/// Default settings with the sleep replaced by [`speedup`]
pub fn speedup_settings() -> MathSettings {
    MathSettings::default().with_sleep(speedup())
}
