// src/clock.rs

//! Wall-clock source for the recency gate.

use std::fmt::Debug;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> SystemTime;
}

/// The host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(SystemTime);

impl FixedClock {
    /// Clock reading `secs` (may be fractional) after the Unix epoch.
    pub fn at_secs(secs: f64) -> Self {
        Self(UNIX_EPOCH + Duration::from_secs_f64(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

/// Seconds elapsed between a whole-second modification time and `now`.
///
/// Negative when the file claims to be modified in the future.
pub fn age_secs(now: SystemTime, modified_secs: u64) -> f64 {
    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    now_secs - modified_secs as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_keeps_sub_second_precision_of_now() {
        let clock = FixedClock::at_secs(102.5);
        assert_eq!(age_secs(clock.now(), 100), 2.5);
        assert_eq!(age_secs(clock.now(), 104), -1.5);
    }
}
