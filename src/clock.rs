//! Injectable time source.
//!
//! Sample `date` values and event timestamps are the only nondeterministic
//! outputs of the pipeline, so the wall clock is passed in explicitly
//! rather than read inline. Tests pin it with [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for sample dates and event timestamps.
///
/// Yields a naive datetime: neither output format carries a timezone
/// offset, so the zone is the caller's concern.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock reading local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixed clock at the given date and time-of-day.
    ///
    /// Panics on out-of-range components; only meant for test setup.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let dt = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .expect("valid fixed clock components");
        Self(dt)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::at(2024, 6, 1, 12, 30, 45);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(
            clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-06-01 12:30:45"
        );
    }

    #[test]
    fn test_system_clock_advances_or_holds() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
