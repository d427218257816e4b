//! Clock adapter for hosted targets.
//!
//! Wraps `std::time::Instant` and `std::time::Duration` to implement the time
//! traits. `std::time::Instant` is monotonic.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Newtype wrapper for `std::time::Duration` to implement TimeDuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StdDuration(pub std::time::Duration);

impl StdDuration {
    /// Creates a duration from fractional seconds.
    ///
    /// Negative, NaN or overflowing inputs are clamped (to zero, zero, and the
    /// maximum duration respectively).
    pub fn from_secs_f64(secs: f64) -> Self {
        StdDuration(
            std::time::Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
                std::time::Duration::MAX
            } else {
                std::time::Duration::ZERO
            }),
        )
    }
}

impl TimeDuration for StdDuration {
    const ZERO: Self = StdDuration(std::time::Duration::ZERO);

    fn from_millis(millis: u64) -> Self {
        StdDuration(std::time::Duration::from_millis(millis))
    }

    fn saturating_add(self, other: Self) -> Self {
        StdDuration(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        StdDuration(self.0.saturating_sub(other.0))
    }

    fn rem(self, divisor: Self) -> Self {
        let divisor = divisor.0.as_nanos();
        if divisor == 0 {
            return Self::ZERO;
        }

        // The remainder is below the divisor, which itself came from a Duration.
        let nanos = self.0.as_nanos() % divisor;
        StdDuration(std::time::Duration::new(
            (nanos / 1_000_000_000) as u64,
            (nanos % 1_000_000_000) as u32,
        ))
    }
}

impl From<std::time::Duration> for StdDuration {
    fn from(duration: std::time::Duration) -> Self {
        StdDuration(duration)
    }
}

/// Newtype wrapper for `std::time::Instant` to implement TimeInstant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StdInstant(pub std::time::Instant);

impl TimeInstant for StdInstant {
    type Duration = StdDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        StdDuration(self.0.saturating_duration_since(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(StdInstant)
    }

    fn checked_sub(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_sub(duration.0).map(StdInstant)
    }
}

/// Time source backed by `std::time::Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl StdClock {
    /// Creates a new std time source
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource<StdInstant> for StdClock {
    fn now(&self) -> StdInstant {
        StdInstant(std::time::Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_keeps_sub_millisecond_precision() {
        let elapsed = StdDuration(std::time::Duration::from_micros(2_500_250));
        let interval = StdDuration(std::time::Duration::from_millis(1_000));
        assert_eq!(
            elapsed.rem(interval),
            StdDuration(std::time::Duration::from_micros(500_250))
        );
    }

    #[test]
    fn rem_by_zero_is_zero() {
        let elapsed = StdDuration::from_millis(1234);
        assert_eq!(elapsed.rem(StdDuration::ZERO), StdDuration::ZERO);
    }

    #[test]
    fn from_secs_f64_clamps_invalid_input() {
        assert_eq!(StdDuration::from_secs_f64(-1.0), StdDuration::ZERO);
        assert_eq!(StdDuration::from_secs_f64(f64::NAN), StdDuration::ZERO);
        assert_eq!(StdDuration::from_secs_f64(0.25), StdDuration::from_millis(250));
    }
}
