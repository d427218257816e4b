//! Time abstraction traits for platform-agnostic timing.
//!
//! Timers never read a global clock. They ask a [`TimeSource`] for the current
//! instant, so the same code runs on a hardware counter, an async runtime's clock,
//! `std::time::Instant`, or a mock clock in tests.

/// Trait for abstracting monotonic time sources.
///
/// Implementations must never go backwards. Wall-clock adjustments must not
/// leak into the returned instants.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating addition (returns the maximum duration on overflow).
    fn saturating_add(self, other: Self) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;

    /// Remainder of `self` divided by `divisor`.
    ///
    /// Returns ZERO when `divisor` is ZERO.
    fn rem(self, divisor: Self) -> Self;

    /// Returns true for a zero-length duration.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;

    /// Subtracts duration from instant, returns None on underflow.
    fn checked_sub(self, duration: Self::Duration) -> Option<Self>;
}
