//! Arming and drift correction shared by every timer variant.
//!
//! An [`Anchor`] marks where the current step started counting. Instead of
//! backdating an instant (which underflows when a timer is created right after
//! boot, at instant zero), it records the instant it was armed plus a head start
//! that is already counted as elapsed.

use crate::time::{TimeDuration, TimeInstant};

/// Reference point from which elapsed time for the current step is measured.
///
/// Elapsed time at `now` is `now - at + head_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor<I: TimeInstant> {
    /// Instant the anchor was armed.
    pub at: I,

    /// Time already counted as elapsed when armed.
    pub head_start: I::Duration,
}

impl<I: TimeInstant> Anchor<I> {
    /// Arms at `at` with nothing elapsed yet.
    #[inline]
    pub fn new(at: I) -> Self {
        Self {
            at,
            head_start: I::Duration::ZERO,
        }
    }

    /// Arms at `at` as if `by` had already elapsed.
    #[inline]
    pub fn backdated(at: I, by: I::Duration) -> Self {
        Self { at, head_start: by }
    }

    /// Time elapsed for the current step at `now`.
    #[inline]
    pub fn elapsed(&self, now: I) -> I::Duration {
        now.duration_since(self.at).saturating_add(self.head_start)
    }

    /// The notional instant the current step started.
    ///
    /// Returns `None` when that instant lies before the clock's origin.
    pub fn instant(&self) -> Option<I> {
        self.at.checked_sub(self.head_start)
    }

    /// Returns the elapsed time if `duration` has run out at `now`.
    ///
    /// A zero duration never runs out.
    #[inline]
    pub(crate) fn expired(&self, now: I, duration: I::Duration) -> Option<I::Duration> {
        if duration.is_zero() {
            return None;
        }

        let elapsed = self.elapsed(now);
        (elapsed >= duration).then_some(elapsed)
    }

    /// Re-arms after `completed` fired late, carrying the overshoot into the
    /// next step so late polls do not accumulate drift.
    #[inline]
    pub(crate) fn carry_over(&mut self, now: I, elapsed: I::Duration, completed: I::Duration) {
        *self = Self::backdated(now, elapsed.rem(completed));
    }
}
