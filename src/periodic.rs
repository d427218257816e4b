//! Minimal repeating timer.

use crate::anchor::Anchor;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Fires on the first poll, then every `interval`, forever.
///
/// The lightweight counterpart of an [`IntervalTimer`](crate::IntervalTimer)
/// with a single duration: no sequence, no start/stop. Uses the same drift
/// correction, so a late poll does not push later firings back.
///
/// Both fields are public and may be assigned directly, without validation.
/// Assigning `anchor` re-synchronises the timer, e.g.
/// `periodic.anchor = Anchor::backdated(now, half_interval)` fires half an
/// interval from now. A zero `interval` never fires.
pub struct Periodic<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    /// Time between firings.
    pub interval: I::Duration,
    /// Where the current interval started counting.
    pub anchor: Anchor<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Periodic<'t, I, T> {
    /// Creates a timer that fires on its first poll.
    pub fn new(interval: I::Duration, time_source: &'t T) -> Self {
        Self {
            time_source,
            interval,
            anchor: Anchor::backdated(time_source.now(), interval),
        }
    }

    /// Returns true each time the interval elapses.
    pub fn poll(&mut self) -> bool {
        let now = self.time_source.now();
        match self.anchor.expired(now, self.interval) {
            Some(elapsed) => {
                self.anchor.carry_over(now, elapsed, self.interval);
                true
            }
            None => false,
        }
    }

    /// Restarts the interval from now, without an immediate firing.
    pub fn rearm(&mut self) {
        self.anchor = Anchor::new(self.time_source.now());
    }

    /// Returns the notional instant the current interval started, i.e. the ideal
    /// time of the last firing. `None` if that lies before the clock's origin.
    pub fn last_fired(&self) -> Option<I> {
        self.anchor.instant()
    }

    /// Returns how long until the next firing, `None` for a zero interval.
    pub fn time_until_next(&self) -> Option<I::Duration> {
        if self.interval.is_zero() {
            return None;
        }

        Some(
            self.interval
                .saturating_sub(self.anchor.elapsed(self.time_source.now())),
        )
    }
}
