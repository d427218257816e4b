//! Minimal single-fire timer.

use crate::anchor::Anchor;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Fires once, `duration` after [`start`](Self::start).
///
/// Behaves like an [`IntervalTimer`](crate::IntervalTimer) configured with
/// `(duration, 0)`, without storing a sequence. Never fires before the first
/// `start()`, and stops again after each firing. A zero duration never fires.
///
/// `duration` is a plain field: assigning to it takes effect on the next poll.
pub struct OneShot<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    /// How long to wait after `start()`.
    pub duration: I::Duration,
    anchor: Option<Anchor<I>>,
    running: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> OneShot<'t, I, T> {
    /// Creates an idle timer. Nothing happens until [`start`](Self::start).
    pub fn new(duration: I::Duration, time_source: &'t T) -> Self {
        Self {
            time_source,
            duration,
            anchor: None,
            running: false,
        }
    }

    /// Arms the timer from now. Restarts it if already running.
    pub fn start(&mut self) {
        self.anchor = Some(Anchor::new(self.time_source.now()));
        self.running = true;
    }

    /// Returns true once the duration has elapsed since `start()`.
    pub fn poll(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(anchor) = self.anchor else {
            return false;
        };

        let now = self.time_source.now();
        if anchor.expired(now, self.duration).is_none() {
            return false;
        }

        self.anchor = Some(Anchor::new(now));
        self.running = false;
        true
    }

    /// Returns true between `start()` and the firing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the instant of the last start while running, or of the firing
    /// once it has fired. `None` if never started.
    pub fn last_anchor(&self) -> Option<I> {
        self.anchor.map(|anchor| anchor.at)
    }

    /// Returns how long until the firing, `None` if not running or the duration
    /// is zero.
    pub fn time_until_next(&self) -> Option<I::Duration> {
        if !self.running || self.duration.is_zero() {
            return None;
        }

        let anchor = self.anchor?;
        Some(
            self.duration
                .saturating_sub(anchor.elapsed(self.time_source.now())),
        )
    }
}
