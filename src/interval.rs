//! Pollable interval timer driven by a sequence of durations.
//!
//! Provides [`IntervalTimer`], the general engine: it repeats a single interval,
//! cycles through a pattern of durations, or acts as a one-shot timer when its
//! sequence ends in a terminal zero.

use crate::anchor::Anchor;
use crate::command::TimerAction;
use crate::sequence::DurationSequence;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::InvalidConfiguration;

/// Non-blocking timer that reports when the current duration has elapsed.
///
/// Call [`poll`](Self::poll) from the host loop as often as you like. It returns
/// `true` once each time the current duration runs out, then moves on to the next
/// duration in the sequence. After a firing, [`index`](Self::index) is the
/// duration now being waited for, which hosts use to pick an action per step
/// (e.g. on for even steps, off for odd steps).
///
/// A freshly constructed or reconfigured timer fires on its first poll, unless
/// its sequence ends in a terminal zero, in which case it does nothing until
/// [`start`](Self::start) is called.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of durations in the sequence
pub struct IntervalTimer<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    time_source: &'t T,
    sequence: DurationSequence<I::Duration, N>,
    index: usize,
    anchor: Anchor<I>,
    running: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> IntervalTimer<'t, I, T, N> {
    /// Creates a timer armed to fire on its first poll.
    ///
    /// The cursor starts on the last duration, already counted as elapsed, so the
    /// first poll fires and wraps the cursor to the first duration. Sequences
    /// ending in a terminal zero start out not running.
    pub fn new(sequence: DurationSequence<I::Duration, N>, time_source: &'t T) -> Self {
        let index = sequence.len() - 1;
        let current = sequence.at(index);
        let running = !sequence.is_terminal_zero();

        Self {
            time_source,
            anchor: Anchor::backdated(time_source.now(), current),
            sequence,
            index,
            running,
        }
    }

    /// Creates a timer from a slice of durations.
    ///
    /// # Errors
    /// * `EmptySequence` - No durations given
    /// * `CapacityExceeded` - More than `N` durations given
    pub fn with_durations(
        durations: &[I::Duration],
        time_source: &'t T,
    ) -> Result<Self, InvalidConfiguration> {
        Ok(Self::new(
            DurationSequence::from_sequence(durations)?,
            time_source,
        ))
    }

    /// Creates a one-shot timer: the `(duration, 0)` pattern.
    ///
    /// Does not fire until [`start`](Self::start) is called, then fires once after
    /// `duration` and stops.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is less than two
    pub fn one_shot(
        duration: I::Duration,
        time_source: &'t T,
    ) -> Result<Self, InvalidConfiguration> {
        Self::with_durations(&[duration, I::Duration::ZERO], time_source)
    }

    /// Handles a timer action by dispatching to the appropriate method.
    pub fn handle_action(&mut self, action: TimerAction<I::Duration, N>) {
        match action {
            TimerAction::Start => self.start(),
            TimerAction::SetSequence(sequence) => self.set_sequence(sequence),
        }
    }

    /// Returns true exactly when the current duration has elapsed.
    ///
    /// On a firing the cursor advances to the next duration. If that duration is
    /// non-zero the timer re-arms from the ideal boundary, carrying over any time
    /// the poll came late, so slow loops don't accumulate drift. If it is zero the
    /// timer stops.
    ///
    /// At most one firing is reported per call; missed periods are not caught up.
    pub fn poll(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let now = self.time_source.now();
        let completed = self.sequence.at(self.index);
        let Some(elapsed) = self.anchor.expired(now, completed) else {
            return false;
        };

        self.index = (self.index + 1) % self.sequence.len();

        if self.sequence.at(self.index).is_zero() {
            self.anchor = Anchor::new(now);
            self.running = false;

            #[cfg(feature = "defmt")]
            defmt::trace!("interval timer stopped at index {=usize}", self.index);
        } else {
            self.anchor.carry_over(now, elapsed, completed);
        }

        true
    }

    /// Re-arms from now at the first duration and forces the timer running.
    ///
    /// Unlike construction, the first duration must fully elapse before the next
    /// firing. This is how one-shot and terminal-zero patterns are triggered.
    pub fn start(&mut self) {
        self.anchor = Anchor::new(self.time_source.now());
        self.index = 0;
        self.running = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("interval timer started");
    }

    /// Replaces the duration sequence and resets the timer.
    ///
    /// The cursor moves to the first duration, armed to fire on the next poll.
    /// Running is recomputed from the new sequence: false if it ends in a
    /// terminal zero.
    pub fn set_sequence(&mut self, sequence: DurationSequence<I::Duration, N>) {
        self.anchor = Anchor::backdated(self.time_source.now(), sequence.first());
        self.index = 0;
        self.running = !sequence.is_terminal_zero();
        self.sequence = sequence;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "interval timer reconfigured, {=usize} durations, running={=bool}",
            self.sequence.len(),
            self.running
        );
    }

    /// Replaces the duration sequence from a slice of durations.
    ///
    /// Validates before touching any state: on error the timer is unchanged.
    ///
    /// # Errors
    /// * `EmptySequence` - No durations given
    /// * `CapacityExceeded` - More than `N` durations given
    pub fn set_durations(&mut self, durations: &[I::Duration]) -> Result<(), InvalidConfiguration> {
        let sequence = DurationSequence::from_sequence(durations)?;
        self.set_sequence(sequence);
        Ok(())
    }

    /// Returns the cursor: the duration currently being waited for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the timer can fire.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the notional instant the current duration began counting.
    ///
    /// `None` when that instant lies before the clock's origin (e.g. a timer armed
    /// to fire immediately right after boot).
    pub fn last_anchor(&self) -> Option<I> {
        self.anchor.instant()
    }

    /// Returns the raw anchor the current duration is measured from.
    pub fn anchor(&self) -> Anchor<I> {
        self.anchor
    }

    /// Returns the duration sequence.
    pub fn sequence(&self) -> &DurationSequence<I::Duration, N> {
        &self.sequence
    }

    /// Returns the duration currently being waited for.
    pub fn current_duration(&self) -> I::Duration {
        self.sequence.at(self.index)
    }

    /// Returns the time elapsed in the current duration.
    pub fn elapsed(&self) -> I::Duration {
        self.anchor.elapsed(self.time_source.now())
    }

    /// Returns how long until the next firing.
    ///
    /// `Some(ZERO)` means the next poll fires. `None` means the timer cannot fire:
    /// it is not running or waits on a zero duration. Hosts that sleep between
    /// polls can use this as the sleep length.
    pub fn time_until_next(&self) -> Option<I::Duration> {
        let current = self.current_duration();
        if !self.running || current.is_zero() {
            return None;
        }

        Some(current.saturating_sub(self.elapsed()))
    }
}
