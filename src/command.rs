//! Command-based control for interval timers.

use crate::sequence::DurationSequence;
use crate::time::TimeDuration;

/// Actions for controlling an [`IntervalTimer`](crate::IntervalTimer).
///
/// Lets hosts forward control through a queue or channel (e.g. from a button
/// task to the task that owns the timer) and apply it with
/// [`handle_action`](crate::IntervalTimer::handle_action).
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction<D: TimeDuration, const N: usize> {
    /// Re-arm from now and force the timer running.
    Start,
    /// Replace the duration sequence.
    SetSequence(DurationSequence<D, N>),
}
