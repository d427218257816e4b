#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IntervalTimer`**: Pollable timer stepping through a sequence of durations (repeating, pattern or one-shot)
//! - **`DurationSequence`**: Non-empty, fixed-capacity sequence of durations; a trailing zero makes it one-shot
//! - **`OneShot`**: Minimal timer that fires once after `start()`
//! - **`Periodic`**: Minimal timer that fires immediately, then every interval
//! - **`Anchor`**: Reference point elapsed time is measured from, with drift correction
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`TimerAction`**: Commands that can be sent to control an interval timer
//!
//! Timers never block or sleep. The host loop calls `poll()` at its own cadence and
//! acts when it returns `true`.

pub mod anchor;
pub mod command;
pub mod interval;
pub mod oneshot;
pub mod periodic;
pub mod sequence;
pub mod time;
pub mod types;

#[cfg(feature = "std")]
pub mod std_time;

pub use anchor::Anchor;
pub use command::TimerAction;
pub use interval::IntervalTimer;
pub use oneshot::OneShot;
pub use periodic::Periodic;
pub use sequence::DurationSequence;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::InvalidConfiguration;

#[cfg(feature = "std")]
pub use std_time::{StdClock, StdDuration, StdInstant};
