//! Shared test infrastructure for every integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use every::{DurationSequence, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_add(self, other: Self) -> Self {
        TestDuration(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }

    fn rem(self, divisor: Self) -> Self {
        TestDuration(self.0.checked_rem(divisor.0).unwrap_or(0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        Some(TestInstant(self.0 + duration.0))
    }

    fn checked_sub(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_sub(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Starts the clock at the given instant instead of zero
    pub fn starting_at(millis: u64) -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(millis)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds a sequence from milliseconds
pub fn millis<const N: usize>(values: &[u64]) -> DurationSequence<TestDuration, N> {
    DurationSequence::from_millis(values).unwrap()
}

/// Polls once per millisecond from the current time up to and including
/// `until_ms`, returning the instants at which `poll` fired.
pub fn fire_times(
    clock: &MockTimeSource,
    until_ms: u64,
    mut poll: impl FnMut() -> bool,
) -> Vec<u64> {
    let mut fired = Vec::new();
    while clock.now_millis() <= until_ms {
        if poll() {
            fired.push(clock.now_millis());
        }
        clock.advance(TestDuration(1));
    }
    fired
}
