use crate::time::TimeDuration;
use crate::types::InvalidConfiguration;
use heapless::Vec;

/// A non-empty, ordered sequence of durations.
///
/// Timers step through the durations in order and wrap back to the first one.
/// A zero as the last element is a terminal marker: the timer stops once it gets
/// there instead of waiting zero time.
///
/// Storage is a fixed-capacity `heapless::Vec`, so sequences never allocate.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of durations this sequence can hold
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSequence<D: TimeDuration, const N: usize> {
    durations: Vec<D, N>,
}

impl<D: TimeDuration, const N: usize> DurationSequence<D, N> {
    /// Creates a one-element sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is zero
    pub fn from_single(duration: D) -> Result<Self, InvalidConfiguration> {
        Self::from_sequence(&[duration])
    }

    /// Creates a sequence from an ordered slice of durations.
    ///
    /// # Errors
    /// * `EmptySequence` - The slice is empty
    /// * `CapacityExceeded` - The slice holds more than `N` durations
    pub fn from_sequence(durations: &[D]) -> Result<Self, InvalidConfiguration> {
        if durations.is_empty() {
            return Err(InvalidConfiguration::EmptySequence);
        }

        let durations =
            Vec::from_slice(durations).map_err(|_| InvalidConfiguration::CapacityExceeded {
                requested: durations.len(),
                capacity: N,
            })?;

        Ok(Self { durations })
    }

    /// Creates a sequence from durations given in milliseconds.
    ///
    /// # Errors
    /// Same as [`from_sequence`](Self::from_sequence).
    pub fn from_millis(millis: &[u64]) -> Result<Self, InvalidConfiguration> {
        if millis.is_empty() {
            return Err(InvalidConfiguration::EmptySequence);
        }

        let mut durations = Vec::new();
        for &ms in millis {
            durations
                .push(D::from_millis(ms))
                .map_err(|_| InvalidConfiguration::CapacityExceeded {
                    requested: millis.len(),
                    capacity: N,
                })?;
        }

        Ok(Self { durations })
    }

    /// Returns the number of durations. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Always false; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the duration at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<D> {
        self.durations.get(index).copied()
    }

    /// Returns the first duration.
    #[inline]
    pub fn first(&self) -> D {
        self.durations[0]
    }

    /// Returns the last duration.
    #[inline]
    pub fn last(&self) -> D {
        self.durations[self.durations.len() - 1]
    }

    /// Returns true if the sequence ends in a terminal zero.
    ///
    /// Such sequences describe one-shot timers: they stay idle until started and
    /// stop after reaching the zero.
    #[inline]
    pub fn is_terminal_zero(&self) -> bool {
        self.last().is_zero()
    }

    /// Total time of one pass through all durations (saturating).
    pub fn cycle_duration(&self) -> D {
        self.durations
            .iter()
            .fold(D::ZERO, |total, &d| total.saturating_add(d))
    }

    /// Iterates over the durations in order.
    pub fn iter(&self) -> impl Iterator<Item = D> + '_ {
        self.durations.iter().copied()
    }

    /// Returns the durations as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[D] {
        &self.durations
    }

    // Timer cursors are always kept below `len()`.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> D {
        self.durations[index]
    }
}

impl<D: TimeDuration, const N: usize> TryFrom<&[D]> for DurationSequence<D, N> {
    type Error = InvalidConfiguration;

    fn try_from(durations: &[D]) -> Result<Self, Self::Error> {
        Self::from_sequence(durations)
    }
}
