//! Core types shared by all timer variants.

/// Duration sequence configuration errors.
///
/// The only failure mode of the crate. Raised synchronously by the configuration
/// entry points; polling and starting never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidConfiguration {
    /// No durations provided.
    EmptySequence,

    /// More durations than the sequence capacity.
    CapacityExceeded {
        /// Number of durations supplied.
        requested: usize,
        /// Capacity of the sequence type.
        capacity: usize,
    },
}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidConfiguration::EmptySequence => {
                write!(f, "duration sequence must have at least one element")
            }
            InvalidConfiguration::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "duration sequence of {} elements exceeds capacity of {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidConfiguration {}
