//! Parking lot read definitions.

use std::num::NonZeroUsize;

#[cfg(doc)]
use crate::domain::Vehicle;

/// Number of [`Vehicle`]s parked in a lot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Parked(pub usize);

/// Occupancy of a parking lot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occupancy {
    /// Number of currently parked [`Vehicle`]s.
    pub parked: usize,

    /// Maximum number of simultaneously parked [`Vehicle`]s.
    pub capacity: NonZeroUsize,
}

impl Occupancy {
    /// Returns the number of free parking spots.
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity.get().saturating_sub(self.parked)
    }

    /// Indicates whether no more [`Vehicle`]s can be parked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free() == 0
    }
}
