//! [`Occupancy`]-related definitions.

use std::num::TryFromIntError;

use juniper::GraphQLObject;
use service::read;

/// Occupancy of the parking lot.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct Occupancy {
    /// Number of currently parked `Vehicle`s.
    pub parked: i32,

    /// Maximum number of simultaneously parked `Vehicle`s.
    pub capacity: i32,

    /// Number of free parking spots.
    pub free: i32,

    /// Indicator whether no more `Vehicle`s can be checked in.
    pub is_full: bool,
}

impl TryFrom<read::lot::Occupancy> for Occupancy {
    type Error = TryFromIntError;

    fn try_from(occupancy: read::lot::Occupancy) -> Result<Self, Self::Error> {
        Ok(Self {
            parked: occupancy.parked.try_into()?,
            capacity: occupancy.capacity.get().try_into()?,
            free: occupancy.free().try_into()?,
            is_full: occupancy.is_full(),
        })
    }
}
