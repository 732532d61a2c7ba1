//! [`Command`] definition.

pub mod check_in_vehicle;
pub mod check_out_vehicle;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    check_in_vehicle::CheckInVehicle, check_out_vehicle::CheckOutVehicle,
};
