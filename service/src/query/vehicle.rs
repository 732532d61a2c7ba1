//! [`Query`] collection related to a single [`Vehicle`].

use common::operations::By;

use crate::domain::{vehicle, Vehicle};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a parked [`Vehicle`] by its [`vehicle::Plate`].
pub type ByPlate = DatabaseQuery<By<Option<Vehicle>, vehicle::Plate>>;
