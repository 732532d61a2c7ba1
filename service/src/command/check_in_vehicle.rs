//! [`Command`] for checking a [`Vehicle`] in.

use common::operations::{By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::vehicle::{DiscountCard, Kind, Plate};
use crate::{
    domain::{vehicle, Vehicle},
    infra::{database, Clock, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for checking a [`Vehicle`] in.
///
/// The [`Vehicle`] is admitted only if the lot has a free spot and no
/// [`Vehicle`] with the same [`Plate`] is parked already.
#[derive(Clone, Debug)]
pub struct CheckInVehicle {
    /// [`Plate`] of the [`Vehicle`] to check in.
    pub plate: vehicle::Plate,

    /// [`Kind`] of the [`Vehicle`] to check in.
    pub kind: vehicle::Kind,

    /// [`DiscountCard`] presented on check-in, if any.
    pub discount_card: Option<vehicle::DiscountCard>,
}

impl<Db, Clk> Command<CheckInVehicle> for Service<Db, Clk>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<read::lot::Parked, ()>>,
            Ok = read::lot::Parked,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Vehicle>, vehicle::Plate>>,
            Ok = Option<Vehicle>,
            Err = Traced<database::Error>,
        > + Database<Insert<Vehicle>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
    Clk: Clock,
{
    type Ok = Vehicle;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CheckInVehicle,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CheckInVehicle {
            plate,
            kind,
            discount_card,
        } = cmd;

        // Holds the lot exclusively till committed, so neither the capacity
        // nor the plate uniqueness can change in between.
        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let read::lot::Parked(parked) = tx
            .execute(Select(By::<read::lot::Parked, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if parked >= self.config().capacity.get() {
            log::warn!(%plate, parked, "check-in denied: the lot is full");
            return Err(tracerr::new!(E::LotIsFull));
        }

        let existing = tx
            .execute(Select(By::<Option<Vehicle>, _>::new(plate.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            log::warn!(%plate, "check-in denied: the plate is parked already");
            return Err(tracerr::new!(E::AlreadyParked(plate)));
        }

        let vehicle = Vehicle::new(
            plate,
            kind,
            self.clock().now().coerce(),
            discount_card,
        );

        tx.execute(Insert(vehicle.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            plate = %vehicle.plate(),
            kind = %vehicle.kind(),
            discount_card = vehicle.has_discount_card(),
            "vehicle checked in",
        );

        Ok(vehicle)
    }
}

/// Error of [`CheckInVehicle`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Vehicle`] with the same [`Plate`] is parked already.
    #[display("`Vehicle(plate: {_0})` is parked already")]
    AlreadyParked(#[error(not(source))] vehicle::Plate),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Parking lot has no free spots.
    #[display("Parking lot is full")]
    LotIsFull,
}
