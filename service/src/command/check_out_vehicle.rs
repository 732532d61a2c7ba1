//! [`Command`] for checking a [`Vehicle`] out.

use common::{
    operations::{By, Commit, Delete, Insert, Select, Transact, Transacted},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{vehicle::Plate, Tariff};
use crate::{
    domain::{vehicle, Earnings, Vehicle},
    infra::{database, Clock, Database},
    Service,
};

use super::Command;

/// [`Command`] for checking a [`Vehicle`] out.
///
/// Charges the fee according to the [`Tariff`] and records it in the
/// [`Earnings`].
#[derive(Clone, Debug)]
pub struct CheckOutVehicle {
    /// [`Plate`] of the [`Vehicle`] to check out.
    pub plate: vehicle::Plate,
}

/// Output of [`CheckOutVehicle`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Checked out [`Vehicle`].
    pub vehicle: Vehicle,

    /// Moment the [`Vehicle`] was checked out.
    pub checked_out_at: vehicle::CheckOutDateTime,

    /// Number of whole minutes the [`Vehicle`] was parked for.
    pub parked_minutes: u64,

    /// Charged fee.
    pub fee: Money,
}

impl<Db, Clk> Command<CheckOutVehicle> for Service<Db, Clk>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Delete<By<Option<Vehicle>, vehicle::Plate>>,
            Ok = Option<Vehicle>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Earnings, ()>>,
            Ok = Earnings,
            Err = Traced<database::Error>,
        > + Database<Insert<Earnings>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
    Clk: Clock,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CheckOutVehicle,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CheckOutVehicle { plate } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Nothing is committed if the `Vehicle` is absent.
        let Some(vehicle) = tx
            .execute(Delete(By::<Option<Vehicle>, _>::new(plate.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        else {
            log::warn!(%plate, "check-out failed: the vehicle is not parked");
            return Err(tracerr::new!(E::VehicleNotParked(plate)));
        };

        let checked_out_at = self.clock().now().coerce();
        let parked_minutes = vehicle.parked_minutes(checked_out_at);
        let fee = self.config().tariff.fee(
            vehicle.kind(),
            parked_minutes,
            vehicle.has_discount_card(),
        );

        let mut earnings = tx
            .execute(Select(By::<Earnings, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        earnings.record(fee);
        tx.execute(Insert(earnings))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            plate = %vehicle.plate(),
            parked_minutes,
            %fee,
            "vehicle checked out",
        );

        Ok(Output {
            vehicle,
            checked_out_at,
            parked_minutes,
            fee,
        })
    }
}

/// Error of [`CheckOutVehicle`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Vehicle`] with the provided [`Plate`] is not parked.
    #[display("`Vehicle(plate: {_0})` is not parked")]
    VehicleNotParked(#[error(not(source))] vehicle::Plate),
}
