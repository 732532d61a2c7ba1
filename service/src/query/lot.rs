//! [`Query`] collection related to the parking lot.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Vehicle;
use crate::{
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] of the current [`read::lot::Occupancy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Occupancy;

impl<Db, Clk> Query<Occupancy> for Service<Db, Clk>
where
    Db: Database<
        Select<By<read::lot::Parked, ()>>,
        Ok = read::lot::Parked,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::lot::Occupancy;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Occupancy) -> Result<Self::Ok, Self::Err> {
        let read::lot::Parked(parked) = self
            .database()
            .execute(Select(By::<read::lot::Parked, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::lot::Occupancy {
            parked,
            capacity: self.config().capacity,
        })
    }
}
