//! [`Database`] implementations.

use common::operations::{By, Commit, Delete, Insert, Select, Transact};
use tracerr::Traced;

use crate::{
    domain::{vehicle, Earnings, Vehicle},
    infra::{database, Database},
    read,
};

use super::{Connection, Memory, NonTx, Tx};

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Memory(Tx::begin(&self.0).await))
    }
}

impl Database<Transact> for Memory<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.commit().await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<Option<Vehicle>, vehicle::Plate>>> for Memory<C>
where
    C: Connection,
{
    type Ok = Option<Vehicle>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Vehicle>, vehicle::Plate>>,
    ) -> Result<Self::Ok, Self::Err> {
        let plate = by.into_inner();
        self.read(|s| s.vehicles.get(&plate).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<read::vehicle::Plates, ()>>> for Memory<C>
where
    C: Connection,
{
    type Ok = read::vehicle::Plates;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::vehicle::Plates, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.vehicles.keys().cloned().collect::<Self::Ok>())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<read::lot::Parked, ()>>> for Memory<C>
where
    C: Connection,
{
    type Ok = read::lot::Parked;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::lot::Parked, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| read::lot::Parked(s.vehicles.len()))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<Earnings, ()>>> for Memory<C>
where
    C: Connection,
{
    type Ok = Earnings;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Earnings, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.earnings).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Insert<Vehicle>> for Memory<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(vehicle): Insert<Vehicle>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|s| {
            drop(s.vehicles.insert(vehicle.plate().clone(), vehicle));
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Delete<By<Option<Vehicle>, vehicle::Plate>>> for Memory<C>
where
    C: Connection,
{
    type Ok = Option<Vehicle>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Option<Vehicle>, vehicle::Plate>>,
    ) -> Result<Self::Ok, Self::Err> {
        let plate = by.into_inner();
        self.write(|s| s.vehicles.remove(&plate))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Insert<Earnings>> for Memory<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(earnings): Insert<Earnings>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|s| s.earnings = earnings)
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Commit, Insert, Select, Transact},
        DateTime, Handler as _,
    };

    use crate::{
        domain::{vehicle, Vehicle},
        infra::Memory,
        read,
    };

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle::new(
            plate.parse().unwrap(),
            vehicle::Kind::Car,
            DateTime::UNIX_EPOCH.coerce(),
            None,
        )
    }

    async fn plates(db: &Memory) -> read::vehicle::Plates {
        db.execute(Select(By::<read::vehicle::Plates, _>::new(())))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn committed_tx_is_published() {
        let db = Memory::new();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(vehicle("AA111AA"))).await.unwrap();
        tx.execute(Commit).await.unwrap();

        assert_eq!(
            plates(&db).await,
            read::vehicle::Plates::Parked(vec!["AA111AA".parse().unwrap()]),
        );
    }

    #[tokio::test]
    async fn dropped_tx_is_discarded() {
        let db = Memory::new();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Insert(vehicle("AA111AA"))).await.unwrap();
        let staged = tx
            .execute(Select(By::<Option<Vehicle>, _>::new(
                "AA111AA".parse::<vehicle::Plate>().unwrap(),
            )))
            .await
            .unwrap();
        assert!(staged.is_some());
        drop(tx);

        assert!(plates(&db).await.is_empty());
    }

    #[tokio::test]
    async fn committed_tx_cannot_be_reused() {
        let db = Memory::new();

        let tx = db.execute(Transact).await.unwrap();
        tx.execute(Commit).await.unwrap();

        assert!(tx.execute(Insert(vehicle("AA111AA"))).await.is_err());
        assert!(tx.execute(Commit).await.is_err());
        assert!(plates(&db).await.is_empty());
    }
}
