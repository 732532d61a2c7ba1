//! [`Query`] collection related to the [`Earnings`].

use common::{
    operations::{By, Select},
    Money,
};
use tracerr::Traced;

use crate::{
    domain::Earnings,
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] of the [`read::earnings::Summary`] of the [`Earnings`].
///
/// Reading the [`Earnings`] never changes them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summary;

impl<Db, Clk> Query<Summary> for Service<Db, Clk>
where
    Db: Database<
        Select<By<Earnings, ()>>,
        Ok = Earnings,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::earnings::Summary;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Summary) -> Result<Self::Ok, Self::Err> {
        let earnings = self
            .database()
            .execute(Select(By::<Earnings, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::earnings::Summary {
            transactions: earnings.transactions(),
            revenue: Money::new(
                earnings.revenue(),
                self.config().tariff.currency(),
            ),
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Currency, DateTime, Handler as _, Money};
    use rust_decimal::Decimal;

    use crate::{
        command::{CheckInVehicle, CheckOutVehicle},
        domain::vehicle,
        infra::{clock, Memory},
        Config, Service,
    };

    use super::Summary;

    #[tokio::test]
    async fn starts_empty() {
        let svc = Service::new(Config::default(), Memory::new());

        let summary = svc.execute(Summary).await.unwrap();

        assert_eq!(summary.transactions, 0);
        assert_eq!(summary.revenue, Money::zero(Currency::Usd));
    }

    #[tokio::test]
    async fn is_idempotent() {
        let svc = Service::with_clock(
            Config::default(),
            Memory::new(),
            clock::Manual::new(DateTime::UNIX_EPOCH),
        );
        drop(
            svc.execute(CheckInVehicle {
                plate: "AA111AA".parse().unwrap(),
                kind: vehicle::Kind::Bus,
                discount_card: None,
            })
            .await
            .unwrap(),
        );
        svc.clock().advance(Duration::from_secs(3 * 60 * 60));
        drop(
            svc.execute(CheckOutVehicle {
                plate: "AA111AA".parse().unwrap(),
            })
            .await
            .unwrap(),
        );

        let first = svc.execute(Summary).await.unwrap();
        let second = svc.execute(Summary).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.transactions, 1);
        // 30 + 4 extra blocks * 5
        assert_eq!(
            first.revenue,
            Money::new(Decimal::from(50), Currency::Usd),
        );
    }
}
