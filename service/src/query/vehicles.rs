//! [`Query`] collection related to the multiple [`Vehicle`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Vehicle, Query};

use super::DatabaseQuery;

/// Queries [`read::vehicle::Plates`] of all the parked [`Vehicle`]s.
pub type Plates = DatabaseQuery<By<read::vehicle::Plates, ()>>;

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use common::{DateTime, Handler as _};

    use crate::{
        command::{CheckInVehicle, CheckOutVehicle},
        domain::vehicle,
        infra::{clock, Memory},
        read, Config, Service,
    };

    use super::Plates;

    #[tokio::test]
    async fn lists_parked_plates() {
        let svc = Service::with_clock(
            Config::default(),
            Memory::new(),
            clock::Manual::new(DateTime::UNIX_EPOCH),
        );
        assert_eq!(
            svc.execute(Plates::by(())).await.unwrap(),
            read::vehicle::Plates::Empty,
        );

        for plate in ["AA111AA", "B222BBB", "CC333CC"] {
            drop(
                svc.execute(CheckInVehicle {
                    plate: plate.parse().unwrap(),
                    kind: vehicle::Kind::Car,
                    discount_card: None,
                })
                .await
                .unwrap(),
            );
        }
        drop(
            svc.execute(CheckOutVehicle {
                plate: "B222BBB".parse().unwrap(),
            })
            .await
            .unwrap(),
        );

        let plates = svc
            .execute(Plates::by(()))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.to_string())
            .collect::<HashSet<_>>();
        assert_eq!(
            plates,
            HashSet::from(["AA111AA".to_owned(), "CC333CC".to_owned()]),
        );
    }
}
