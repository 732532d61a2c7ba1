//! GraphQL API definitions.

pub mod earnings;
mod mutation;
pub mod occupancy;
mod query;
pub mod scalar;
pub mod vehicle;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{
    earnings::Earnings, mutation::Mutation, occupancy::Occupancy,
    query::Query, vehicle::Vehicle,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

#[cfg(test)]
mod spec {
    use juniper::{graphql_value, DefaultScalarValue, ExecutionError, Value};
    use service::infra::Memory;

    use crate::{Context, Service};

    use super::schema;

    fn context() -> Context {
        Context::new(Service::new(service::Config::default(), Memory::new()))
    }

    async fn execute(
        doc: &str,
        ctx: &Context,
    ) -> (Value, Vec<ExecutionError<DefaultScalarValue>>) {
        juniper::execute(doc, None, &schema(), &juniper::Variables::new(), ctx)
            .await
            .unwrap()
    }

    fn code(err: &ExecutionError<DefaultScalarValue>) -> Option<&Value> {
        err.error()
            .extensions()
            .as_object_value()?
            .get_field_value("code")
    }

    #[tokio::test]
    async fn checks_vehicle_in_and_out() {
        let ctx = context();

        let (res, errs) = execute(
            r#"mutation {
                checkIn(plate: "AA111AA", kind: MINI_BUS) {
                    plate
                    kind
                    discountCard
                }
            }"#,
            &ctx,
        )
        .await;
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({"checkIn": {
                "plate": "AA111AA",
                "kind": "MINI_BUS",
                "discountCard": null,
            }}),
        );

        let (res, errs) = execute(
            r#"{
                plates
                occupancy { parked capacity free isFull }
            }"#,
            &ctx,
        )
        .await;
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({
                "plates": ["AA111AA"],
                "occupancy": {
                    "parked": 1,
                    "capacity": 20,
                    "free": 19,
                    "isFull": false,
                },
            }),
        );

        let (res, errs) = execute(
            r#"mutation {
                checkOut(plate: "AA111AA") {
                    vehicle { plate }
                    parkedMinutes
                    fee
                    message
                }
            }"#,
            &ctx,
        )
        .await;
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({"checkOut": {
                "vehicle": {"plate": "AA111AA"},
                "parkedMinutes": 0,
                "fee": "25USD",
                "message": "Your fee is 25USD. Come back soon",
            }}),
        );

        let (res, errs) = execute(
            "{ plates earnings { transactions revenue message } }",
            &ctx,
        )
        .await;
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({
                "plates": [],
                "earnings": {
                    "transactions": 1,
                    "revenue": "25USD",
                    "message": "1 vehicles have checked out and have \
                                earnings of 25USD",
                },
            }),
        );
    }

    #[tokio::test]
    async fn denies_duplicate_check_in() {
        let ctx = context();
        let doc = r#"mutation {
            checkIn(
                plate: "AA111AA",
                kind: CAR,
                discountCard: "DISCOUNT_CARD_001",
            ) { plate }
        }"#;

        let (_, errs) = execute(doc, &ctx).await;
        assert!(errs.is_empty(), "{errs:?}");

        let (_, errs) = execute(doc, &ctx).await;
        assert_eq!(errs.len(), 1);
        assert_eq!(
            code(&errs[0]),
            Some(&graphql_value!("VEHICLE_ALREADY_PARKED")),
        );
        assert!(errs[0]
            .error()
            .message()
            .starts_with("Sorry, the check-in failed"));
        assert_eq!(ctx.error_status_code(), http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn denies_check_out_of_absent_vehicle() {
        let ctx = context();

        let (_, errs) = execute(
            r#"mutation { checkOut(plate: "ZZ999ZZ") { fee } }"#,
            &ctx,
        )
        .await;

        assert_eq!(errs.len(), 1);
        assert_eq!(
            code(&errs[0]),
            Some(&graphql_value!("VEHICLE_NOT_PARKED")),
        );
        assert!(errs[0]
            .error()
            .message()
            .starts_with("Sorry, the check-out failed"));
        assert_eq!(ctx.error_status_code(), http::StatusCode::NOT_FOUND);

        let (res, errs) =
            execute("{ earnings { transactions revenue } }", &ctx).await;
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({"earnings": {
                "transactions": 0,
                "revenue": "0USD",
            }}),
        );
    }

    #[tokio::test]
    async fn reports_absent_vehicle() {
        let ctx = context();

        let (_, errs) =
            execute(r#"{ vehicle(plate: "ZZ999ZZ") { kind } }"#, &ctx).await;

        assert_eq!(errs.len(), 1);
        assert_eq!(
            code(&errs[0]),
            Some(&graphql_value!("VEHICLE_NOT_PARKED")),
        );
    }

    #[tokio::test]
    async fn rejects_invalid_plate() {
        let ctx = context();

        let res = juniper::execute(
            r#"mutation { checkIn(plate: "", kind: CAR) { plate } }"#,
            None,
            &schema(),
            &juniper::Variables::new(),
            &ctx,
        )
        .await;

        assert!(res.is_err());
    }
}
