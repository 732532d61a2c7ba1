//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the parked `Vehicle` with the specified plate.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VEHICLE_NOT_PARKED` - no `Vehicle` with the specified plate is
    ///                          parked.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "vehicle",
            otel.name = Self::SPAN_NAME,
            plate = %plate,
        ),
    )]
    pub async fn vehicle(
        plate: api::vehicle::Plate,
        ctx: &Context,
    ) -> Result<api::Vehicle, Error> {
        ctx.service()
            .execute(query::vehicle::ByPlate::by(plate.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| VehicleError::NotParked.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists plates of all the parked `Vehicle`s, in no particular order.
    ///
    /// Empty list means there are no parked `Vehicle`s currently.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "plates",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn plates(
        ctx: &Context,
    ) -> Result<Vec<api::vehicle::Plate>, Error> {
        ctx.service()
            .execute(query::vehicles::Plates::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|plates| plates.into_iter().map(Into::into).collect())
    }

    /// Returns the current `Occupancy` of the parking lot.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "occupancy",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn occupancy(ctx: &Context) -> Result<api::Occupancy, Error> {
        ctx.service()
            .execute(query::lot::Occupancy)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .try_into()
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Returns the `Earnings` collected from the checked out `Vehicle`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "earnings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn earnings(ctx: &Context) -> Result<api::Earnings, Error> {
        ctx.service()
            .execute(query::earnings::Summary)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .try_into()
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}

define_error! {
    enum VehicleError {
        #[code = "VEHICLE_NOT_PARKED"]
        #[status = NOT_FOUND]
        #[message = "`Vehicle` with the specified plate is not parked"]
        NotParked,
    }
}
