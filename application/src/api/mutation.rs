//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Checks the `Vehicle` in, parking it in the lot.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LOT_IS_FULL` - there are no free parking spots;
    /// - `VEHICLE_ALREADY_PARKED` - a `Vehicle` with the provided plate is
    ///                              already parked.
    #[tracing::instrument(
        skip_all,
        fields(
            discount_card = ?discount_card.as_ref().map(ToString::to_string),
            gql.name = "checkIn",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            plate = %plate,
        ),
    )]
    pub async fn check_in(
        plate: api::vehicle::Plate,
        kind: api::vehicle::Kind,
        discount_card: Option<api::vehicle::DiscountCard>,
        ctx: &Context,
    ) -> Result<api::Vehicle, Error> {
        ctx.service()
            .execute(command::CheckInVehicle {
                plate: plate.into(),
                kind: kind.into(),
                discount_card: discount_card.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Checks the `Vehicle` out, charging the parking fee.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VEHICLE_NOT_PARKED` - no `Vehicle` with the provided plate is
    ///                          parked.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "checkOut",
            otel.name = Self::SPAN_NAME,
            plate = %plate,
        ),
    )]
    pub async fn check_out(
        plate: api::vehicle::Plate,
        ctx: &Context,
    ) -> Result<api::vehicle::CheckOutResult, Error> {
        ctx.service()
            .execute(command::CheckOutVehicle {
                plate: plate.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

impl AsError for command::check_in_vehicle::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LOT_IS_FULL"]
                #[status = CONFLICT]
                #[message = "Sorry, the check-in failed: the parking lot is \
                             full"]
                LotIsFull,

                #[code = "VEHICLE_ALREADY_PARKED"]
                #[status = CONFLICT]
                #[message = "Sorry, the check-in failed: `Vehicle` with the \
                             provided plate is already parked"]
                AlreadyParked,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::LotIsFull => Some(Error::LotIsFull.into()),
            Self::AlreadyParked(_) => Some(Error::AlreadyParked.into()),
        }
    }
}

impl AsError for command::check_out_vehicle::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VEHICLE_NOT_PARKED"]
                #[status = NOT_FOUND]
                #[message = "Sorry, the check-out failed: `Vehicle` with the \
                             provided plate is not parked"]
                NotParked,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VehicleNotParked(_) => Some(Error::NotParked.into()),
        }
    }
}
