//! [`Vehicle`]-related definitions.

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLObject, GraphQLScalar};
use service::{command, domain, infra::Clock as _};

use crate::{api, api::scalar, AsError, Context, Error};

/// A parked vehicle.
#[derive(Clone, Debug, From)]
pub struct Vehicle(domain::Vehicle);

/// A vehicle parked in the lot.
#[graphql_object(context = Context)]
impl Vehicle {
    /// License plate of this `Vehicle`, unique across the lot.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vehicle.plate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn plate(&self) -> Plate {
        self.0.plate().clone().into()
    }

    /// Kind of this `Vehicle`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vehicle.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn kind(&self) -> Kind {
        self.0.kind().into()
    }

    /// `DateTime` when this `Vehicle` was checked in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vehicle.checkedInAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn checked_in_at(&self) -> DateTime {
        self.0.checked_in_at().coerce()
    }

    /// Discount card presented on check-in, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vehicle.discountCard",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn discount_card(&self) -> Option<DiscountCard> {
        self.0.discount_card().cloned().map(Into::into)
    }

    /// Number of whole minutes this `Vehicle` has been parked for so far.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vehicle.parkedMinutes",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn parked_minutes(&self, ctx: &Context) -> Result<i32, Error> {
        let now = ctx.service().clock().now();
        i32::try_from(self.0.parked_minutes(now))
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}

/// License plate of a `Vehicle`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "VehiclePlate",
    with = scalar::Via::<domain::vehicle::Plate>,
)]
pub struct Plate(domain::vehicle::Plate);

/// Discount card of a `Vehicle` driver.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "VehicleDiscountCard",
    with = scalar::Via::<domain::vehicle::DiscountCard>,
)]
pub struct DiscountCard(domain::vehicle::DiscountCard);

/// Kind of a `Vehicle`, determining its base price.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "VehicleKind")]
pub enum Kind {
    /// A passenger car.
    Car,

    /// A motorcycle.
    Motorcycle,

    /// A minibus.
    MiniBus,

    /// A bus.
    Bus,
}

impl From<domain::vehicle::Kind> for Kind {
    fn from(kind: domain::vehicle::Kind) -> Self {
        use domain::vehicle::Kind as K;
        match kind {
            K::Car => Self::Car,
            K::Motorcycle => Self::Motorcycle,
            K::MiniBus => Self::MiniBus,
            K::Bus => Self::Bus,
        }
    }
}

impl From<Kind> for domain::vehicle::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Car => Self::Car,
            Kind::Motorcycle => Self::Motorcycle,
            Kind::MiniBus => Self::MiniBus,
            Kind::Bus => Self::Bus,
        }
    }
}

/// Result of a `Vehicle` check-out.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct CheckOutResult {
    /// Checked out `Vehicle`.
    pub vehicle: Vehicle,

    /// `DateTime` when the `Vehicle` was checked out.
    pub checked_out_at: DateTime,

    /// Number of whole minutes the `Vehicle` was parked for.
    pub parked_minutes: i32,

    /// Charged fee.
    pub fee: Money,

    /// Farewell message for the driver.
    pub message: String,
}

impl From<command::check_out_vehicle::Output> for CheckOutResult {
    fn from(output: command::check_out_vehicle::Output) -> Self {
        let command::check_out_vehicle::Output {
            vehicle,
            checked_out_at,
            parked_minutes,
            fee,
        } = output;

        Self {
            vehicle: vehicle.into(),
            checked_out_at: checked_out_at.coerce(),
            // The check-out is already committed at this point, so it must
            // not fail on an unrepresentable duration.
            parked_minutes: i32::try_from(parked_minutes).unwrap_or(i32::MAX),
            fee,
            message: format!("Your fee is {fee}. Come back soon"),
        }
    }
}
