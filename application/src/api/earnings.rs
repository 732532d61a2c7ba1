//! [`Earnings`]-related definitions.

use std::num::TryFromIntError;

use common::Money;
use juniper::GraphQLObject;
use service::read;

/// Fees collected from the checked out `Vehicle`s.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Earnings {
    /// Number of completed check-outs.
    pub transactions: i32,

    /// Total amount of the collected fees.
    pub revenue: Money,

    /// Human-readable summary.
    pub message: String,
}

impl TryFrom<read::earnings::Summary> for Earnings {
    type Error = TryFromIntError;

    fn try_from(summary: read::earnings::Summary) -> Result<Self, Self::Error> {
        let read::earnings::Summary {
            transactions,
            revenue,
        } = summary;

        Ok(Self {
            transactions: transactions.try_into()?,
            revenue,
            message: format!(
                "{transactions} vehicles have checked out and have earnings \
                 of {revenue}",
            ),
        })
    }
}
