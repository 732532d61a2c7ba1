//! [`Earnings`]-related read definitions.

use common::Money;

#[cfg(doc)]
use crate::domain::Earnings;

/// Summary of the [`Earnings`] collected so far.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Number of completed check-outs.
    pub transactions: u64,

    /// Total amount of the collected fees.
    pub revenue: Money,
}
