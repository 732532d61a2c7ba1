//! [`Earnings`] definitions.

use common::Money;
use rust_decimal::Decimal;

#[cfg(doc)]
use crate::domain::Vehicle;

/// Ledger of the fees collected from checked out [`Vehicle`]s.
///
/// Both counters only grow, and are always updated together.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Earnings {
    /// Number of completed check-outs.
    transactions: u64,

    /// Total amount of the collected fees.
    revenue: Decimal,
}

impl Earnings {
    /// Records the provided `fee` collected on a check-out.
    pub fn record(&mut self, fee: Money) {
        self.transactions = self.transactions.saturating_add(1);
        self.revenue = self.revenue.saturating_add(fee.amount);
    }

    /// Returns the number of completed check-outs.
    #[must_use]
    pub fn transactions(&self) -> u64 {
        self.transactions
    }

    /// Returns the total amount of the collected fees.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.revenue
    }
}
