//! [`Tariff`] definitions.

use std::time::Duration;

use common::{Currency, Money, Percent};
use derive_more::{Display, Error};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(doc)]
use crate::domain::Vehicle;
use crate::domain::vehicle;

/// Pricing rules of a parking lot.
///
/// Parking within the flat period costs the [`vehicle::Kind::base_price()`].
/// Every extra block started past the flat period adds the extra block price,
/// where the number of extra blocks is rounded to the nearest integer (halves
/// away from zero) rather than up. A discount card reduces the total by the
/// discount [`Percent`], truncating to a whole amount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tariff {
    /// Number of minutes charged with the base price only.
    flat_period: u64,

    /// Number of minutes in a single extra block.
    extra_block: u64,

    /// Price of a single extra block.
    extra_block_price: Decimal,

    /// Discount applied to [`Vehicle`]s having a discount card.
    discount: Percent,

    /// [`Currency`] of the charged fees.
    currency: Currency,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            flat_period: 120,
            extra_block: 15,
            extra_block_price: Decimal::from(5),
            discount: Percent::new(Decimal::from(15))
                .unwrap_or_else(|| unreachable!("`15%` is a valid `Percent`")),
            currency: Currency::Usd,
        }
    }
}

impl Tariff {
    /// Maximum allowed price of a single extra block.
    ///
    /// Keeps the fee of any parking duration within [`Decimal::MAX`].
    pub const MAX_EXTRA_BLOCK_PRICE: Decimal =
        Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Creates a new [`Tariff`] out of the provided parameters.
    ///
    /// Durations are truncated to whole minutes.
    ///
    /// # Errors
    ///
    /// Errors if the `extra_block` is shorter than a minute, or the
    /// `extra_block_price` is negative or exceeds the
    /// [`Tariff::MAX_EXTRA_BLOCK_PRICE`].
    pub fn new(
        flat_period: Duration,
        extra_block: Duration,
        extra_block_price: Decimal,
        discount: Percent,
        currency: Currency,
    ) -> Result<Self, TariffError> {
        let extra_block = extra_block.as_secs() / 60;
        if extra_block == 0 {
            return Err(TariffError::ExtraBlockTooShort);
        }
        if extra_block_price.is_sign_negative() {
            return Err(TariffError::NegativeExtraBlockPrice);
        }
        if extra_block_price > Self::MAX_EXTRA_BLOCK_PRICE {
            return Err(TariffError::ExtraBlockPriceTooHigh);
        }

        Ok(Self {
            flat_period: flat_period.as_secs() / 60,
            extra_block,
            extra_block_price,
            discount,
            currency,
        })
    }

    /// Returns [`Currency`] of the fees charged by this [`Tariff`].
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Calculates the fee for parking a [`Vehicle`] of the provided
    /// [`vehicle::Kind`] for the provided number of whole minutes.
    #[must_use]
    pub fn fee(
        &self,
        kind: vehicle::Kind,
        parked_minutes: u64,
        has_discount_card: bool,
    ) -> Money {
        let mut fee = Money::new(kind.base_price(), self.currency);

        if parked_minutes > self.flat_period {
            let excess = Decimal::from(parked_minutes - self.flat_period)
                / Decimal::from(self.extra_block);
            let blocks = excess
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            fee.amount = fee
                .amount
                .saturating_add(blocks.saturating_mul(self.extra_block_price));
        }

        if has_discount_card {
            fee = fee * self.discount.complement_ratio();
        }

        fee.floor()
    }
}

/// Error of creating a [`Tariff`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum TariffError {
    /// Extra block is shorter than a minute.
    #[display("extra block must last at least one minute")]
    ExtraBlockTooShort,

    /// Extra block price is negative.
    #[display("extra block price must not be negative")]
    NegativeExtraBlockPrice,

    /// Extra block price exceeds the [`Tariff::MAX_EXTRA_BLOCK_PRICE`].
    #[display(
        "extra block price must not exceed {}",
        Tariff::MAX_EXTRA_BLOCK_PRICE,
    )]
    ExtraBlockPriceTooHigh,
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Currency, Money, Percent};
    use rust_decimal::Decimal;

    use crate::domain::vehicle::Kind;

    use super::{Tariff, TariffError};

    fn usd(amount: i64) -> Money {
        Money::new(Decimal::from(amount), Currency::Usd)
    }

    #[test]
    fn flat_period_is_inclusive() {
        let tariff = Tariff::default();

        assert_eq!(tariff.fee(Kind::Car, 0, false), usd(20));
        assert_eq!(tariff.fee(Kind::Car, 120, false), usd(20));
        assert_eq!(tariff.fee(Kind::Bus, 120, false), usd(30));
    }

    #[test]
    fn rounds_extra_blocks_to_nearest() {
        let tariff = Tariff::default();

        // 1/15 of a block rounds down to zero blocks.
        assert_eq!(tariff.fee(Kind::Car, 121, false), usd(20));
        // 6/15 = 0.4 of a block still rounds down.
        assert_eq!(tariff.fee(Kind::Car, 126, false), usd(20));
        // 7.5/15 would be a half, 8/15 rounds up.
        assert_eq!(tariff.fee(Kind::Car, 128, false), usd(25));
        assert_eq!(tariff.fee(Kind::Car, 135, false), usd(25));
        assert_eq!(tariff.fee(Kind::Car, 142, false), usd(25));
        assert_eq!(tariff.fee(Kind::Car, 143, false), usd(30));
        assert_eq!(tariff.fee(Kind::MiniBus, 180, false), usd(45));
    }

    #[test]
    fn rounds_exact_halves_away_from_zero() {
        let tariff = Tariff::new(
            Duration::from_secs(120 * 60),
            Duration::from_secs(2 * 60),
            Decimal::from(5),
            Percent::new(Decimal::from(15)).unwrap(),
            Currency::Usd,
        )
        .unwrap();

        // 1/2 block rounds to 1 block.
        assert_eq!(tariff.fee(Kind::Car, 121, false), usd(25));
        // 3/2 blocks round to 2 blocks.
        assert_eq!(tariff.fee(Kind::Car, 123, false), usd(30));
    }

    #[test]
    fn discount_truncates() {
        let tariff = Tariff::default();

        assert_eq!(tariff.fee(Kind::Motorcycle, 150, true), usd(21));
        assert_eq!(tariff.fee(Kind::Motorcycle, 150, false), usd(25));
        // 20 * 0.85 = 17 exactly.
        assert_eq!(tariff.fee(Kind::Car, 60, true), usd(17));
        // 30 * 0.85 = 25.5
        assert_eq!(tariff.fee(Kind::Bus, 10, true), usd(25));
    }

    #[test]
    fn uses_configured_currency() {
        let tariff = Tariff::new(
            Duration::from_secs(60 * 60),
            Duration::from_secs(30 * 60),
            Decimal::from(10),
            Percent::new(Decimal::ZERO).unwrap(),
            Currency::Eur,
        )
        .unwrap();

        assert_eq!(
            tariff.fee(Kind::Car, 90, true),
            Money::new(Decimal::from(30), Currency::Eur),
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        let discount = Percent::new(Decimal::from(15)).unwrap();

        assert!(matches!(
            Tariff::new(
                Duration::ZERO,
                Duration::from_secs(59),
                Decimal::ONE,
                discount,
                Currency::Usd,
            ),
            Err(TariffError::ExtraBlockTooShort),
        ));
        assert!(matches!(
            Tariff::new(
                Duration::ZERO,
                Duration::from_secs(60),
                Decimal::NEGATIVE_ONE,
                discount,
                Currency::Usd,
            ),
            Err(TariffError::NegativeExtraBlockPrice),
        ));
        assert!(matches!(
            Tariff::new(
                Duration::ZERO,
                Duration::from_secs(60),
                "40000000000000000000000000000".parse().unwrap(),
                discount,
                Currency::Usd,
            ),
            Err(TariffError::ExtraBlockPriceTooHigh),
        ));
    }

    #[test]
    fn charges_longest_stay_at_highest_price() {
        let tariff = Tariff::new(
            Duration::from_secs(120 * 60),
            Duration::from_secs(60),
            Tariff::MAX_EXTRA_BLOCK_PRICE,
            Percent::new(Decimal::from(15)).unwrap(),
            Currency::Usd,
        )
        .unwrap();

        let blocks = Decimal::from(u64::MAX - 120);
        assert_eq!(
            tariff.fee(Kind::Car, u64::MAX, false).amount,
            blocks * Tariff::MAX_EXTRA_BLOCK_PRICE + Decimal::from(20),
        );
        assert!(
            tariff.fee(Kind::Bus, u64::MAX, true).amount
                < tariff.fee(Kind::Bus, u64::MAX, false).amount,
        );
    }
}
