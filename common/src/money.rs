//! [`Money`]-related definitions.

use std::{fmt, ops, str::FromStr};

use rust_decimal::Decimal;

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the provided `amount` in the provided
    /// [`Currency`].
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the largest whole [`Money`] amount not exceeding this one.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.amount.floor(), self.currency)
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount * rhs, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        write!(f, "{}{currency}", amount.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let at = s.len() - 3;
        if !s.is_char_boundary(at) {
            return Err("invalid currency");
        }
        let (amount, currency) = s.split_at(at);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Russian Ruble."]
        Rub = 3,
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("21.25USD").unwrap(),
            Money::new(decimal("21.25"), Currency::Usd),
        );
        assert_eq!(
            Money::from_str("30EUR").unwrap(),
            Money::new(decimal("30"), Currency::Eur),
        );
        assert_eq!(
            Money::from_str("15.5RUB").unwrap(),
            Money::new(decimal("15.5"), Currency::Rub),
        );

        assert!(Money::from_str("20").is_err());
        assert!(Money::from_str("20.00").is_err());
        assert!(Money::from_str("20Us").is_err());
        assert!(Money::from_str("20Usdollar").is_err());
        assert!(Money::from_str("20€€").is_err());
        assert!(Money::from_str("twentyUSD").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money::new(decimal("21.25"), Currency::Usd).to_string(),
            "21.25USD",
        );
        assert_eq!(
            Money::new(decimal("25.00"), Currency::Usd).to_string(),
            "25USD",
        );
        assert_eq!(
            Money::new(decimal("25.0"), Currency::Eur).to_string(),
            "25EUR",
        );
        assert_eq!(Money::zero(Currency::Rub).to_string(), "0RUB");
    }

    #[test]
    fn floors_towards_zero() {
        let fee = Money::new(decimal("25"), Currency::Usd) * decimal("0.85");

        assert_eq!(fee.amount, decimal("21.25"));
        assert_eq!(fee.floor(), Money::new(decimal("21"), Currency::Usd));
    }
}
