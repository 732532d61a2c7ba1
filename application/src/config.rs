//! [`Config`]-related definitions.

use std::{num::NonZeroUsize, time};

use common::{Currency, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Parking lot configuration.
    pub lot: Lot,

    /// Tariff configuration.
    pub tariff: Tariff,
}

impl TryFrom<Service> for service::Config {
    type Error = ServiceError;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            lot: Lot { capacity },
            tariff:
                Tariff {
                    flat_period,
                    extra_block,
                    extra_block_price,
                    discount,
                    currency,
                },
        } = value;

        Ok(Self {
            capacity: NonZeroUsize::new(capacity)
                .ok_or(ServiceError::ZeroCapacity)?,
            tariff: domain::Tariff::new(
                flat_period,
                extra_block,
                extra_block_price,
                Percent::new(discount)
                    .ok_or(ServiceError::InvalidDiscount(discount))?,
                currency,
            )?,
        })
    }
}

/// Error of converting [`Service`] configuration into a [`service::Config`].
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ServiceError {
    /// `lot.capacity` is zero.
    #[display("`lot.capacity` must be positive")]
    ZeroCapacity,

    /// `tariff.discount` is not a valid percentage.
    #[display("`tariff.discount` must be in `0..=100` range, got `{_0}`")]
    InvalidDiscount(#[error(not(source))] Decimal),

    /// Tariff parameters are inconsistent.
    #[display("invalid `tariff`: {_0}")]
    #[from]
    Tariff(domain::tariff::TariffError),
}

/// Parking lot configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Lot {
    /// Maximum number of simultaneously parked vehicles.
    #[default(service::DEFAULT_CAPACITY.get())]
    pub capacity: usize,
}

/// Tariff configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Tariff {
    /// Period charged with the base price of a vehicle only.
    #[default(time::Duration::from_secs(2 * 60 * 60))]
    #[serde(with = "humantime_serde")]
    pub flat_period: time::Duration,

    /// Length of a single extra block charged past the flat period.
    #[default(time::Duration::from_secs(15 * 60))]
    #[serde(with = "humantime_serde")]
    pub extra_block: time::Duration,

    /// Price of a single extra block.
    #[default(Decimal::from(5))]
    pub extra_block_price: Decimal,

    /// Discount percentage for vehicles with a discount card.
    #[default(Decimal::from(15))]
    pub discount: Decimal,

    /// Currency of the charged fees.
    #[default(Currency::Usd)]
    pub currency: Currency,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
