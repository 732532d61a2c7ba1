//! Service contains the business logic of the parking lot.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::num::NonZeroUsize;

use smart_default::SmartDefault;

#[cfg(doc)]
use crate::domain::Vehicle;
#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query};

/// Default maximum number of simultaneously parked [`Vehicle`]s.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Maximum number of simultaneously parked [`Vehicle`]s.
    #[default(DEFAULT_CAPACITY)]
    pub capacity: NonZeroUsize,

    /// [`Tariff`] to charge parked [`Vehicle`]s by.
    ///
    /// [`Tariff`]: domain::Tariff
    pub tariff: domain::Tariff,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Clk = infra::clock::System> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`infra::Clock`] of this [`Service`].
    clock: Clk,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] reading the system time.
    pub fn new(config: Config, database: Db) -> Self {
        Self::with_clock(config, database, infra::clock::System)
    }
}

impl<Db, Clk> Service<Db, Clk> {
    /// Creates a new [`Service`] reading the time from the provided
    /// [`infra::Clock`].
    pub fn with_clock(config: Config, database: Db, clock: Clk) -> Self {
        Self {
            config,
            database,
            clock,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`infra::Clock`] of this [`Service`].
    #[must_use]
    pub fn clock(&self) -> &Clk {
        &self.clock
    }
}
