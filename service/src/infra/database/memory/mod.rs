//! In-memory [`Database`] implementation.
//!
//! Keeps the parking lot registry for the lifetime of the process. Writes
//! are serialized: a [`Tx`] holds the registry exclusively from its start
//! till it's committed or dropped, so the checks made inside a [`Tx`] stay
//! valid until its changes are published.

pub mod client;
mod impls;

use std::{collections::HashMap, future::Future};

use derive_more::{Deref, Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{vehicle, Earnings, Vehicle},
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

pub use self::client::{NonTx, Tx};

/// In-memory [`Database`] client.
#[derive(Clone, Debug, Default, Deref)]
pub struct Memory<T = NonTx>(T);

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Contents of a [`Memory`] database.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Parked [`Vehicle`]s by their [`vehicle::Plate`]s.
    vehicles: HashMap<vehicle::Plate, Vehicle>,

    /// [`Earnings`] ledger.
    earnings: Earnings,
}

/// Generic connection to a [`Memory`] database [`State`].
pub trait Connection {
    /// Applies the provided function to the [`State`] for reading.
    ///
    /// # Errors
    ///
    /// If the [`State`] is not accessible anymore.
    fn read<F, R>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>
    where
        F: FnOnce(&State) -> R;

    /// Applies the provided function to the [`State`] for writing.
    ///
    /// # Errors
    ///
    /// If the [`State`] is not accessible anymore.
    fn write<F, R>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>
    where
        F: FnOnce(&mut State) -> R;
}

/// [`Memory`] database [`Error`].
///
/// [`Error`]: std::error::Error
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Tx`] was already committed.
    #[display("`Tx` is already committed")]
    TxFinished,
}
