//! [`Memory`] database clients.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};
use tracerr::Traced;

use crate::infra::database::{self, memory};
#[cfg(doc)]
use crate::infra::database::Memory;

use super::{Connection, State};

/// Non-transactional [`Memory`] database client.
///
/// Every operation is applied atomically on its own.
#[derive(Clone, Debug, Default)]
pub struct NonTx {
    /// Shared [`State`] of the database.
    state: Arc<RwLock<State>>,
}

impl Connection for NonTx {
    async fn read<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&State) -> R,
    {
        Ok(f(&*self.state.read().await))
    }

    async fn write<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&mut State) -> R,
    {
        Ok(f(&mut *self.state.write().await))
    }
}

/// Transactional [`Memory`] database client.
///
/// Holds the [`State`] exclusively until committed or dropped. Operations are
/// applied to a staged copy of the [`State`], published on [`Tx::commit()`]
/// and discarded once the last clone of an uncommitted [`Tx`] is dropped.
///
/// Non-transactional operations issued while a [`Tx`] is alive wait for it to
/// finish, so a [`Tx`] must not be awaited on them.
#[derive(Clone, Debug)]
pub struct Tx {
    /// Inner representation of this client.
    ///
    /// [`None`] once committed.
    inner: Arc<Mutex<Option<Inner>>>,
}

/// Inner representation of the [`Tx`] client.
#[derive(Debug)]
struct Inner {
    /// Exclusively held [`State`] being the last committed one.
    committed: OwnedRwLockWriteGuard<State>,

    /// [`State`] with the changes made by the [`Tx`] so far.
    staged: State,
}

impl Tx {
    /// Starts a new [`Tx`] waiting for the exclusive access to the [`State`]
    /// of the provided [`NonTx`] client.
    pub async fn begin(client: &NonTx) -> Self {
        let committed = Arc::clone(&client.state).write_owned().await;
        let staged = State::clone(&committed);
        Self {
            inner: Arc::new(Mutex::new(Some(Inner { committed, staged }))),
        }
    }

    /// Commits this [`Tx`] client, publishing its changes.
    ///
    /// # Errors
    ///
    /// If this [`Tx`] was committed already.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let Inner {
            mut committed,
            staged,
        } = self
            .inner
            .lock()
            .await
            .take()
            .ok_or(memory::Error::TxFinished)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        *committed = staged;
        Ok(())
    }
}

impl Connection for Tx {
    async fn read<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&State) -> R,
    {
        let inner = self.inner.lock().await;
        let inner = inner
            .as_ref()
            .ok_or(memory::Error::TxFinished)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(f(&inner.staged))
    }

    async fn write<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&mut State) -> R,
    {
        let mut inner = self.inner.lock().await;
        let inner = inner
            .as_mut()
            .ok_or(memory::Error::TxFinished)
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        Ok(f(&mut inner.staged))
    }
}
