//! [`Handler`] abstractions.
//!
//! Commands, queries and storage operations are all expressed as a
//! [`Handler`] of some argument type, so each layer is free to pick the
//! operations it supports by implementing the trait for them.

use std::future::Future;

/// Executable handler of `Args`.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
