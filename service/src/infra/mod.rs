//! Infrastructure layer.

pub mod clock;
pub mod database;

pub use self::{clock::Clock, database::Database};
#[cfg(feature = "memory")]
pub use self::database::{memory, Memory};
