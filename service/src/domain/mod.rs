//! Domain definitions.

pub mod earnings;
pub mod tariff;
pub mod vehicle;

pub use self::{earnings::Earnings, tariff::Tariff, vehicle::Vehicle};
