//! Read entities definitions.

pub mod earnings;
pub mod lot;
pub mod vehicle;
