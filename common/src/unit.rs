//! Marker types.

/// Marker type describing a vehicle entering a parking lot.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a vehicle leaving a parking lot.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;
