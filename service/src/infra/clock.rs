//! [`Clock`] definitions.

use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use common::DateTime;

/// Source of the current [`DateTime`].
pub trait Clock {
    /// Returns the current [`DateTime`].
    fn now(&self) -> DateTime;
}

/// [`Clock`] reading the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct System;

impl Clock for System {
    fn now(&self) -> DateTime {
        DateTime::now()
    }
}

/// [`Clock`] whose time is moved manually.
///
/// Clones share the same time.
#[derive(Clone, Debug)]
pub struct Manual(Arc<RwLock<DateTime>>);

impl Manual {
    /// Creates a new [`Manual`] clock stopped at the provided [`DateTime`].
    #[must_use]
    pub fn new(at: DateTime) -> Self {
        Self(Arc::new(RwLock::new(at)))
    }

    /// Moves this [`Manual`] clock forward by the provided [`Duration`].
    pub fn advance(&self, by: Duration) {
        let mut now = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *now = *now + by;
    }

    /// Sets this [`Manual`] clock to the provided [`DateTime`].
    pub fn set(&self, at: DateTime) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = at;
    }
}

impl Clock for Manual {
    fn now(&self) -> DateTime {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;

    use super::{Clock as _, Manual};

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let start = DateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let clock = Manual::new(start);
        let clone = clock.clone();

        clone.advance(Duration::from_secs(90));
        assert_eq!(clock.now(), start + Duration::from_secs(90));

        clock.set(start);
        assert_eq!(clone.now(), start);
    }
}
