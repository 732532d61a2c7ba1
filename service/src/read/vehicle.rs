//! [`Vehicle`]-related read definitions.

use crate::domain::vehicle::Plate;
#[cfg(doc)]
use crate::domain::Vehicle;

/// [`Plate`]s of the currently parked [`Vehicle`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Plates {
    /// No [`Vehicle`]s are parked.
    Empty,

    /// Non-empty list of parked [`Vehicle`]s' [`Plate`]s, in no particular
    /// order.
    Parked(Vec<Plate>),
}

impl Plates {
    /// Indicates whether no [`Vehicle`]s are parked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl FromIterator<Plate> for Plates {
    fn from_iter<I: IntoIterator<Item = Plate>>(iter: I) -> Self {
        let plates = iter.into_iter().collect::<Vec<_>>();
        if plates.is_empty() {
            Self::Empty
        } else {
            Self::Parked(plates)
        }
    }
}

impl IntoIterator for Plates {
    type Item = Plate;
    type IntoIter = std::vec::IntoIter<Plate>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Empty => Vec::new().into_iter(),
            Self::Parked(plates) => plates.into_iter(),
        }
    }
}
