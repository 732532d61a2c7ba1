//! [`Vehicle`] definitions.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display};
use rust_decimal::Decimal;

/// Vehicle parked in a lot.
///
/// A [`Vehicle`] is identified by its [`Plate`] only: two [`Vehicle`]s with
/// the same [`Plate`] are equal, even if the rest of their fields differ.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// [`Plate`] of this [`Vehicle`].
    plate: Plate,

    /// [`Kind`] of this [`Vehicle`].
    kind: Kind,

    /// [`DateTime`] when this [`Vehicle`] was checked in.
    checked_in_at: CheckInDateTime,

    /// [`DiscountCard`] of this [`Vehicle`], if any.
    discount_card: Option<DiscountCard>,
}

impl Vehicle {
    /// Creates a new [`Vehicle`] checked in at the provided [`DateTime`].
    #[must_use]
    pub fn new(
        plate: Plate,
        kind: Kind,
        checked_in_at: CheckInDateTime,
        discount_card: Option<DiscountCard>,
    ) -> Self {
        Self {
            plate,
            kind,
            checked_in_at,
            discount_card,
        }
    }

    /// Returns [`Plate`] of this [`Vehicle`].
    #[must_use]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    /// Returns [`Kind`] of this [`Vehicle`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns [`DateTime`] when this [`Vehicle`] was checked in.
    #[must_use]
    pub fn checked_in_at(&self) -> CheckInDateTime {
        self.checked_in_at
    }

    /// Returns [`DiscountCard`] of this [`Vehicle`], if any.
    #[must_use]
    pub fn discount_card(&self) -> Option<&DiscountCard> {
        self.discount_card.as_ref()
    }

    /// Indicates whether this [`Vehicle`] has a [`DiscountCard`].
    #[must_use]
    pub fn has_discount_card(&self) -> bool {
        self.discount_card.is_some()
    }

    /// Returns the number of whole minutes this [`Vehicle`] is parked for at
    /// the provided `now` moment.
    ///
    /// `0` is returned if `now` precedes the check-in moment.
    #[must_use]
    pub fn parked_minutes<Of: ?Sized>(&self, now: DateTimeOf<Of>) -> u64 {
        now.saturating_since(self.checked_in_at).as_secs() / 60
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

define_kind! {
    #[doc = "Kind of a [`Vehicle`]."]
    enum Kind {
        #[doc = "Passenger car."]
        Car = 1,

        #[doc = "Motorcycle."]
        Motorcycle = 2,

        #[doc = "Minibus."]
        MiniBus = 3,

        #[doc = "Bus."]
        Bus = 4,
    }
}

impl Kind {
    /// Returns the base price of parking a [`Vehicle`] of this [`Kind`]
    /// within the flat period of a [`Tariff`].
    ///
    /// [`Tariff`]: crate::domain::Tariff
    #[must_use]
    pub fn base_price(self) -> Decimal {
        Decimal::from(match self {
            Self::Car => 20,
            Self::Motorcycle => 15,
            Self::MiniBus => 25,
            Self::Bus => 30,
        })
    }
}

/// License plate of a [`Vehicle`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Plate(String);

impl Plate {
    /// Creates a new [`Plate`] if the given `plate` is valid.
    #[must_use]
    pub fn new(plate: impl Into<String>) -> Option<Self> {
        let plate = plate.into();
        Self::check(&plate).then_some(Self(plate))
    }

    /// Checks whether the given `plate` is a valid [`Plate`].
    fn check(plate: impl AsRef<str>) -> bool {
        let plate = plate.as_ref();
        plate.trim() == plate && !plate.is_empty() && plate.len() <= 32
    }
}

impl FromStr for Plate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Plate`")
    }
}

/// Discount card presented by a [`Vehicle`] driver.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct DiscountCard(String);

impl DiscountCard {
    /// Creates a new [`DiscountCard`] if the given `card` is valid.
    #[must_use]
    pub fn new(card: impl Into<String>) -> Option<Self> {
        let card = card.into();
        Self::check(&card).then_some(Self(card))
    }

    /// Checks whether the given `card` is a valid [`DiscountCard`].
    fn check(card: impl AsRef<str>) -> bool {
        let card = card.as_ref();
        card.trim() == card && !card.is_empty() && card.len() <= 64
    }
}

impl FromStr for DiscountCard {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `DiscountCard`")
    }
}

/// [`DateTime`] when a [`Vehicle`] was checked in.
pub type CheckInDateTime = DateTimeOf<(Vehicle, unit::CheckIn)>;

/// [`DateTime`] when a [`Vehicle`] was checked out.
pub type CheckOutDateTime = DateTimeOf<(Vehicle, unit::CheckOut)>;

#[cfg(test)]
mod spec {
    use std::{collections::HashSet, time::Duration};

    use common::DateTime;

    use super::{CheckInDateTime, DiscountCard, Kind, Plate, Vehicle};

    fn checked_in_at() -> CheckInDateTime {
        DateTime::from_unix_timestamp(1_700_000_000).unwrap().coerce()
    }

    fn vehicle(plate: &str, kind: Kind, card: Option<&str>) -> Vehicle {
        Vehicle::new(
            plate.parse().unwrap(),
            kind,
            checked_in_at(),
            card.map(|c| c.parse().unwrap()),
        )
    }

    #[test]
    fn plate_validation() {
        assert!(Plate::new("AA111AA").is_some());
        assert!(Plate::new("B222BBB").is_some());
        assert!(Plate::new("").is_none());
        assert!(Plate::new(" AA111AA").is_none());
        assert!(Plate::new("AA111AA\n").is_none());
        assert!(Plate::new("X".repeat(33)).is_none());
        assert!("".parse::<Plate>().is_err());
    }

    #[test]
    fn discount_card_validation() {
        assert!(DiscountCard::new("DISCOUNT_CARD_001").is_some());
        assert!(DiscountCard::new("  ").is_none());
        assert!(DiscountCard::new("C".repeat(65)).is_none());
    }

    #[test]
    fn kind_base_price() {
        let prices = Kind::ALL
            .iter()
            .map(|k| (k.to_string(), k.base_price().to_string()))
            .collect::<Vec<_>>();

        assert_eq!(
            prices,
            [
                ("CAR".to_owned(), "20".to_owned()),
                ("MOTORCYCLE".to_owned(), "15".to_owned()),
                ("MINI_BUS".to_owned(), "25".to_owned()),
                ("BUS".to_owned(), "30".to_owned()),
            ],
        );
        assert_eq!("MINI_BUS".parse::<Kind>().unwrap(), Kind::MiniBus);
        assert!("TRUCK".parse::<Kind>().is_err());
    }

    #[test]
    fn identity_is_plate_only() {
        let car = vehicle("AA111AA", Kind::Car, None);
        let bus = vehicle("AA111AA", Kind::Bus, Some("DISCOUNT_CARD_001"));
        let other = vehicle("B222BBB", Kind::Car, None);

        assert_eq!(car, bus);
        assert_ne!(car, other);

        let set = [car, bus, other].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn parked_minutes_are_whole() {
        let car = vehicle("AA111AA", Kind::Car, None);
        let at = checked_in_at();

        assert_eq!(car.parked_minutes(at), 0);
        assert_eq!(car.parked_minutes(at + Duration::from_secs(59)), 0);
        assert_eq!(car.parked_minutes(at + Duration::from_secs(121 * 60)), 121);
        assert_eq!(
            car.parked_minutes(at + Duration::from_secs(150 * 60 + 59)),
            150,
        );
        assert_eq!(car.parked_minutes(at - Duration::from_secs(600)), 0);
    }

    #[test]
    fn discount_card_presence() {
        assert!(!vehicle("AA111AA", Kind::Car, None).has_discount_card());
        assert!(vehicle("AA111AA", Kind::Car, Some("DISCOUNT_CARD_001"))
            .has_discount_card());
    }
}
