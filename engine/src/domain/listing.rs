//! [`Listing`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::Date;
use common::{define_kind, unit, DateOf};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Real-estate listing of the catalog.
///
/// Listings are supplied by the external data source and are immutable:
/// the engine never creates, deletes, or mutates one. Identifiers are
/// unique across the whole catalog.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Name`] of this [`Listing`].
    pub name: Name,

    /// [`Kind`] of offer of this [`Listing`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// [`Price`] asked for this [`Listing`].
    pub price: Price,

    /// Number of bedrooms in this [`Listing`].
    pub bedrooms: Bedrooms,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// [`Postcode`] of this [`Listing`].
    pub postcode: Postcode,

    /// Full [`Address`] of this [`Listing`].
    pub address: Address,

    /// [`Date`] when this [`Listing`] was added to the catalog.
    #[serde(with = "common::date::serde::iso8601")]
    pub date_added: AdditionDate,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// [`Images`] of this [`Listing`], cover image first.
    pub images: Images,
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(u64);

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid `Id`")
    }
}

define_kind! {
    #[doc = "Kind of a [`Listing`] offer."]
    enum Kind {
        #[doc = "Listed for sale."]
        ForSale = 1,

        #[doc = "Listed for rent."]
        ForRent = 2,
    }
}

// The catalog's wire form encodes a `Kind` as its numeric discriminant.
impl Serialize for Kind {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.u8())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value).ok_or_else(|| {
            de::Error::custom(format!("invalid `Kind` value: {value}"))
        })
    }
}

/// Name of a [`Listing`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s).then_some(Self(s)).ok_or("invalid `Name`")
    }
}

/// Location of a [`Listing`]: the area text searched by quick search and
/// the advanced-search location field.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 512
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

impl TryFrom<String> for Location {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s)
            .then_some(Self(s))
            .ok_or("invalid `Location`")
    }
}

/// Postcode of a [`Listing`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Postcode(String);

impl Postcode {
    /// Creates a new [`Postcode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`Postcode`].
    fn check(code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        code.trim() == code && !code.is_empty() && code.len() <= 32
    }
}

impl FromStr for Postcode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Postcode`")
    }
}

impl TryFrom<String> for Postcode {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s)
            .then_some(Self(s))
            .ok_or("invalid `Postcode`")
    }
}

/// Full address of a [`Listing`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address
            && !address.is_empty()
            && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl TryFrom<String> for Address {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s)
            .then_some(Self(s))
            .ok_or("invalid `Address`")
    }
}

/// Description of a [`Listing`].
///
/// May be empty: the presentation substitutes a stock blurb then.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Description`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        text.trim() == text && text.len() <= 4096
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s)
            .then_some(Self(s))
            .ok_or("invalid `Description`")
    }
}

/// Price asked for a [`Listing`].
///
/// Never negative.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] if the given `amount` is valid.
    #[must_use]
    pub fn new(amount: impl Into<Decimal>) -> Option<Self> {
        let amount = amount.into();
        (!amount.is_sign_negative()).then_some(Self(amount))
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s).map_err(|_| "invalid `Price` amount")?;
        Self::new(amount).ok_or("negative `Price`")
    }
}

impl TryFrom<Decimal> for Price {
    type Error = &'static str;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount).ok_or("negative `Price`")
    }
}

/// Number of bedrooms in a [`Listing`].
pub type Bedrooms = u16;

/// Reference to a single [`Listing`] image.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(try_from = "String", into = "String")]
#[as_ref(forward)]
pub struct Image(String);

impl Image {
    /// Creates a new [`Image`] if the given `reference` is valid.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Option<Self> {
        let reference = reference.into();
        Self::check(&reference).then_some(Self(reference))
    }

    /// Checks whether the given `reference` is a valid [`Image`].
    fn check(reference: impl AsRef<str>) -> bool {
        let reference = reference.as_ref();
        reference.trim() == reference
            && !reference.is_empty()
            && reference.len() <= 512
    }
}

impl FromStr for Image {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Image`")
    }
}

impl TryFrom<String> for Image {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s).then_some(Self(s)).ok_or("invalid `Image`")
    }
}

/// Ordered, never empty sequence of [`Listing`] images.
#[derive(
    Clone, Debug, Deserialize, Eq, Hash, Into, PartialEq, Serialize,
)]
#[serde(try_from = "Vec<Image>", into = "Vec<Image>")]
pub struct Images(Vec<Image>);

impl Images {
    /// Creates a new [`Images`] sequence if the given `images` are valid.
    ///
    /// [`None`] is returned if the sequence is empty.
    #[must_use]
    pub fn new(images: Vec<Image>) -> Option<Self> {
        (!images.is_empty()).then_some(Self(images))
    }

    /// Returns the cover [`Image`] of this sequence.
    #[expect(clippy::missing_panics_doc, reason = "non-empty by construction")]
    #[must_use]
    pub fn cover(&self) -> &Image {
        self.0.first().expect("non-empty by construction")
    }

    /// Returns all the [`Image`]s of this sequence, cover first.
    #[must_use]
    pub fn as_slice(&self) -> &[Image] {
        &self.0
    }
}

impl TryFrom<Vec<Image>> for Images {
    type Error = &'static str;

    fn try_from(images: Vec<Image>) -> Result<Self, Self::Error> {
        Self::new(images).ok_or("empty `Images`")
    }
}

/// [`Date`] when a [`Listing`] was added to the catalog.
pub type AdditionDate = DateOf<(Listing, unit::Addition)>;

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Id, Images, Kind, Listing, Name, Price};

    #[test]
    fn validates_text_fields() {
        assert!(Name::new("Oak House").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" padded ").is_none());

        assert!("BR5".parse::<super::Postcode>().is_ok());
        assert!("  ".parse::<super::Postcode>().is_err());

        // Descriptions may be empty.
        assert!("".parse::<super::Description>().is_ok());
    }

    #[test]
    fn rejects_negative_prices() {
        assert!(Price::new(Decimal::ZERO).is_some());
        assert!(Price::new(Decimal::from(450_000)).is_some());
        assert!(Price::new(Decimal::from(-1)).is_none());
        assert!("-10".parse::<Price>().is_err());
        assert!("450000".parse::<Price>().is_ok());
    }

    #[test]
    fn requires_at_least_one_image() {
        assert!(Images::new(vec![]).is_none());
        assert!(
            Images::new(vec!["house1.jpg".parse().unwrap()]).is_some()
        );
    }

    #[test]
    fn kind_uses_numeric_wire_form() {
        assert_eq!(serde_json::to_string(&Kind::ForSale).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Kind::ForRent).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<Kind>("2").unwrap(),
            Kind::ForRent,
        );
        assert!(serde_json::from_str::<Kind>("3").is_err());
    }

    #[test]
    fn parses_catalog_wire_form() {
        const JSON: &str = r#"{
            "id": 1,
            "name": "Oak House",
            "type": 1,
            "price": 450000,
            "bedrooms": 3,
            "location": "Petts Wood Road, Orpington",
            "postcode": "BR5",
            "address": "23 Petts Wood Road, Orpington BR5",
            "dateAdded": "2022-10-12",
            "description": "Attractive semi-detached family home.",
            "images": ["house1.jpg", "house1_back.jpg"]
        }"#;

        let listing: Listing = serde_json::from_str(JSON).unwrap();
        assert_eq!(listing.id, Id::from(1));
        assert_eq!(listing.kind, Kind::ForSale);
        assert_eq!(
            listing.price,
            Price::new(Decimal::from(450_000)).unwrap(),
        );
        assert_eq!(listing.bedrooms, 3);
        assert_eq!(listing.date_added.to_iso8601(), "2022-10-12");
        assert_eq!(listing.images.cover().to_string(), "house1.jpg");

        // Snapshots of a `Listing` survive a serialization round trip.
        let reparsed: Listing = serde_json::from_str(
            &serde_json::to_string(&listing).unwrap(),
        )
        .unwrap();
        assert_eq!(reparsed, listing);
    }
}
