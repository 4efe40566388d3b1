//! Drag-and-drop transfer definitions.

use derive_more::{AsRef, Display};

use crate::domain::Listing;

/// Serialized [`Listing`] snapshot carried by a drag-and-drop gesture.
///
/// Encoded when a drag starts and decoded by the drop target. The payload
/// is opaque to the transport in between, so a decode may face arbitrary
/// text.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Payload(String);

impl Payload {
    /// Encodes the given [`Listing`] snapshot as a [`Payload`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(listing: &Listing) -> Result<Self, serde_json::Error> {
        serde_json::to_string(listing).map(Self)
    }

    /// Wraps raw text received from the transport as a [`Payload`].
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Decodes the [`Listing`] snapshot out of this [`Payload`].
    ///
    /// # Errors
    ///
    /// Returns an error if this [`Payload`] doesn't carry a valid
    /// [`Listing`].
    pub fn decode(&self) -> Result<Listing, serde_json::Error> {
        serde_json::from_str(&self.0)
    }

    /// Returns the raw text of this [`Payload`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{listing, Listing};

    use super::Payload;

    fn oak_house() -> Listing {
        Listing {
            id: 1.into(),
            name: "Oak House".parse().unwrap(),
            kind: listing::Kind::ForSale,
            price: listing::Price::new(Decimal::from(450_000)).unwrap(),
            bedrooms: 3,
            location: "Orpington".parse().unwrap(),
            postcode: "BR5".parse().unwrap(),
            address: "23 Petts Wood Road, Orpington BR5".parse().unwrap(),
            date_added: listing::AdditionDate::from_iso8601("2022-10-12")
                .unwrap(),
            description: "".parse().unwrap(),
            images: listing::Images::new(vec!["house1.jpg"
                .parse()
                .unwrap()])
            .unwrap(),
        }
    }

    #[test]
    fn carries_the_full_snapshot() {
        let payload = Payload::encode(&oak_house()).unwrap();
        assert_eq!(payload.decode().unwrap(), oak_house());
    }

    #[test]
    fn rejects_arbitrary_transport_text() {
        assert!(Payload::from_raw("").decode().is_err());
        assert!(Payload::from_raw("not json").decode().is_err());
        assert!(Payload::from_raw("{\"id\":1}").decode().is_err());
    }
}
