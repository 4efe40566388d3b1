//! Calendar date utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{
    format_description::BorrowedFormatItem, macros::format_description,
};

/// Textual form of a calendar date: `YYYY-MM-DD`.
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided [ISO 8601] string
    /// (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] calendar
    /// date.
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, FORMAT)
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
            .map_err(ParseError)
    }

    /// Returns this [`Date`] as an [ISO 8601] string (`YYYY-MM-DD`).
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.inner.format(FORMAT).unwrap_or_else(|e| {
            panic!("cannot format `Date` as ISO 8601: {e}")
        })
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Debug, Display, Error)]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::DateOf;

    pub mod iso8601 {
        //! Module providing serialization and deserialization of [`DateOf`]
        //! as an ISO 8601 (`YYYY-MM-DD`) string.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::DateOf;

        /// Serializes the [`DateOf`] as an ISO 8601 string.
        ///
        /// # Errors
        ///
        /// Never fails.
        pub fn serialize<Of, S>(
            date: &DateOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&date.to_iso8601())
        }

        /// Deserializes an ISO 8601 string into a [`DateOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid calendar date.
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            DateOf::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn parses_iso8601() {
        let date = Date::from_iso8601("2022-10-12").unwrap();
        assert_eq!(date.to_iso8601(), "2022-10-12");

        assert!(Date::from_iso8601("12/10/2022").is_err());
        assert!(Date::from_iso8601("2022-13-01").is_err());
        assert!(Date::from_iso8601("").is_err());
    }

    #[test]
    fn orders_as_calendar_dates() {
        let earlier = Date::from_iso8601("2022-09-30").unwrap();
        let later = Date::from_iso8601("2022-10-01").unwrap();

        assert!(earlier < later);
        assert!(later >= earlier);
        assert_eq!(earlier, Date::from_iso8601("2022-09-30").unwrap());
    }

    #[test]
    fn converts_from_inner_representation() {
        let inner = time::Date::from_calendar_date(
            2024,
            time::Month::November,
            5,
        )
        .unwrap();

        assert_eq!(Date::from(inner).to_iso8601(), "2024-11-05");
        assert_eq!(time::Date::from(Date::from(inner)), inner);
    }
}
