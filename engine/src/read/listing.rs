//! [`Listing`]-related read definitions.

use derive_more::Display;

use crate::domain::{listing, Listing};

/// Normalized pattern for the case-insensitive substring matching used by
/// quick search and the advanced-search text fields.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct QuickPattern(String);

impl QuickPattern {
    /// Creates a new [`QuickPattern`] out of the given `input`.
    ///
    /// [`None`] is returned only for the empty `input`, meaning no filter
    /// is active for its dimension. Whitespace is significant: a padded
    /// query matches padded text only.
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        (!input.is_empty()).then(|| Self(input.to_lowercase()))
    }

    /// Checks whether the given `haystack` contains this [`QuickPattern`].
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// Checks whether the given [`Listing`] matches this [`QuickPattern`]
    /// by its postcode, location or name.
    #[must_use]
    pub fn matches_listing(&self, listing: &Listing) -> bool {
        self.matches(listing.postcode.as_ref())
            || self.matches(listing.location.as_ref())
            || self.matches(listing.name.as_ref())
    }
}

/// Criteria set of a single advanced-search submission.
///
/// Constructed fresh from form input on each submission and not persisted.
/// Every absent field imposes no constraint on its dimension.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Kind`] of offer to match exactly.
    ///
    /// [`Kind`]: listing::Kind
    pub kind: Option<listing::Kind>,

    /// Inclusive lower bound of the [`Price`].
    ///
    /// [`Price`]: listing::Price
    pub min_price: Option<listing::Price>,

    /// Inclusive upper bound of the [`Price`].
    ///
    /// [`Price`]: listing::Price
    pub max_price: Option<listing::Price>,

    /// Inclusive lower bound of the bedrooms number.
    pub min_bedrooms: Option<listing::Bedrooms>,

    /// Inclusive upper bound of the bedrooms number.
    pub max_bedrooms: Option<listing::Bedrooms>,

    /// Inclusive lower bound of the date a [`Listing`] was added.
    pub added_since: Option<listing::AdditionDate>,

    /// Postcode part to search for.
    pub postcode: Option<QuickPattern>,

    /// Location part to search for.
    pub location: Option<QuickPattern>,
}

impl Filter {
    /// Builds a [`Filter`] out of the given raw form [`Input`].
    ///
    /// Unparseable values degrade to an absent field, loosening the filter
    /// rather than failing the submission.
    #[must_use]
    pub fn from_input(input: &Input<'_>) -> Self {
        Self {
            kind: input.kind.and_then(|s| s.trim().parse().ok()),
            min_price: input.min_price.and_then(|s| s.trim().parse().ok()),
            max_price: input.max_price.and_then(|s| s.trim().parse().ok()),
            min_bedrooms: input
                .min_bedrooms
                .and_then(|s| s.trim().parse().ok()),
            max_bedrooms: input
                .max_bedrooms
                .and_then(|s| s.trim().parse().ok()),
            added_since: input.date_added.and_then(|s| {
                listing::AdditionDate::from_iso8601(s.trim()).ok()
            }),
            postcode: input.postcode.and_then(QuickPattern::new),
            location: input.location.and_then(QuickPattern::new),
        }
    }

    /// Checks whether the given [`Listing`] satisfies every present field
    /// of this [`Filter`].
    ///
    /// Pure conjunction: any single failing check excludes the
    /// [`Listing`], and an absent field is vacuously satisfied.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.kind.map_or(true, |kind| listing.kind == kind)
            && self.min_price.map_or(true, |min| listing.price >= min)
            && self.max_price.map_or(true, |max| listing.price <= max)
            && self
                .min_bedrooms
                .map_or(true, |min| listing.bedrooms >= min)
            && self
                .max_bedrooms
                .map_or(true, |max| listing.bedrooms <= max)
            && self
                .added_since
                .map_or(true, |since| listing.date_added >= since)
            && self
                .postcode
                .as_ref()
                .map_or(true, |p| p.matches(listing.postcode.as_ref()))
            && self
                .location
                .as_ref()
                .map_or(true, |p| p.matches(listing.location.as_ref()))
    }
}

/// Raw textual input of the advanced-search form.
///
/// An absent or empty field means no constraint for its dimension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Input<'a> {
    /// [`Kind`] of offer (`FOR_SALE`/`FOR_RENT`).
    ///
    /// [`Kind`]: listing::Kind
    pub kind: Option<&'a str>,

    /// Minimum price.
    pub min_price: Option<&'a str>,

    /// Maximum price.
    pub max_price: Option<&'a str>,

    /// Minimum number of bedrooms.
    pub min_bedrooms: Option<&'a str>,

    /// Maximum number of bedrooms.
    pub max_bedrooms: Option<&'a str>,

    /// Date a [`Listing`] was added after, as `YYYY-MM-DD`.
    pub date_added: Option<&'a str>,

    /// Postcode part.
    pub postcode: Option<&'a str>,

    /// Location part.
    pub location: Option<&'a str>,
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{listing, Listing};

    use super::{Filter, Input, QuickPattern};

    fn oak_house() -> Listing {
        Listing {
            id: 1.into(),
            name: "Oak House".parse().unwrap(),
            kind: listing::Kind::ForSale,
            price: listing::Price::new(Decimal::from(450_000)).unwrap(),
            bedrooms: 3,
            location: "Petts Wood Road, Orpington".parse().unwrap(),
            postcode: "BR5".parse().unwrap(),
            address: "23 Petts Wood Road, Orpington BR5".parse().unwrap(),
            date_added: listing::AdditionDate::from_iso8601("2022-10-12")
                .unwrap(),
            description: "Semi-detached family home.".parse().unwrap(),
            images: listing::Images::new(vec!["house1.jpg"
                .parse()
                .unwrap()])
            .unwrap(),
        }
    }

    #[test]
    fn quick_pattern_is_case_insensitive() {
        let pattern = QuickPattern::new("br5").unwrap();
        assert!(pattern.matches("BR5"));
        assert!(pattern.matches_listing(&oak_house()));

        let pattern = QuickPattern::new("ORPINGTON").unwrap();
        assert!(pattern.matches_listing(&oak_house()));

        let pattern = QuickPattern::new("oak").unwrap();
        assert!(pattern.matches_listing(&oak_house()));

        let pattern = QuickPattern::new("cedar").unwrap();
        assert!(!pattern.matches_listing(&oak_house()));
    }

    #[test]
    fn only_the_empty_query_deactivates_the_pattern() {
        assert!(QuickPattern::new("").is_none());
        assert!(QuickPattern::new("   ").is_some());
    }

    #[test]
    fn whitespace_in_the_query_is_significant() {
        // No trimming: "BR5" ends right after the digit.
        assert!(!QuickPattern::new("br5 ").unwrap().matches("BR5"));
        assert!(!QuickPattern::new(" br5").unwrap().matches("BR5"));

        // A padded query still matches where the padding is real text.
        assert!(QuickPattern::new("wood ")
            .unwrap()
            .matches("Petts Wood Road, Orpington"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::default().matches(&oak_house()));
    }

    // Every present field must be satisfied: flipping a single dimension
    // against the listing excludes it.
    #[test]
    fn filter_is_a_pure_conjunction() {
        let matching = Filter {
            kind: Some(listing::Kind::ForSale),
            min_price: listing::Price::new(Decimal::from(400_000)),
            max_price: listing::Price::new(Decimal::from(500_000)),
            min_bedrooms: Some(2),
            max_bedrooms: Some(4),
            added_since: Some(
                listing::AdditionDate::from_iso8601("2022-01-01").unwrap(),
            ),
            postcode: QuickPattern::new("br"),
            location: QuickPattern::new("orpington"),
        };
        assert!(matching.matches(&oak_house()));

        let failing = [
            Filter {
                kind: Some(listing::Kind::ForRent),
                ..matching.clone()
            },
            Filter {
                min_price: listing::Price::new(Decimal::from(500_000)),
                ..matching.clone()
            },
            Filter {
                max_price: listing::Price::new(Decimal::from(400_000)),
                ..matching.clone()
            },
            Filter {
                min_bedrooms: Some(4),
                ..matching.clone()
            },
            Filter {
                max_bedrooms: Some(2),
                ..matching.clone()
            },
            Filter {
                added_since: Some(
                    listing::AdditionDate::from_iso8601("2023-01-01")
                        .unwrap(),
                ),
                ..matching.clone()
            },
            Filter {
                postcode: QuickPattern::new("cd2"),
                ..matching.clone()
            },
            Filter {
                location: QuickPattern::new("london"),
                ..matching.clone()
            },
        ];
        for filter in failing {
            assert!(!filter.matches(&oak_house()), "{filter:?}");
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let exact = Filter {
            min_price: listing::Price::new(Decimal::from(450_000)),
            max_price: listing::Price::new(Decimal::from(450_000)),
            min_bedrooms: Some(3),
            max_bedrooms: Some(3),
            added_since: Some(
                listing::AdditionDate::from_iso8601("2022-10-12").unwrap(),
            ),
            ..Filter::default()
        };
        assert!(exact.matches(&oak_house()));
    }

    #[test]
    fn invalid_form_input_degrades_to_absent_fields() {
        let filter = Filter::from_input(&Input {
            kind: Some("CASTLE"),
            min_price: Some("cheap"),
            max_price: Some(""),
            min_bedrooms: Some("two"),
            max_bedrooms: Some("-1"),
            date_added: Some("12/10/2022"),
            postcode: Some(""),
            location: None,
        });

        assert!(filter.kind.is_none());
        assert!(filter.min_price.is_none());
        assert!(filter.max_price.is_none());
        assert!(filter.min_bedrooms.is_none());
        assert!(filter.max_bedrooms.is_none());
        assert!(filter.added_since.is_none());
        assert!(filter.postcode.is_none());
        assert!(filter.location.is_none());
        assert!(filter.matches(&oak_house()));
    }

    #[test]
    fn padded_text_fields_stay_active_filters() {
        let filter = Filter::from_input(&Input {
            postcode: Some("br5 "),
            ..Input::default()
        });

        assert!(filter.postcode.is_some());
        assert!(!filter.matches(&oak_house()));
    }

    #[test]
    fn well_formed_input_fills_every_field() {
        let filter = Filter::from_input(&Input {
            kind: Some("FOR_RENT"),
            min_price: Some("1000"),
            max_price: Some("2000"),
            min_bedrooms: Some("1"),
            max_bedrooms: Some("3"),
            date_added: Some("2022-10-12"),
            postcode: Some("BR5"),
            location: Some("Orpington"),
        });

        assert_eq!(filter.kind, Some(listing::Kind::ForRent));
        assert_eq!(
            filter.min_price,
            listing::Price::new(Decimal::from(1000)),
        );
        assert_eq!(filter.min_bedrooms, Some(1));
        assert_eq!(filter.max_bedrooms, Some(3));
        assert!(filter.added_since.is_some());
        assert_eq!(filter.postcode, QuickPattern::new("br5"));
        assert_eq!(filter.location, QuickPattern::new("orpington"));
    }
}
