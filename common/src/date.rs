//! Calendar date utilities.

use std::str::FromStr;

use derive_more::{Display, Error};
use time::{format_description::well_known::Iso8601, Month};

/// UTC calendar date with a day precision.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] representing the current date.
    #[must_use]
    pub fn today() -> Self {
        Self(time::OffsetDateTime::now_utc().date())
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid calendar
    /// date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Creates a new [`Date`] from the provided [ISO 8601] string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] date.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, &Iso8601::DEFAULT)
            .map(Self)
            .map_err(ParseError::Parse)
    }

    /// Returns this [`Date`] moved the given number of `years` forward
    /// (or backward, when negative), keeping the calendar month and day.
    ///
    /// February 29 of a leap year lands on February 28 of a common year.
    ///
    /// [`None`] is returned if the resulting year falls outside the
    /// representable calendar range.
    #[must_use]
    pub fn with_years_added(self, years: i32) -> Option<Self> {
        let year = self.0.year().checked_add(years)?;
        time::Date::from_calendar_date(year, self.0.month(), self.0.day())
            .or_else(|_| {
                time::Date::from_calendar_date(year, self.0.month(), 28)
            })
            .ok()
            .map(Self)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into a [`Date`].
    Parse(time::error::Parse),
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::Date;

    impl serde::Serialize for Date {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> serde::Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            Self::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(D::Error::custom)
        }
    }
}
