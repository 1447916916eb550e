//! [`DateRange`]-related definitions.

use std::fmt;

use derive_more::{Display, Error};

use crate::Date;

/// Closed range of calendar [`Date`]s with an optional open end.
///
/// Both bounds are inclusive. A missing end means the range is unbounded
/// (ongoing), i.e. treated as reaching infinitely far into the future.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateRange {
    /// First [`Date`] of this [`DateRange`].
    start: Date,

    /// Last [`Date`] of this [`DateRange`].
    ///
    /// [`None`] means that this [`DateRange`] is unbounded.
    end: Option<Date>,
}

impl DateRange {
    /// Maximum number of years a bounded [`DateRange`] is allowed to span.
    pub const MAX_YEARS: i32 = 100;

    /// Creates a new [`DateRange`] with the provided bounds.
    ///
    /// # Errors
    ///
    /// - [`InvalidDateRange::EndNotAfterStart`] if the `end` is present and
    ///   not strictly after the `start`.
    /// - [`InvalidDateRange::TooLong`] if the `end` is present and more than
    ///   [`MAX_YEARS`] years after the `start`.
    ///
    /// [`MAX_YEARS`]: DateRange::MAX_YEARS
    pub fn new(
        start: Date,
        end: Option<Date>,
    ) -> Result<Self, InvalidDateRange> {
        if let Some(end) = end {
            if end <= start {
                return Err(InvalidDateRange::EndNotAfterStart { start, end });
            }
            if start
                .with_years_added(Self::MAX_YEARS)
                .is_some_and(|max| end > max)
            {
                return Err(InvalidDateRange::TooLong { start, end });
            }
        }

        Ok(Self { start, end })
    }

    /// Creates a new bounded [`DateRange`].
    ///
    /// # Errors
    ///
    /// Same as [`DateRange::new()`].
    pub fn of(start: Date, end: Date) -> Result<Self, InvalidDateRange> {
        Self::new(start, Some(end))
    }

    /// Creates a new unbounded [`DateRange`].
    #[must_use]
    pub fn unbounded(start: Date) -> Self {
        Self { start, end: None }
    }

    /// Returns the first [`Date`] of this [`DateRange`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last [`Date`] of this [`DateRange`].
    ///
    /// [`None`] means that this [`DateRange`] is unbounded.
    #[must_use]
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Returns whether the provided [`Date`] falls into this [`DateRange`].
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    /// Returns whether this [`DateRange`] shares at least one calendar day
    /// with the `other` one.
    ///
    /// Ranges touching by a single boundary day do overlap, and two unbounded
    /// [`DateRange`]s always overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.end, other.end) {
            (None, None) => true,
            (None, Some(other_end)) => self.start <= other_end,
            (Some(end), None) => other.start <= end,
            (Some(end), Some(other_end)) => {
                self.start <= other_end && other.start <= end
            }
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{end}", self.start),
            None => write!(f, "{}..", self.start),
        }
    }
}

/// Error of constructing a [`DateRange`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidDateRange {
    /// End date of a [`DateRange`] is not strictly after its start date.
    #[display("`DateRange` end date `{end}` is not after its start `{start}`")]
    EndNotAfterStart {
        /// Start date of the [`DateRange`].
        start: Date,

        /// Rejected end date.
        end: Date,
    },

    /// [`DateRange`] spans more than [`DateRange::MAX_YEARS`] years.
    #[display(
        "`DateRange` end date `{end}` is over 100 years after its start \
         `{start}`"
    )]
    TooLong {
        /// Start date of the [`DateRange`].
        start: Date,

        /// Rejected end date.
        end: Date,
    },
}
