//! [`Employment`] snapshot of a [`LaborResource`].

use common::{
    daterange::InvalidDateRange, define_kind, unit, Date, DateRange,
    DateTimeOf,
};
use derive_more::{AsRef, Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{brand, enterprise, labor};
#[cfg(doc)]
use crate::domain::LaborResource;

/// Immutable snapshot of one employment relationship of a [`LaborResource`].
///
/// Every lifecycle transition produces a brand-new [`Employment`] with a
/// freshly generated [`Id`]; existing snapshots are never modified. The chain
/// of snapshots forming one logical employment is connected only by the
/// caller passing forward whichever [`Id`] the previous transition returned.
#[derive(Clone, Debug)]
pub struct Employment {
    /// ID of this [`Employment`] snapshot.
    pub id: Id,

    /// ID of the [`LaborResource`] owning this [`Employment`].
    pub labor_resource_id: labor::Id,

    /// [`Kind`] of this [`Employment`].
    pub kind: Kind,

    /// [`Status`] of this [`Employment`].
    pub status: Status,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand this [`Employment`] is attached to.
    pub brand_id: brand::Id,

    /// ID of the labor policy this [`Employment`] is subject to.
    pub labor_policy_id: brand::PolicyId,

    /// [`Position`] the person is employed for.
    pub position: Position,

    /// [`Department`] the person is employed in.
    pub department: Option<Department>,

    /// [`DateRange`] this [`Employment`] is effective within.
    pub time_range: DateRange,

    /// [`DateTime`](common::DateTime) when this snapshot was produced.
    pub occurred_at: OccurrenceDateTime,

    /// Free-text [`Remarks`] accompanying this snapshot.
    pub remarks: Remarks,
}

impl Employment {
    /// Creates a new [`Employment`] in the [`Status::PendingOnboard`] status.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateRange`] if the requested dates don't form a
    /// valid [`DateRange`].
    pub fn new(
        labor_resource_id: labor::Id,
        details: NewEmployment,
    ) -> Result<Self, InvalidDateRange> {
        let NewEmployment {
            kind,
            enterprise_id,
            brand_id,
            labor_policy_id,
            position,
            department,
            start_date,
            end_date,
        } = details;

        Ok(Self {
            id: Id::new(),
            labor_resource_id,
            kind,
            status: Status::PendingOnboard,
            enterprise_id,
            brand_id,
            labor_policy_id,
            position,
            department,
            time_range: DateRange::new(start_date, end_date)?,
            occurred_at: OccurrenceDateTime::now(),
            remarks: Remarks::describing(Status::PendingOnboard),
        })
    }

    /// Produces a new [`Status::Active`] snapshot of this [`Employment`],
    /// re-anchoring its [`DateRange`] to start on the `on` date (the end is
    /// preserved).
    ///
    /// # Errors
    ///
    /// - [`TransitionError::CannotOnboard`] if the current [`Status`] forbids
    ///   onboarding.
    /// - [`TransitionError::OnboardBeforeStart`] /
    ///   [`TransitionError::OnboardAfterEnd`] if the `on` date falls outside
    ///   the current [`DateRange`].
    /// - [`TransitionError::Range`] if the re-anchored [`DateRange`] is
    ///   invalid.
    pub fn onboarded(
        &self,
        on: Date,
        remarks: Option<Remarks>,
    ) -> Result<Self, TransitionError> {
        use TransitionError as E;

        if !self.status.can_onboard() {
            return Err(E::CannotOnboard(self.status));
        }
        if on < self.time_range.start() {
            return Err(E::OnboardBeforeStart {
                onboard: on,
                start: self.time_range.start(),
            });
        }
        if let Some(end) = self.time_range.end() {
            if on > end {
                return Err(E::OnboardAfterEnd { onboard: on, end });
            }
        }

        Ok(Self {
            id: Id::new(),
            status: Status::Active,
            time_range: DateRange::new(on, self.time_range.end())?,
            occurred_at: OccurrenceDateTime::now(),
            remarks: remarks
                .unwrap_or_else(|| Remarks::describing(Status::Active)),
            position: self.position.clone(),
            department: self.department.clone(),
            ..*self
        })
    }

    /// Produces a new [`Status::Leaving`] snapshot of this [`Employment`],
    /// with its [`DateRange`] ending on the `on` date.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::CannotLeave`] if the current [`Status`] forbids
    ///   leaving.
    /// - [`TransitionError::Range`] if the `on` date is not strictly after
    ///   the [`DateRange`] start.
    pub fn leaving(
        &self,
        on: Date,
        remarks: Option<Remarks>,
    ) -> Result<Self, TransitionError> {
        if !self.status.can_leave() {
            return Err(TransitionError::CannotLeave(self.status));
        }

        Ok(Self {
            id: Id::new(),
            status: Status::Leaving,
            time_range: DateRange::of(self.time_range.start(), on)?,
            occurred_at: OccurrenceDateTime::now(),
            remarks: remarks
                .unwrap_or_else(|| Remarks::describing(Status::Leaving)),
            position: self.position.clone(),
            department: self.department.clone(),
            ..*self
        })
    }

    /// Produces a new [`Status::Terminated`] snapshot of this [`Employment`],
    /// with its [`DateRange`] unchanged.
    ///
    /// Termination carries no legality gate and so is producible from any
    /// [`Status`], even a terminal one.
    #[must_use]
    pub fn terminated(&self, remarks: Option<Remarks>) -> Self {
        Self {
            id: Id::new(),
            status: Status::Terminated,
            occurred_at: OccurrenceDateTime::now(),
            remarks: remarks
                .unwrap_or_else(|| Remarks::describing(Status::Terminated)),
            position: self.position.clone(),
            department: self.department.clone(),
            ..*self
        }
    }

    /// Produces a new [`Status::Canceled`] snapshot of this [`Employment`],
    /// with its [`DateRange`] unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError::CannotCancel`] if the current [`Status`]
    /// forbids cancellation.
    pub fn canceled(
        &self,
        remarks: Option<Remarks>,
    ) -> Result<Self, TransitionError> {
        if !self.status.can_cancel() {
            return Err(TransitionError::CannotCancel(self.status));
        }

        Ok(Self {
            id: Id::new(),
            status: Status::Canceled,
            occurred_at: OccurrenceDateTime::now(),
            remarks: remarks
                .unwrap_or_else(|| Remarks::describing(Status::Canceled)),
            position: self.position.clone(),
            department: self.department.clone(),
            ..*self
        })
    }

    /// Returns whether this [`Employment`] occupies at least one calendar day
    /// together with the `other` one.
    ///
    /// Snapshots in a terminal [`Status`] never overlap anything.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        if !self.status.is_live() || !other.status.is_live() {
            return false;
        }
        self.time_range.overlaps(&other.time_range)
    }
}

/// ID of an [`Employment`] snapshot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Parameters of a new [`Employment`].
#[derive(Clone, Debug)]
pub struct NewEmployment {
    /// [`Kind`] of the new [`Employment`].
    pub kind: Kind,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the new [`Employment`] is attached to.
    pub brand_id: brand::Id,

    /// ID of the labor policy the new [`Employment`] is subject to.
    pub labor_policy_id: brand::PolicyId,

    /// [`Position`] the person is employed for.
    pub position: Position,

    /// [`Department`] the person is employed in.
    pub department: Option<Department>,

    /// First [`Date`] of the new [`Employment`].
    pub start_date: Date,

    /// Last [`Date`] of the new [`Employment`].
    ///
    /// [`None`] means the new [`Employment`] is open-ended.
    pub end_date: Option<Date>,
}

define_kind! {
    #[doc = "Kind of an [`Employment`]."]
    enum Kind {
        #[doc = "Full-time employee."]
        FullTime = 1,

        #[doc = "Part-time employee."]
        PartTime = 2,

        #[doc = "Temporary worker."]
        Temporary = 3,

        #[doc = "Contract worker."]
        Contract = 4,

        #[doc = "Intern."]
        Intern = 5,

        #[doc = "Self-employed contractor."]
        Contractor = 6,

        #[doc = "Outsourced worker."]
        Outsource = 7,
    }
}

impl Kind {
    /// Returns whether this [`Kind`] represents a formal employment
    /// relationship.
    #[must_use]
    pub const fn is_formal(self) -> bool {
        matches!(self, Self::FullTime | Self::PartTime)
    }

    /// Returns whether this [`Kind`] represents a flexible engagement.
    #[must_use]
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Temporary | Self::Contract | Self::Contractor)
    }
}

/// Lifecycle status of an [`Employment`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The employment is agreed upon, but the person has not onboarded yet.
    PendingOnboard = 1,

    /// The person is onboarded and working.
    Active = 2,

    /// Leaving is initiated, but not completed yet.
    Leaving = 3,

    /// The employment has ended.
    Terminated = 4,

    /// The employment was called off before onboarding.
    Canceled = 5,
}

impl Status {
    /// Returns whether an [`Employment`] in this [`Status`] represents a
    /// person actually working.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns whether an [`Employment`] in this [`Status`] still occupies
    /// its [`DateRange`], i.e. has not reached a terminal state yet.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::PendingOnboard | Self::Active | Self::Leaving)
    }

    /// Returns whether onboarding is allowed from this [`Status`].
    #[must_use]
    pub const fn can_onboard(self) -> bool {
        matches!(self, Self::PendingOnboard)
    }

    /// Returns whether initiating leaving is allowed from this [`Status`].
    #[must_use]
    pub const fn can_leave(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns whether cancellation is allowed from this [`Status`].
    #[must_use]
    pub const fn can_cancel(self) -> bool {
        matches!(self, Self::PendingOnboard)
    }

    /// Returns whether completing a termination is allowed from this
    /// [`Status`].
    #[must_use]
    pub const fn can_terminate(self) -> bool {
        matches!(self, Self::Leaving)
    }
}

/// Position an [`Employment`] is held for.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Position(String);

impl Position {
    /// Creates a new [`Position`] if the given `position` is valid.
    #[must_use]
    pub fn new(position: impl Into<String>) -> Option<Self> {
        let position = position.into();
        Self::check(&position).then_some(Self(position))
    }

    /// Checks whether the given `position` is a valid [`Position`].
    fn check(position: impl AsRef<str>) -> bool {
        let position = position.as_ref();
        position.trim() == position
            && !position.is_empty()
            && position.len() <= 512
    }
}

impl FromStr for Position {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Position`")
    }
}

/// Department an [`Employment`] is held in.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Department(String);

impl Department {
    /// Creates a new [`Department`] if the given `department` is valid.
    #[must_use]
    pub fn new(department: impl Into<String>) -> Option<Self> {
        let department = department.into();
        Self::check(&department).then_some(Self(department))
    }

    /// Checks whether the given `department` is a valid [`Department`].
    fn check(department: impl AsRef<str>) -> bool {
        let department = department.as_ref();
        department.trim() == department
            && !department.is_empty()
            && department.len() <= 512
    }
}

impl FromStr for Department {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Department`")
    }
}

/// Free-text remarks accompanying an [`Employment`] snapshot.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Remarks(String);

impl Remarks {
    /// Creates new [`Remarks`] if the given `remarks` are valid.
    #[must_use]
    pub fn new(remarks: impl Into<String>) -> Option<Self> {
        let remarks = remarks.into();
        Self::check(&remarks).then_some(Self(remarks))
    }

    /// Default [`Remarks`] accompanying a transition into the given
    /// [`Status`].
    #[must_use]
    pub fn describing(status: Status) -> Self {
        Self(
            match status {
                Status::PendingOnboard => "employment created",
                Status::Active => "onboarded",
                Status::Leaving => "leaving initiated",
                Status::Terminated => "employment terminated",
                Status::Canceled => "employment canceled",
            }
            .into(),
        )
    }

    /// Checks whether the given `remarks` are valid [`Remarks`].
    fn check(remarks: impl AsRef<str>) -> bool {
        let remarks = remarks.as_ref();
        remarks.trim() == remarks && !remarks.is_empty() && remarks.len() <= 512
    }
}

impl FromStr for Remarks {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Remarks`")
    }
}

/// [`DateTime`](common::DateTime) when an [`Employment`] snapshot was
/// produced.
pub type OccurrenceDateTime = DateTimeOf<(Employment, unit::Occurrence)>;

/// Error of producing a new [`Employment`] snapshot out of an existing one.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum TransitionError {
    /// Current [`Status`] forbids onboarding.
    #[display("employment in `{_0}` status cannot be onboarded")]
    CannotOnboard(#[error(not(source))] Status),

    /// Current [`Status`] forbids initiating leaving.
    #[display("employment in `{_0}` status cannot initiate leaving")]
    CannotLeave(#[error(not(source))] Status),

    /// Current [`Status`] forbids cancellation.
    #[display("employment in `{_0}` status cannot be canceled")]
    CannotCancel(#[error(not(source))] Status),

    /// Onboard date precedes the [`Employment`]'s [`DateRange`].
    #[display("onboard date `{onboard}` is before employment start `{start}`")]
    OnboardBeforeStart {
        /// Rejected onboard date.
        onboard: Date,

        /// Start of the [`Employment`]'s [`DateRange`].
        start: Date,
    },

    /// Onboard date exceeds the [`Employment`]'s [`DateRange`].
    #[display("onboard date `{onboard}` is after employment end `{end}`")]
    OnboardAfterEnd {
        /// Rejected onboard date.
        onboard: Date,

        /// End of the [`Employment`]'s [`DateRange`].
        end: Date,
    },

    /// Transition produces an invalid [`DateRange`].
    #[display("transition produces an invalid time range: {_0}")]
    #[from]
    Range(InvalidDateRange),
}

#[cfg(test)]
mod spec {
    use common::{Date, DateRange};

    use crate::domain::{brand, enterprise, labor};

    use super::{
        Department, Employment, Kind, NewEmployment, Position, Remarks,
        Status, TransitionError,
    };

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar(year, month, day).unwrap()
    }

    fn employment(start: Date, end: Option<Date>) -> Employment {
        Employment::new(
            labor::Id::new(),
            NewEmployment {
                kind: Kind::FullTime,
                enterprise_id: enterprise::Id::new(),
                brand_id: brand::Id::new(),
                labor_policy_id: brand::PolicyId::new(),
                position: Position::new("Barista").unwrap(),
                department: Department::new("Coffee Shop"),
                start_date: start,
                end_date: end,
            },
        )
        .unwrap()
    }

    #[test]
    fn status_transition_legality() {
        use Status as S;

        let matrix = [
            // (status, can_onboard, can_leave, can_cancel, can_terminate)
            (S::PendingOnboard, true, false, true, false),
            (S::Active, false, true, false, false),
            (S::Leaving, false, false, false, true),
            (S::Terminated, false, false, false, false),
            (S::Canceled, false, false, false, false),
        ];

        for (status, onboard, leave, cancel, terminate) in matrix {
            assert_eq!(status.can_onboard(), onboard, "{status}");
            assert_eq!(status.can_leave(), leave, "{status}");
            assert_eq!(status.can_cancel(), cancel, "{status}");
            assert_eq!(status.can_terminate(), terminate, "{status}");
            assert_eq!(status.is_active(), status == S::Active, "{status}");
            assert_eq!(
                status.is_live(),
                !matches!(status, S::Terminated | S::Canceled),
                "{status}",
            );
        }
    }

    #[test]
    fn kind_classification() {
        assert!(Kind::FullTime.is_formal());
        assert!(Kind::PartTime.is_formal());
        assert!(!Kind::Contractor.is_formal());

        assert!(Kind::Temporary.is_flexible());
        assert!(Kind::Contract.is_flexible());
        assert!(Kind::Contractor.is_flexible());
        assert!(!Kind::FullTime.is_flexible());
    }

    #[test]
    fn new_employment_is_pending_onboard() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));

        assert_eq!(created.status, Status::PendingOnboard);
        assert_eq!(created.time_range.start(), date(2023, 1, 1));
        assert_eq!(created.time_range.end(), Some(date(2023, 12, 31)));
        assert_eq!(
            created.remarks,
            Remarks::new("employment created").unwrap(),
        );
    }

    #[test]
    fn onboarding_reanchors_time_range() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));

        let onboarded = created.onboarded(date(2023, 1, 5), None).unwrap();

        assert_eq!(onboarded.status, Status::Active);
        assert_eq!(onboarded.time_range.start(), date(2023, 1, 5));
        assert_eq!(onboarded.time_range.end(), Some(date(2023, 12, 31)));
        assert_ne!(onboarded.id, created.id);
        // The source snapshot is untouched.
        assert_eq!(created.status, Status::PendingOnboard);
        assert_eq!(created.time_range.start(), date(2023, 1, 1));
    }

    #[test]
    fn onboarding_preserves_open_end() {
        let created = employment(date(2023, 1, 1), None);

        let onboarded = created.onboarded(date(2023, 2, 1), None).unwrap();

        assert_eq!(onboarded.time_range.end(), None);
    }

    #[test]
    fn onboarding_outside_time_range_is_rejected() {
        let created =
            employment(date(2023, 1, 10), Some(date(2023, 12, 31)));

        assert!(matches!(
            created.onboarded(date(2023, 1, 9), None),
            Err(TransitionError::OnboardBeforeStart { .. }),
        ));
        assert!(matches!(
            created.onboarded(date(2024, 1, 1), None),
            Err(TransitionError::OnboardAfterEnd { .. }),
        ));
    }

    #[test]
    fn onboarding_twice_is_rejected() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));
        let onboarded = created.onboarded(date(2023, 1, 5), None).unwrap();

        assert!(matches!(
            onboarded.onboarded(date(2023, 1, 6), None),
            Err(TransitionError::CannotOnboard(Status::Active)),
        ));
    }

    #[test]
    fn leaving_caps_time_range() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));
        let onboarded = created.onboarded(date(2023, 1, 5), None).unwrap();

        let leaving = onboarded
            .leaving(date(2023, 6, 30), Remarks::new("relocation"))
            .unwrap();

        assert_eq!(leaving.status, Status::Leaving);
        assert_eq!(leaving.time_range.start(), date(2023, 1, 5));
        assert_eq!(leaving.time_range.end(), Some(date(2023, 6, 30)));
        assert_eq!(leaving.remarks, Remarks::new("relocation").unwrap());
    }

    #[test]
    fn leaving_requires_active_status() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));

        assert!(matches!(
            created.leaving(date(2023, 6, 30), None),
            Err(TransitionError::CannotLeave(Status::PendingOnboard)),
        ));
    }

    #[test]
    fn leaving_on_the_start_date_is_rejected() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));
        let onboarded = created.onboarded(date(2023, 1, 5), None).unwrap();

        assert!(matches!(
            onboarded.leaving(date(2023, 1, 5), None),
            Err(TransitionError::Range(_)),
        ));
    }

    #[test]
    fn termination_is_allowed_from_any_status() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));
        let canceled = created.canceled(None).unwrap();

        let terminated = created.terminated(None);
        assert_eq!(terminated.status, Status::Terminated);
        assert_eq!(terminated.time_range, created.time_range);

        // Even a terminal snapshot can be terminated again.
        let again = canceled.terminated(None).terminated(None);
        assert_eq!(again.status, Status::Terminated);
    }

    #[test]
    fn cancellation_requires_pending_status() {
        let created =
            employment(date(2023, 1, 1), Some(date(2023, 12, 31)));

        let canceled = created.canceled(None).unwrap();
        assert_eq!(canceled.status, Status::Canceled);
        assert_eq!(canceled.time_range, created.time_range);

        let onboarded = created.onboarded(date(2023, 1, 5), None).unwrap();
        assert!(matches!(
            onboarded.canceled(None),
            Err(TransitionError::CannotCancel(Status::Active)),
        ));
    }

    #[test]
    fn terminal_snapshots_never_overlap() {
        let first = employment(date(2023, 1, 1), Some(date(2023, 12, 31)));
        let second = employment(date(2023, 6, 1), Some(date(2023, 12, 31)));

        assert!(first.overlaps_with(&second));
        assert!(!first.canceled(None).unwrap().overlaps_with(&second));
        assert!(!first.overlaps_with(&second.terminated(None)));
    }

    #[test]
    fn validated_texts() {
        assert!(Position::new("Barista").is_some());
        assert!(Position::new("").is_none());
        assert!(Position::new(" padded ").is_none());

        assert!(Department::new("Coffee Shop").is_some());
        assert!(Department::new("").is_none());

        assert!(Remarks::new("resigned by mutual agreement").is_some());
        assert!(Remarks::new("").is_none());
        assert!(Remarks::new("x".repeat(513)).is_none());
    }
}
