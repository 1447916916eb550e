//! [`LaborResource`] definitions.

pub mod employment;
pub mod event;

use std::mem;

use common::{daterange::InvalidDateRange, unit, Date, DateRange, DateTimeOf};
use derive_more::{Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{brand, enterprise, person};

pub use self::{employment::Employment, event::Event};

use self::employment::{NewEmployment, Remarks};

/// One person's entire employment history.
///
/// [`LaborResource`] is the single entry point through which all reads and
/// writes of the history must flow. It owns an append-only list of
/// [`Employment`] snapshots: every lifecycle operation appends a new snapshot
/// and never modifies an existing one, so the list only grows.
///
/// A [`LaborResource`] is not internally synchronized and must not be mutated
/// concurrently without external serialization.
#[derive(Clone, Debug)]
pub struct LaborResource {
    /// ID of this [`LaborResource`].
    id: Id,

    /// ID of the person this [`LaborResource`] belongs to.
    person_id: person::Id,

    /// Append-only history of [`Employment`] snapshots.
    employments: Vec<Employment>,

    /// [`DateTime`](common::DateTime) when this [`LaborResource`] was
    /// created.
    created_at: CreationDateTime,

    /// [`DateTime`](common::DateTime) when this [`LaborResource`] was last
    /// modified.
    updated_at: ModificationDateTime,

    /// Buffered domain [`Event`]s, not yet handed to a publisher.
    events: Vec<Event>,
}

impl LaborResource {
    /// Creates a new [`LaborResource`] for the provided person, buffering a
    /// [`event::ResourceCreated`] [`Event`].
    #[must_use]
    pub fn create(id: Id, person_id: person::Id) -> Self {
        let created_at = CreationDateTime::now();
        let mut this = Self {
            id,
            person_id,
            employments: Vec::new(),
            created_at,
            updated_at: created_at.coerce(),
            events: Vec::new(),
        };
        this.register(
            event::ResourceCreated {
                labor_resource_id: id,
                person_id,
            }
            .into(),
        );
        this
    }

    /// Returns ID of this [`LaborResource`].
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns ID of the person this [`LaborResource`] belongs to.
    #[must_use]
    pub fn person_id(&self) -> person::Id {
        self.person_id
    }

    /// Returns [`DateTime`](common::DateTime) when this [`LaborResource`] was
    /// created.
    #[must_use]
    pub fn created_at(&self) -> CreationDateTime {
        self.created_at
    }

    /// Returns [`DateTime`](common::DateTime) when this [`LaborResource`] was
    /// last modified.
    #[must_use]
    pub fn updated_at(&self) -> ModificationDateTime {
        self.updated_at
    }

    /// Creates a new employment relationship, appending an [`Employment`]
    /// snapshot in the [`Status::PendingOnboard`] status and buffering an
    /// [`event::EmploymentCreated`] [`Event`].
    ///
    /// The new employment's [`DateRange`] must not overlap the one of any
    /// live (not [`Terminated`]/[`Canceled`]) snapshot already in the
    /// history. This invariant is checked at creation time only, not on
    /// subsequent transitions.
    ///
    /// # Errors
    ///
    /// - [`CreateEmploymentError::Range`] if the requested dates don't form a
    ///   valid [`DateRange`].
    /// - [`CreateEmploymentError::Overlap`] if the requested [`DateRange`]
    ///   overlaps a live snapshot.
    ///
    /// [`Canceled`]: employment::Status::Canceled
    /// [`Status::PendingOnboard`]: employment::Status::PendingOnboard
    /// [`Terminated`]: employment::Status::Terminated
    pub fn create_employment(
        &mut self,
        details: NewEmployment,
    ) -> Result<Employment, CreateEmploymentError> {
        let created = Employment::new(self.id, details)?;
        self.ensure_no_overlap(&created)?;

        let event = event::EmploymentCreated {
            labor_resource_id: self.id,
            employment_id: created.id,
            person_id: self.person_id,
            enterprise_id: created.enterprise_id,
            brand_id: created.brand_id,
            kind: created.kind,
            start_date: created.time_range.start(),
        };
        self.append(created.clone());
        self.register(event.into());

        Ok(created)
    }

    /// Onboards the person for the employment represented by the provided
    /// snapshot, appending a new [`Status::Active`] snapshot and buffering an
    /// [`event::EmploymentOnboarded`] [`Event`].
    ///
    /// # Errors
    ///
    /// - [`OperationError::NotFound`] if no snapshot with the provided ID
    ///   exists in the history.
    /// - [`OperationError::Transition`] if the snapshot's [`Status`] forbids
    ///   onboarding, or the `on` date falls outside its [`DateRange`].
    ///
    /// [`Status`]: employment::Status
    /// [`Status::Active`]: employment::Status::Active
    pub fn onboard(
        &mut self,
        employment_id: employment::Id,
        on: Date,
        remarks: Option<Remarks>,
    ) -> Result<Employment, OperationError> {
        let source = self
            .employment(employment_id)
            .ok_or(OperationError::NotFound(employment_id))?;
        let onboarded = source.onboarded(on, remarks)?;

        let event = event::EmploymentOnboarded {
            labor_resource_id: self.id,
            employment_id: onboarded.id,
            person_id: self.person_id,
            enterprise_id: onboarded.enterprise_id,
            brand_id: onboarded.brand_id,
            onboard_date: on,
        };
        self.append(onboarded.clone());
        self.register(event.into());

        Ok(onboarded)
    }

    /// Initiates leaving for the employment represented by the provided
    /// snapshot, appending a new [`Status::Leaving`] snapshot (its
    /// [`DateRange`] ending on the `on` date) and buffering an
    /// [`event::EmploymentLeavingInitiated`] [`Event`].
    ///
    /// # Errors
    ///
    /// - [`OperationError::NotFound`] if no snapshot with the provided ID
    ///   exists in the history.
    /// - [`OperationError::Transition`] if the snapshot's [`Status`] forbids
    ///   leaving, or the `on` date is not strictly after its [`DateRange`]
    ///   start.
    ///
    /// [`Status`]: employment::Status
    /// [`Status::Leaving`]: employment::Status::Leaving
    pub fn initiate_leaving(
        &mut self,
        employment_id: employment::Id,
        on: Date,
        remarks: Option<Remarks>,
    ) -> Result<Employment, OperationError> {
        let source = self
            .employment(employment_id)
            .ok_or(OperationError::NotFound(employment_id))?;
        let leaving = source.leaving(on, remarks)?;

        let event = event::EmploymentLeavingInitiated {
            labor_resource_id: self.id,
            employment_id: leaving.id,
            person_id: self.person_id,
            enterprise_id: leaving.enterprise_id,
            brand_id: leaving.brand_id,
            leaving_date: on,
        };
        self.append(leaving.clone());
        self.register(event.into());

        Ok(leaving)
    }

    /// Completes the termination of the employment represented by the
    /// provided snapshot, appending a new [`Status::Terminated`] snapshot and
    /// buffering an [`event::EmploymentTerminated`] [`Event`].
    ///
    /// Unlike [`initiate_leaving()`] and [`cancel_employment()`], this
    /// operation carries no status gate: any snapshot that can be looked up
    /// can be terminated, a terminal one included.
    ///
    /// # Errors
    ///
    /// Returns an [`OperationError::NotFound`] if no snapshot with the
    /// provided ID exists in the history.
    ///
    /// [`Status::Terminated`]: employment::Status::Terminated
    /// [`cancel_employment()`]: LaborResource::cancel_employment
    /// [`initiate_leaving()`]: LaborResource::initiate_leaving
    pub fn terminate_employment(
        &mut self,
        employment_id: employment::Id,
        remarks: Option<Remarks>,
    ) -> Result<Employment, OperationError> {
        let source = self
            .employment(employment_id)
            .ok_or(OperationError::NotFound(employment_id))?;
        let terminated = source.terminated(remarks);

        let event = event::EmploymentTerminated {
            labor_resource_id: self.id,
            employment_id: terminated.id,
            person_id: self.person_id,
            enterprise_id: terminated.enterprise_id,
            brand_id: terminated.brand_id,
        };
        self.append(terminated.clone());
        self.register(event.into());

        Ok(terminated)
    }

    /// Cancels the employment represented by the provided snapshot before
    /// onboarding, appending a new [`Status::Canceled`] snapshot and
    /// buffering an [`event::EmploymentCanceled`] [`Event`].
    ///
    /// # Errors
    ///
    /// - [`OperationError::NotFound`] if no snapshot with the provided ID
    ///   exists in the history.
    /// - [`OperationError::Transition`] if the snapshot's [`Status`] forbids
    ///   cancellation.
    ///
    /// [`Status`]: employment::Status
    /// [`Status::Canceled`]: employment::Status::Canceled
    pub fn cancel_employment(
        &mut self,
        employment_id: employment::Id,
        remarks: Option<Remarks>,
    ) -> Result<Employment, OperationError> {
        let source = self
            .employment(employment_id)
            .ok_or(OperationError::NotFound(employment_id))?;
        let canceled = source.canceled(remarks)?;

        let event = event::EmploymentCanceled {
            labor_resource_id: self.id,
            employment_id: canceled.id,
            person_id: self.person_id,
            enterprise_id: canceled.enterprise_id,
            brand_id: canceled.brand_id,
        };
        self.append(canceled.clone());
        self.register(event.into());

        Ok(canceled)
    }

    /// Returns the [`Employment`] snapshot with the provided ID, if any.
    #[must_use]
    pub fn employment(
        &self,
        employment_id: employment::Id,
    ) -> Option<&Employment> {
        self.employments.iter().find(|e| e.id == employment_id)
    }

    /// Returns all the [`Employment`] snapshots of this [`LaborResource`] in
    /// the order they were appended.
    #[must_use]
    pub fn employments(&self) -> &[Employment] {
        &self.employments
    }

    /// Returns all the [`Employment`] snapshots of this [`LaborResource`],
    /// the most recently produced first.
    #[must_use]
    pub fn latest_employments(&self) -> Vec<&Employment> {
        let mut all = self.employments.iter().collect::<Vec<_>>();
        all.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        all
    }

    /// Returns the [`Employment`] snapshots in the
    /// [`Status::Active`](employment::Status::Active) status.
    #[must_use]
    pub fn active_employments(&self) -> Vec<&Employment> {
        self.employments
            .iter()
            .filter(|e| e.status.is_active())
            .collect()
    }

    /// Returns the [`Employment`] snapshots in the
    /// [`Status::Active`](employment::Status::Active) status whose
    /// [`DateRange`] contains the provided [`Date`].
    #[must_use]
    pub fn active_employments_on(&self, date: Date) -> Vec<&Employment> {
        self.employments
            .iter()
            .filter(|e| e.status.is_active() && e.time_range.contains(date))
            .collect()
    }

    /// Returns the [`Employment`] snapshots referencing the provided
    /// enterprise.
    #[must_use]
    pub fn employments_by_enterprise(
        &self,
        enterprise_id: enterprise::Id,
    ) -> Vec<&Employment> {
        self.employments
            .iter()
            .filter(|e| e.enterprise_id == enterprise_id)
            .collect()
    }

    /// Returns the [`Employment`] snapshots referencing the provided brand.
    #[must_use]
    pub fn employments_by_brand(&self, brand_id: brand::Id) -> Vec<&Employment> {
        self.employments
            .iter()
            .filter(|e| e.brand_id == brand_id)
            .collect()
    }

    /// Returns whether this [`LaborResource`] has an [`Employment`] with the
    /// provided enterprise being [`Status::Active`] today.
    ///
    /// [`Status::Active`]: employment::Status::Active
    #[must_use]
    pub fn has_active_employment_with(
        &self,
        enterprise_id: enterprise::Id,
    ) -> bool {
        let today = Date::today();
        self.employments.iter().any(|e| {
            e.enterprise_id == enterprise_id
                && e.status.is_active()
                && e.time_range.contains(today)
        })
    }

    /// Returns the buffered domain [`Event`]s of this [`LaborResource`].
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Removes and returns all the buffered domain [`Event`]s of this
    /// [`LaborResource`].
    pub fn drain_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Drops all the buffered domain [`Event`]s of this [`LaborResource`].
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Checks the `candidate` against every live snapshot in the history.
    fn ensure_no_overlap(
        &self,
        candidate: &Employment,
    ) -> Result<(), CreateEmploymentError> {
        for existing in &self.employments {
            if existing.id == candidate.id {
                continue;
            }
            if candidate.overlaps_with(existing) {
                return Err(CreateEmploymentError::Overlap(
                    existing.time_range,
                ));
            }
        }
        Ok(())
    }

    /// Appends the provided snapshot to the history, advancing the
    /// modification timestamp.
    fn append(&mut self, employment: Employment) {
        self.employments.push(employment);
        self.updated_at = ModificationDateTime::now();
    }

    /// Buffers the provided domain [`Event`].
    fn register(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// ID of a [`LaborResource`].
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

/// [`DateTime`](common::DateTime) when a [`LaborResource`] was created.
pub type CreationDateTime = DateTimeOf<(LaborResource, unit::Creation)>;

/// [`DateTime`](common::DateTime) when a [`LaborResource`] was last modified.
pub type ModificationDateTime = DateTimeOf<(LaborResource, unit::Modification)>;

/// Error of creating a new employment relationship.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum CreateEmploymentError {
    /// Requested dates don't form a valid [`DateRange`].
    #[display("invalid employment time range: {_0}")]
    #[from]
    Range(InvalidDateRange),

    /// Requested [`DateRange`] overlaps a live [`Employment`].
    #[display(
        "employment time range overlaps an existing employment within `{_0}`"
    )]
    Overlap(#[error(not(source))] DateRange),
}

/// Error of a lifecycle operation upon an existing [`Employment`].
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum OperationError {
    /// No [`Employment`] snapshot with the provided ID exists.
    #[display("`Employment(id: {_0})` does not exist")]
    NotFound(#[error(not(source))] employment::Id),

    /// [`Employment`]'s [`Status`](employment::Status) forbids the requested
    /// transition.
    #[display("employment state transition rejected: {_0}")]
    #[from]
    Transition(employment::TransitionError),
}
