//! Domain [`Event`]s of a [`LaborResource`].
//!
//! Exactly one [`Event`] is buffered per successful mutating operation,
//! carrying enough identifiers for a subscriber to reconstruct what changed
//! without re-reading the aggregate.

use common::Date;
use derive_more::From;

use crate::domain::{brand, enterprise, labor, person};
#[cfg(doc)]
use crate::domain::LaborResource;

use super::employment;

/// Domain event of a [`LaborResource`].
#[derive(Clone, Copy, Debug, Eq, From, PartialEq)]
pub enum Event {
    #[doc(hidden)]
    ResourceCreated(ResourceCreated),
    #[doc(hidden)]
    EmploymentCreated(EmploymentCreated),
    #[doc(hidden)]
    EmploymentOnboarded(EmploymentOnboarded),
    #[doc(hidden)]
    EmploymentLeavingInitiated(EmploymentLeavingInitiated),
    #[doc(hidden)]
    EmploymentTerminated(EmploymentTerminated),
    #[doc(hidden)]
    EmploymentCanceled(EmploymentCanceled),
}

/// [`Event`] of a [`LaborResource`] being created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceCreated {
    /// ID of the created [`LaborResource`].
    pub labor_resource_id: labor::Id,

    /// ID of the person the [`LaborResource`] belongs to.
    pub person_id: person::Id,
}

/// [`Event`] of a new employment relationship being created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmploymentCreated {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the created [`Employment`](employment::Employment) snapshot.
    pub employment_id: employment::Id,

    /// ID of the person being employed.
    pub person_id: person::Id,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the employment is attached to.
    pub brand_id: brand::Id,

    /// [`Kind`](employment::Kind) of the employment.
    pub kind: employment::Kind,

    /// First [`Date`] of the employment.
    pub start_date: Date,
}

/// [`Event`] of a person onboarding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmploymentOnboarded {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the produced [`Employment`](employment::Employment) snapshot.
    pub employment_id: employment::Id,

    /// ID of the person being employed.
    pub person_id: person::Id,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the employment is attached to.
    pub brand_id: brand::Id,

    /// [`Date`] the person onboarded on.
    pub onboard_date: Date,
}

/// [`Event`] of a person initiating leaving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmploymentLeavingInitiated {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the produced [`Employment`](employment::Employment) snapshot.
    pub employment_id: employment::Id,

    /// ID of the person being employed.
    pub person_id: person::Id,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the employment is attached to.
    pub brand_id: brand::Id,

    /// [`Date`] the employment ends on.
    pub leaving_date: Date,
}

/// [`Event`] of an employment being terminated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmploymentTerminated {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the produced [`Employment`](employment::Employment) snapshot.
    pub employment_id: employment::Id,

    /// ID of the person being employed.
    pub person_id: person::Id,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the employment is attached to.
    pub brand_id: brand::Id,
}

/// [`Event`] of an employment being canceled before onboarding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmploymentCanceled {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the produced [`Employment`](employment::Employment) snapshot.
    pub employment_id: employment::Id,

    /// ID of the person being employed.
    pub person_id: person::Id,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the employment is attached to.
    pub brand_id: brand::Id,
}
