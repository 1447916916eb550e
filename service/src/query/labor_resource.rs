//! [`Query`] collection related to a single [`LaborResource`].

use common::operations::By;

use crate::domain::{labor, person, LaborResource};
#[cfg(doc)]
use crate::Query;

use super::RepositoryQuery;

/// Queries a [`LaborResource`] by its [`labor::Id`].
pub type ById = RepositoryQuery<By<Option<LaborResource>, labor::Id>>;

/// Queries a [`LaborResource`] by ID of the person it belongs to.
pub type ByPerson = RepositoryQuery<By<Option<LaborResource>, person::Id>>;
