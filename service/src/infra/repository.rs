//! [`Repository`]-related definitions.

use derive_more::{Display, Error as StdError};

use crate::domain::{labor, person};
#[cfg(doc)]
use crate::domain::LaborResource;

/// Storage of [`LaborResource`]s.
///
/// Every person has at most one [`LaborResource`], and it's this boundary
/// that's responsible for enforcing the rule.
pub use common::Handler as Repository;

/// [`Repository`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Another [`LaborResource`] already belongs to the person.
    #[display("`Person(id: {_0})` already has a `LaborResource`")]
    DuplicatePerson(#[error(not(source))] person::Id),

    /// [`LaborResource`] with the same ID is already stored.
    #[display("`LaborResource(id: {_0})` already exists")]
    DuplicateResource(#[error(not(source))] labor::Id),

    /// [`LaborResource`] to update is not stored.
    #[display("`LaborResource(id: {_0})` does not exist")]
    UnknownResource(#[error(not(source))] labor::Id),
}
