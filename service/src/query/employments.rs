//! [`Query`] collection related to [`Employment`]s of a person.

use common::{
    operations::{By, Select},
    Date,
};
use tracerr::Traced;

use crate::{
    domain::{enterprise, labor::Employment, person, LaborResource},
    infra::{repository, Repository},
    Service,
};

use super::Query;

/// [`Query`] returning the [`Employment`] snapshots of a person being active,
/// optionally narrowed to the ones effective on a given [`Date`].
///
/// An unknown person simply has no employments.
#[derive(Clone, Copy, Debug)]
pub struct ActiveEmployments {
    /// ID of the person.
    pub person_id: person::Id,

    /// [`Date`] the [`Employment`]s should be effective on.
    pub on: Option<Date>,
}

impl<R, P> Query<ActiveEmployments> for Service<R, P>
where
    R: Repository<
        Select<By<Option<LaborResource>, person::Id>>,
        Ok = Option<LaborResource>,
        Err = Traced<repository::Error>,
    >,
{
    type Ok = Vec<Employment>;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        query: ActiveEmployments,
    ) -> Result<Self::Ok, Self::Err> {
        let ActiveEmployments { person_id, on } = query;

        let resource = self
            .repository()
            .execute(Select(By::<Option<LaborResource>, _>::new(person_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(resource
            .map(|r| {
                match on {
                    Some(date) => r.active_employments_on(date),
                    None => r.active_employments(),
                }
                .into_iter()
                .cloned()
                .collect()
            })
            .unwrap_or_default())
    }
}

/// [`Query`] returning whether a person has an [`Employment`] with the
/// provided enterprise being active today.
#[derive(Clone, Copy, Debug)]
pub struct HasActiveEmployment {
    /// ID of the person.
    pub person_id: person::Id,

    /// ID of the enterprise.
    pub enterprise_id: enterprise::Id,
}

impl<R, P> Query<HasActiveEmployment> for Service<R, P>
where
    R: Repository<
        Select<By<Option<LaborResource>, person::Id>>,
        Ok = Option<LaborResource>,
        Err = Traced<repository::Error>,
    >,
{
    type Ok = bool;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        query: HasActiveEmployment,
    ) -> Result<Self::Ok, Self::Err> {
        let HasActiveEmployment {
            person_id,
            enterprise_id,
        } = query;

        Ok(self
            .repository()
            .execute(Select(By::<Option<LaborResource>, _>::new(person_id)))
            .await
            .map_err(tracerr::wrap!())?
            .is_some_and(|r| r.has_active_employment_with(enterprise_id)))
    }
}
