//! [`Command`] for creating a new employment relationship.

use common::{
    operations::{By, Insert, Publish, Select, Update},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        brand, enterprise,
        labor::{self, employment, Employment},
        person, LaborResource,
    },
    infra::{publisher, repository, Publisher, Repository},
    Service,
};

use super::Command;

/// [`Command`] for creating a new employment relationship.
///
/// The person's [`LaborResource`] is created on the fly if it doesn't exist
/// yet.
#[derive(Clone, Debug)]
pub struct CreateEmployment {
    /// ID of the person being employed.
    pub person_id: person::Id,

    /// [`Kind`](employment::Kind) of the new employment.
    pub kind: employment::Kind,

    /// ID of the employing enterprise.
    pub enterprise_id: enterprise::Id,

    /// ID of the brand the new employment is attached to.
    pub brand_id: brand::Id,

    /// ID of the labor policy the new employment is subject to.
    pub labor_policy_id: brand::PolicyId,

    /// [`Position`](employment::Position) the person is employed for.
    pub position: employment::Position,

    /// [`Department`](employment::Department) the person is employed in.
    pub department: Option<employment::Department>,

    /// First [`Date`] of the new employment.
    pub start_date: Date,

    /// Last [`Date`] of the new employment.
    ///
    /// [`None`] means the new employment is open-ended.
    pub end_date: Option<Date>,
}

impl<R, P> Command<CreateEmployment> for Service<R, P>
where
    R: Repository<
            Select<By<Option<LaborResource>, person::Id>>,
            Ok = Option<LaborResource>,
            Err = Traced<repository::Error>,
        > + Repository<
            Insert<LaborResource>,
            Ok = (),
            Err = Traced<repository::Error>,
        > + Repository<
            Update<LaborResource>,
            Ok = (),
            Err = Traced<repository::Error>,
        >,
    P: Publisher<
        Publish<labor::Event>,
        Ok = (),
        Err = Traced<publisher::Error>,
    >,
{
    type Ok = Employment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmployment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployment {
            person_id,
            kind,
            enterprise_id,
            brand_id,
            labor_policy_id,
            position,
            department,
            start_date,
            end_date,
        } = cmd;

        let existing = self
            .repository()
            .execute(Select(By::<Option<LaborResource>, _>::new(person_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let is_new = existing.is_none();
        let mut resource = existing.unwrap_or_else(|| {
            LaborResource::create(labor::Id::new(), person_id)
        });

        let created = resource
            .create_employment(employment::NewEmployment {
                kind,
                enterprise_id,
                brand_id,
                labor_policy_id,
                position,
                department,
                start_date,
                end_date,
            })
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let events = resource.drain_events();
        if is_new {
            self.repository()
                .execute(Insert(resource))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        } else {
            self.repository()
                .execute(Update(resource))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }
        for event in events {
            self.publisher()
                .execute(Publish(event))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        log::debug!(
            "created `Employment(id: {})` for `Person(id: {person_id})`",
            created.id,
        );

        Ok(created)
    }
}

/// Error of [`CreateEmployment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Employment creation rejected by the [`LaborResource`].
    #[display("employment creation rejected: {_0}")]
    #[from]
    Employment(labor::CreateEmploymentError),

    /// [`Publisher`] error.
    #[display("`Publisher` operation failed: {_0}")]
    #[from]
    Publish(publisher::Error),

    /// [`Repository`] error.
    #[display("`Repository` operation failed: {_0}")]
    #[from]
    Store(repository::Error),
}
