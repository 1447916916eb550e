//! [`Command`] for creating a new [`LaborResource`].

use common::operations::{By, Insert, Publish, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{labor, person, LaborResource},
    infra::{publisher, repository, Publisher, Repository},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`LaborResource`].
#[derive(Clone, Copy, Debug)]
pub struct CreateLaborResource {
    /// ID of the person to create a [`LaborResource`] for.
    pub person_id: person::Id,
}

impl<R, P> Command<CreateLaborResource> for Service<R, P>
where
    R: Repository<
            Select<By<Option<LaborResource>, person::Id>>,
            Ok = Option<LaborResource>,
            Err = Traced<repository::Error>,
        > + Repository<
            Insert<LaborResource>,
            Ok = (),
            Err = Traced<repository::Error>,
        >,
    P: Publisher<
        Publish<labor::Event>,
        Ok = (),
        Err = Traced<publisher::Error>,
    >,
{
    type Ok = LaborResource;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateLaborResource,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateLaborResource { person_id } = cmd;

        let existing = self
            .repository()
            .execute(Select(By::<Option<LaborResource>, _>::new(person_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::PersonAlreadyHasResource(person_id)));
        }

        let mut resource = LaborResource::create(labor::Id::new(), person_id);
        let events = resource.drain_events();
        let created = resource.clone();

        self.repository()
            .execute(Insert(resource))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        for event in events {
            self.publisher()
                .execute(Publish(event))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        log::debug!(
            "created `LaborResource(id: {})` for `Person(id: {person_id})`",
            created.id(),
        );

        Ok(created)
    }
}

/// Error of [`CreateLaborResource`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Person already has a [`LaborResource`].
    #[display("`Person(id: {_0})` already has a `LaborResource`")]
    PersonAlreadyHasResource(#[error(not(source))] person::Id),

    /// [`Publisher`] error.
    #[display("`Publisher` operation failed: {_0}")]
    #[from]
    Publish(publisher::Error),

    /// [`Repository`] error.
    #[display("`Repository` operation failed: {_0}")]
    #[from]
    Store(repository::Error),
}
