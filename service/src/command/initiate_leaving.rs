//! [`Command`] for initiating leaving.

use common::{
    operations::{By, Publish, Select, Update},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        labor::{self, employment, Employment},
        LaborResource,
    },
    infra::{publisher, repository, Publisher, Repository},
    Service,
};

use super::Command;

/// [`Command`] for initiating leaving of an active employment.
#[derive(Clone, Debug)]
pub struct InitiateLeaving {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the [`Employment`] snapshot to leave through.
    pub employment_id: employment::Id,

    /// [`Date`] the employment ends on.
    pub leaving_date: Date,

    /// Optional [`Remarks`](employment::Remarks) accompanying the
    /// transition.
    pub remarks: Option<employment::Remarks>,
}

impl<R, P> Command<InitiateLeaving> for Service<R, P>
where
    R: Repository<
            Select<By<Option<LaborResource>, labor::Id>>,
            Ok = Option<LaborResource>,
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
        cmd: InitiateLeaving,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let InitiateLeaving {
            labor_resource_id,
            employment_id,
            leaving_date,
            remarks,
        } = cmd;

        let mut resource = self
            .repository()
            .execute(Select(By::<Option<LaborResource>, _>::new(
                labor_resource_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ResourceNotExists(labor_resource_id))
            .map_err(tracerr::wrap!())?;

        let leaving = resource
            .initiate_leaving(employment_id, leaving_date, remarks)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let events = resource.drain_events();
        self.repository()
            .execute(Update(resource))
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
            "initiated leaving of `Employment(id: {})` on {leaving_date}",
            leaving.id,
        );

        Ok(leaving)
    }
}

/// Error of [`InitiateLeaving`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Leaving rejected by the [`LaborResource`].
    #[display("employment operation rejected: {_0}")]
    #[from]
    Employment(labor::OperationError),

    /// [`Publisher`] error.
    #[display("`Publisher` operation failed: {_0}")]
    #[from]
    Publish(publisher::Error),

    /// [`LaborResource`] with the provided ID does not exist.
    #[display("`LaborResource(id: {_0})` does not exist")]
    ResourceNotExists(#[error(not(source))] labor::Id),

    /// [`Repository`] error.
    #[display("`Repository` operation failed: {_0}")]
    #[from]
    Store(repository::Error),
}
