//! [`Command`] for onboarding a person.

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

/// [`Command`] for onboarding a person for a pending employment.
#[derive(Clone, Debug)]
pub struct OnboardEmployment {
    /// ID of the [`LaborResource`] owning the employment.
    pub labor_resource_id: labor::Id,

    /// ID of the [`Employment`] snapshot to onboard through.
    pub employment_id: employment::Id,

    /// [`Date`] the person onboards on.
    pub onboard_date: Date,

    /// Optional [`Remarks`](employment::Remarks) accompanying the
    /// transition.
    pub remarks: Option<employment::Remarks>,
}

impl<R, P> Command<OnboardEmployment> for Service<R, P>
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
        cmd: OnboardEmployment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let OnboardEmployment {
            labor_resource_id,
            employment_id,
            onboard_date,
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

        let onboarded = resource
            .onboard(employment_id, onboard_date, remarks)
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
            "onboarded `Employment(id: {})` on {onboard_date}",
            onboarded.id,
        );

        Ok(onboarded)
    }
}

/// Error of [`OnboardEmployment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Onboarding rejected by the [`LaborResource`].
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
