//! [`Command`] definition.

pub mod cancel_employment;
pub mod create_employment;
pub mod create_labor_resource;
pub mod initiate_leaving;
pub mod onboard_employment;
pub mod terminate_employment;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    cancel_employment::CancelEmployment, create_employment::CreateEmployment,
    create_labor_resource::CreateLaborResource,
    initiate_leaving::InitiateLeaving, onboard_employment::OnboardEmployment,
    terminate_employment::TerminateEmployment,
};

#[cfg(test)]
mod spec {
    use common::Date;
    use futures::executor::block_on;

    use crate::{
        domain::{
            brand, enterprise,
            labor::{
                self,
                employment::{Kind, Position, Status},
                CreateEmploymentError, Event, OperationError,
            },
            person,
        },
        infra::memory::{Buffer, InMemory},
        Service,
    };

    use super::{
        create_employment, create_labor_resource, onboard_employment,
        CancelEmployment, Command as _, CreateEmployment, CreateLaborResource,
        InitiateLeaving, OnboardEmployment, TerminateEmployment,
    };

    fn service() -> Service<InMemory, Buffer> {
        Service::new(InMemory::default(), Buffer::default())
    }

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar(year, month, day).unwrap()
    }

    fn employ(
        person_id: person::Id,
        start: Date,
        end: Option<Date>,
    ) -> CreateEmployment {
        CreateEmployment {
            person_id,
            kind: Kind::FullTime,
            enterprise_id: enterprise::Id::new(),
            brand_id: brand::Id::new(),
            labor_policy_id: brand::PolicyId::new(),
            position: Position::new("Barista").unwrap(),
            department: None,
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn creating_employment_bootstraps_the_resource() {
        let service = service();
        let person_id = person::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();

        assert_eq!(created.status, Status::PendingOnboard);

        let published = service.publisher().drain();
        assert_eq!(published.len(), 2);
        assert!(matches!(published[0], Event::ResourceCreated(_)));
        assert!(matches!(
            published[1],
            Event::EmploymentCreated(e) if e.employment_id == created.id,
        ));
    }

    #[test]
    fn whole_lifecycle_round_trip() {
        let service = service();
        let person_id = person::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();
        let labor_resource_id = created.labor_resource_id;

        let onboarded = block_on(service.execute(OnboardEmployment {
            labor_resource_id,
            employment_id: created.id,
            onboard_date: date(2023, 1, 5),
            remarks: None,
        }))
        .unwrap();
        assert_eq!(onboarded.status, Status::Active);

        let leaving = block_on(service.execute(InitiateLeaving {
            labor_resource_id,
            employment_id: onboarded.id,
            leaving_date: date(2023, 6, 30),
            remarks: None,
        }))
        .unwrap();
        assert_eq!(leaving.status, Status::Leaving);

        let terminated = block_on(service.execute(TerminateEmployment {
            labor_resource_id,
            employment_id: leaving.id,
            remarks: None,
        }))
        .unwrap();
        assert_eq!(terminated.status, Status::Terminated);

        let published = service.publisher().drain();
        assert_eq!(published.len(), 5);
        assert!(matches!(published[2], Event::EmploymentOnboarded(_)));
        assert!(matches!(
            published[3],
            Event::EmploymentLeavingInitiated(e)
                if e.leaving_date == date(2023, 6, 30),
        ));
        assert!(matches!(published[4], Event::EmploymentTerminated(_)));
    }

    #[test]
    fn second_resource_of_the_same_person_is_rejected() {
        let service = service();
        let person_id = person::Id::new();

        let resource = block_on(
            service.execute(CreateLaborResource { person_id }),
        )
        .unwrap();
        assert_eq!(resource.person_id(), person_id);

        let result = block_on(service.execute(CreateLaborResource {
            person_id,
        }));

        assert!(matches!(
            result.unwrap_err().as_ref(),
            create_labor_resource::ExecutionError::PersonAlreadyHasResource(
                id,
            ) if *id == person_id,
        ));
    }

    #[test]
    fn overlapping_employment_is_rejected_and_not_published() {
        let service = service();
        let person_id = person::Id::new();

        _ = block_on(service.execute(employ(
            person_id,
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();
        let published_so_far = service.publisher().drain().len();

        let result = block_on(service.execute(employ(
            person_id,
            date(2023, 6, 1),
            None,
        )));

        assert!(matches!(
            result.unwrap_err().as_ref(),
            create_employment::ExecutionError::Employment(
                CreateEmploymentError::Overlap(_),
            ),
        ));
        assert_eq!(published_so_far, 2);
        assert!(service.publisher().drain().is_empty());
    }

    #[test]
    fn canceled_employment_cannot_be_onboarded() {
        let service = service();
        let person_id = person::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();
        let labor_resource_id = created.labor_resource_id;

        let canceled = block_on(service.execute(CancelEmployment {
            labor_resource_id,
            employment_id: created.id,
            remarks: None,
        }))
        .unwrap();
        assert_eq!(canceled.status, Status::Canceled);

        let result = block_on(service.execute(OnboardEmployment {
            labor_resource_id,
            employment_id: canceled.id,
            onboard_date: date(2023, 1, 5),
            remarks: None,
        }));

        assert!(matches!(
            result.unwrap_err().as_ref(),
            onboard_employment::ExecutionError::Employment(
                OperationError::Transition(_),
            ),
        ));
    }

    #[test]
    fn unknown_resource_is_reported() {
        let service = service();

        let result = block_on(service.execute(OnboardEmployment {
            labor_resource_id: labor::Id::new(),
            employment_id: labor::employment::Id::new(),
            onboard_date: date(2023, 1, 5),
            remarks: None,
        }));

        assert!(matches!(
            result.unwrap_err().as_ref(),
            onboard_employment::ExecutionError::ResourceNotExists(_),
        ));
        assert!(service.publisher().drain().is_empty());
    }
}
