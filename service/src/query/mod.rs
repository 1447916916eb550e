//! [`Query`] definition.

pub mod employments;
pub mod labor_resource;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{repository, Repository},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Repository`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct RepositoryQuery<T>(T);

impl<W, B> RepositoryQuery<By<W, B>> {
    /// Creates a new [`RepositoryQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<R, P, W, B> Query<RepositoryQuery<By<W, B>>> for Service<R, P>
where
    R: Repository<Select<By<W, B>>, Ok = W, Err = Traced<repository::Error>>,
{
    type Ok = W;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        RepositoryQuery(by): RepositoryQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.repository()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use futures::executor::block_on;

    use crate::{
        command::{CreateEmployment, OnboardEmployment},
        domain::{
            brand, enterprise,
            labor::employment::{Kind, Position},
            person, LaborResource,
        },
        infra::memory::{Buffer, InMemory},
        Service,
    };

    use super::{
        employments::{ActiveEmployments, HasActiveEmployment},
        labor_resource, Query as _,
    };

    fn service() -> Service<InMemory, Buffer> {
        Service::new(InMemory::default(), Buffer::default())
    }

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar(year, month, day).unwrap()
    }

    fn employ(
        person_id: person::Id,
        enterprise_id: enterprise::Id,
        start: Date,
        end: Option<Date>,
    ) -> CreateEmployment {
        CreateEmployment {
            person_id,
            kind: Kind::FullTime,
            enterprise_id,
            brand_id: brand::Id::new(),
            labor_policy_id: brand::PolicyId::new(),
            position: Position::new("Barista").unwrap(),
            department: None,
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn selects_resource_by_either_id() {
        let service = service();
        let person_id = person::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            enterprise::Id::new(),
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();

        let by_id: Option<LaborResource> = block_on(
            service
                .execute(labor_resource::ById::by(created.labor_resource_id)),
        )
        .unwrap();
        assert_eq!(by_id.map(|r| r.id()), Some(created.labor_resource_id));

        let by_person: Option<LaborResource> =
            block_on(service.execute(labor_resource::ByPerson::by(person_id)))
                .unwrap();
        assert_eq!(
            by_person.map(|r| r.person_id()),
            Some(person_id),
        );

        let missing: Option<LaborResource> = block_on(
            service.execute(labor_resource::ByPerson::by(person::Id::new())),
        )
        .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn lists_active_employments_on_a_date() {
        let service = service();
        let person_id = person::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            enterprise::Id::new(),
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        )))
        .unwrap();
        _ = block_on(service.execute(OnboardEmployment {
            labor_resource_id: created.labor_resource_id,
            employment_id: created.id,
            onboard_date: date(2023, 1, 5),
            remarks: None,
        }))
        .unwrap();

        let mid_year = block_on(service.execute(ActiveEmployments {
            person_id,
            on: Some(date(2023, 6, 1)),
        }))
        .unwrap();
        assert_eq!(mid_year.len(), 1);

        let after = block_on(service.execute(ActiveEmployments {
            person_id,
            on: Some(date(2024, 1, 1)),
        }))
        .unwrap();
        assert!(after.is_empty());

        let nobody = block_on(service.execute(ActiveEmployments {
            person_id: person::Id::new(),
            on: None,
        }))
        .unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn reports_active_employment_with_an_enterprise() {
        let service = service();
        let person_id = person::Id::new();
        let enterprise_id = enterprise::Id::new();

        let created = block_on(service.execute(employ(
            person_id,
            enterprise_id,
            date(2020, 1, 1),
            None,
        )))
        .unwrap();
        _ = block_on(service.execute(OnboardEmployment {
            labor_resource_id: created.labor_resource_id,
            employment_id: created.id,
            onboard_date: date(2020, 1, 2),
            remarks: None,
        }))
        .unwrap();

        assert!(block_on(service.execute(HasActiveEmployment {
            person_id,
            enterprise_id,
        }))
        .unwrap());
        assert!(!block_on(service.execute(HasActiveEmployment {
            person_id,
            enterprise_id: enterprise::Id::new(),
        }))
        .unwrap());
        assert!(!block_on(service.execute(HasActiveEmployment {
            person_id: person::Id::new(),
            enterprise_id,
        }))
        .unwrap());
    }
}
