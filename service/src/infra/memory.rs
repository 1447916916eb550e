//! In-memory [`Repository`] and [`Publisher`] adapters.

use std::{
    collections::HashMap,
    mem,
    sync::{PoisonError, RwLock},
};

use common::{
    operations::{By, Insert, Publish, Select, Update},
    Handler,
};
use tracerr::Traced;

use crate::domain::{
    labor::{self, Event},
    person, LaborResource,
};
#[cfg(doc)]
use crate::infra::{Publisher, Repository};

use super::{publisher, repository};

/// In-memory [`Repository`] of [`LaborResource`]s.
///
/// Stores and hands out owned copies only, so aggregate instances are never
/// shared between callers.
#[derive(Debug, Default)]
pub struct InMemory {
    /// Stored [`LaborResource`]s.
    resources: RwLock<HashMap<labor::Id, LaborResource>>,
}

impl Handler<Select<By<Option<LaborResource>, labor::Id>>> for InMemory {
    type Ok = Option<LaborResource>;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LaborResource>, labor::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .resources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&by.into_inner())
            .cloned())
    }
}

impl Handler<Select<By<Option<LaborResource>, person::Id>>> for InMemory {
    type Ok = Option<LaborResource>;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LaborResource>, person::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let person_id = by.into_inner();
        Ok(self
            .resources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|r| r.person_id() == person_id)
            .cloned())
    }
}

impl Handler<Insert<LaborResource>> for InMemory {
    type Ok = ();
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        Insert(resource): Insert<LaborResource>,
    ) -> Result<Self::Ok, Self::Err> {
        use repository::Error as E;

        let mut resources =
            self.resources.write().unwrap_or_else(PoisonError::into_inner);

        if resources.contains_key(&resource.id()) {
            return Err(tracerr::new!(E::DuplicateResource(resource.id())));
        }
        if resources.values().any(|r| r.person_id() == resource.person_id())
        {
            return Err(tracerr::new!(E::DuplicatePerson(
                resource.person_id()
            )));
        }

        _ = resources.insert(resource.id(), resource);
        Ok(())
    }
}

impl Handler<Update<LaborResource>> for InMemory {
    type Ok = ();
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        Update(resource): Update<LaborResource>,
    ) -> Result<Self::Ok, Self::Err> {
        use repository::Error as E;

        let mut resources =
            self.resources.write().unwrap_or_else(PoisonError::into_inner);

        if !resources.contains_key(&resource.id()) {
            return Err(tracerr::new!(E::UnknownResource(resource.id())));
        }

        _ = resources.insert(resource.id(), resource);
        Ok(())
    }
}

/// In-memory [`Publisher`] recording every published [`Event`].
#[derive(Debug, Default)]
pub struct Buffer {
    /// Published [`Event`]s, in publishing order.
    published: RwLock<Vec<Event>>,
}

impl Buffer {
    /// Removes and returns all the [`Event`]s published so far.
    pub fn drain(&self) -> Vec<Event> {
        mem::take(
            &mut *self
                .published
                .write()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl Handler<Publish<Event>> for Buffer {
    type Ok = ();
    type Err = Traced<publisher::Error>;

    async fn execute(
        &self,
        Publish(event): Publish<Event>,
    ) -> Result<Self::Ok, Self::Err> {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select, Update};
    use futures::executor::block_on;

    use crate::domain::{labor, person, LaborResource};
    use crate::infra::repository;

    use super::{Handler as _, InMemory};

    fn resource() -> LaborResource {
        LaborResource::create(labor::Id::new(), person::Id::new())
    }

    #[test]
    fn stores_and_selects_by_both_ids() {
        let repo = InMemory::default();
        let resource = resource();

        block_on(repo.execute(Insert(resource.clone()))).unwrap();

        let by_id: Option<LaborResource> = block_on(
            repo.execute(Select(By::new(resource.id()))),
        )
        .unwrap();
        assert_eq!(by_id.map(|r| r.id()), Some(resource.id()));

        let by_person: Option<LaborResource> = block_on(
            repo.execute(Select(By::new(resource.person_id()))),
        )
        .unwrap();
        assert_eq!(by_person.map(|r| r.id()), Some(resource.id()));

        let missing: Option<LaborResource> =
            block_on(repo.execute(Select(By::new(labor::Id::new())))).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn rejects_second_resource_of_the_same_person() {
        let repo = InMemory::default();
        let person_id = person::Id::new();

        block_on(
            repo.execute(Insert(LaborResource::create(
                labor::Id::new(),
                person_id,
            ))),
        )
        .unwrap();

        let duplicate =
            LaborResource::create(labor::Id::new(), person_id);
        let result = block_on(repo.execute(Insert(duplicate)));

        assert!(matches!(
            result.unwrap_err().as_ref(),
            repository::Error::DuplicatePerson(id) if *id == person_id,
        ));
    }

    #[test]
    fn updates_only_stored_resources() {
        let repo = InMemory::default();
        let resource = resource();

        assert!(matches!(
            block_on(repo.execute(Update(resource.clone())))
                .unwrap_err()
                .as_ref(),
            repository::Error::UnknownResource(_),
        ));

        block_on(repo.execute(Insert(resource.clone()))).unwrap();
        block_on(repo.execute(Update(resource))).unwrap();
    }
}
