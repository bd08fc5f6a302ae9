//! One [`CollectionService`] per record kind, wired to a single store.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, IntoActiveModel};

use crate::collection::repo::SeaOrmCollectionRepository;
use crate::collection::repository::mock::InMemoryCollectionRepository;
use crate::collection::CollectionService;
use crate::resource::{
    CaseStudy, ContactSubmission, Insight, LeadershipProfile, Offering, Resource, Service, Solution,
};

#[derive(Clone)]
pub struct ContentServices {
    pub offerings: CollectionService<Offering>,
    pub solutions: CollectionService<Solution>,
    pub services: CollectionService<Service>,
    pub insights: CollectionService<Insight>,
    pub case_studies: CollectionService<CaseStudy>,
    pub leadership_profiles: CollectionService<LeadershipProfile>,
    pub contact_submissions: CollectionService<ContactSubmission>,
}

fn db_backed<R>(db: &DatabaseConnection) -> CollectionService<R>
where
    R: Resource + IntoActiveModel<R::ActiveModel>,
{
    CollectionService::new(Arc::new(SeaOrmCollectionRepository::<R>::new(db.clone())))
}

fn memory_backed<R: Resource>() -> CollectionService<R> {
    CollectionService::new(Arc::new(InMemoryCollectionRepository::<R>::default()))
}

impl ContentServices {
    /// Every collection backed by the given connection pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            offerings: db_backed(&db),
            solutions: db_backed(&db),
            services: db_backed(&db),
            insights: db_backed(&db),
            case_studies: db_backed(&db),
            leadership_profiles: db_backed(&db),
            contact_submissions: db_backed(&db),
        }
    }

    /// Process-local stores; contents are lost on drop.
    pub fn in_memory() -> Self {
        Self {
            offerings: memory_backed(),
            solutions: memory_backed(),
            services: memory_backed(),
            insights: memory_backed(),
            case_studies: memory_backed(),
            leadership_profiles: memory_backed(),
            contact_submissions: memory_backed(),
        }
    }
}

/// Look up the service for a record kind by type, for generic handlers.
pub trait Provides<R: Resource> {
    fn collection(&self) -> &CollectionService<R>;
}

macro_rules! provides {
    ($($ty:ty => $field:ident),+ $(,)?) => {$(
        impl Provides<$ty> for ContentServices {
            fn collection(&self) -> &CollectionService<$ty> { &self.$field }
        }
    )+};
}

provides! {
    Offering => offerings,
    Solution => solutions,
    Service => services,
    Insight => insights,
    CaseStudy => case_studies,
    LeadershipProfile => leadership_profiles,
    ContactSubmission => contact_submissions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CreateContactSubmissionInput, CreateContentInput};

    async fn count<R: Resource>(svcs: &ContentServices) -> usize
    where
        ContentServices: Provides<R>,
    {
        <ContentServices as Provides<R>>::collection(svcs).list().await.unwrap().len()
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let svcs = ContentServices::in_memory();
        svcs.solutions
            .create(CreateContentInput { title: "S".into(), description: "D".into(), order_index: 0 })
            .await
            .unwrap();
        assert_eq!(count::<Solution>(&svcs).await, 1);
        assert_eq!(count::<Offering>(&svcs).await, 0);
        assert_eq!(count::<Service>(&svcs).await, 0);
    }

    #[tokio::test]
    async fn contact_submissions_allow_duplicates() {
        let svcs = ContentServices::in_memory();
        let input = CreateContactSubmissionInput {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "same@example.com".into(),
            phone: "1".into(),
            message: "hi".into(),
        };
        let a = svcs.contact_submissions.create(input.clone()).await.unwrap();
        let b = svcs.contact_submissions.create(input).await.unwrap();
        assert_ne!(a.id, b.id);
        let listed = svcs.contact_submissions.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, b.id);
    }
}
