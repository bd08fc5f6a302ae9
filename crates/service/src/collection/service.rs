use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use super::repository::CollectionRepository;
use crate::clock;
use crate::errors::ServiceError;
use crate::resource::{Editable, Resource};
use crate::validation::Validate;

/// List/create/update for one record kind, independent of the web framework.
pub struct CollectionService<R: Resource> {
    repo: Arc<dyn CollectionRepository<R>>,
}

impl<R: Resource> Clone for CollectionService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: Resource> CollectionService<R> {
    pub fn new(repo: Arc<dyn CollectionRepository<R>>) -> Self { Self { repo } }

    /// All records in display order; empty when nothing is stored.
    #[instrument(skip_all, fields(kind = R::KIND))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let records = self.repo.list().await.map_err(|e| failed::<R>("list", e))?;
        debug!(count = records.len(), "records_listed");
        Ok(records)
    }

    /// Validate and store a new record. `created_at` and `updated_at` get the same instant.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::collection::{CollectionService, repository::mock::InMemoryCollectionRepository};
    /// use service::inputs::CreateContentInput;
    /// use service::resource::Offering;
    /// let svc: CollectionService<Offering> = CollectionService::new(Arc::new(InMemoryCollectionRepository::<Offering>::default()));
    /// let input = CreateContentInput { title: "X".into(), description: "Y".into(), order_index: 0 };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.title, "X");
    /// assert_eq!(created.created_at, created.updated_at);
    /// ```
    #[instrument(skip_all, fields(kind = R::KIND))]
    pub async fn create(&self, input: R::CreateInput) -> Result<R, ServiceError> {
        input.validate().map_err(|e| failed::<R>("create", e))?;
        let created = self.repo.insert(input, clock::now()).await.map_err(|e| failed::<R>("create", e))?;
        info!(id = created.id(), "record_created");
        Ok(created)
    }
}

impl<R: Editable> CollectionService<R> {
    /// Apply the fields present in `input` to an existing record.
    ///
    /// Fails with `NotFound` when no record has the given id. The stored
    /// `updated_at` always moves strictly forward.
    #[instrument(skip_all, fields(kind = R::KIND, id = R::target_id(&input)))]
    pub async fn update(&self, input: R::UpdateInput) -> Result<R, ServiceError> {
        self.apply(input).await.map_err(|e| failed::<R>("update", e))
    }

    async fn apply(&self, input: R::UpdateInput) -> Result<R, ServiceError> {
        input.validate()?;
        let id = R::target_id(&input);
        let saved = self.repo.update(input).await?;
        info!(id, "record_updated");
        Ok(saved)
    }
}

fn failed<R: Resource>(op: &'static str, err: ServiceError) -> ServiceError {
    match &err {
        ServiceError::Storage(_) => error!(kind = R::KIND, op, error = %err, "storage_failed"),
        _ => warn!(kind = R::KIND, op, error = %err, "request_rejected"),
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::repository::mock::InMemoryCollectionRepository;
    use crate::inputs::{CreateCaseStudyInput, CreateContentInput, UpdateCaseStudyInput, UpdateContentInput};
    use crate::patch::Patch;
    use crate::resource::{CaseStudy, Insight, Offering};
    use async_trait::async_trait;
    use sea_orm::prelude::DateTimeWithTimeZone;

    fn memory<R: Resource>() -> CollectionService<R> {
        CollectionService::new(Arc::new(InMemoryCollectionRepository::<R>::default()))
    }

    fn content(title: &str, order_index: i32) -> CreateContentInput {
        CreateContentInput { title: title.into(), description: format!("{title} description"), order_index }
    }

    #[tokio::test]
    async fn list_empty_is_ok() {
        let svc = memory::<Insight>();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_sorted_with_ties_kept() {
        let svc = memory::<Offering>();
        for (t, i) in [("c", 2), ("a", 0), ("b", 2), ("d", 1)] {
            svc.create(content(t, i)).await.unwrap();
        }
        let listed = svc.list().await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "d", "c", "b"]);
        assert!(listed.windows(2).all(|w| w[0].order_index <= w[1].order_index));
    }

    #[tokio::test]
    async fn create_rejects_invalid_without_storing() {
        let svc = memory::<Offering>();
        let err = svc.create(content("", 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "title"));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reorder_scenario() {
        let svc = memory::<Offering>();
        svc.create(content("first", 1)).await.unwrap();
        svc.create(content("second", 2)).await.unwrap();
        let x = svc.create(content("X", 0)).await.unwrap();
        assert!(x.id > 0);
        assert_eq!(x.order_index, 0);
        assert_eq!(x.created_at, x.updated_at);

        let updated = svc.update(UpdateContentInput { id: x.id, order_index: Some(3), ..Default::default() }).await.unwrap();
        assert_eq!(updated.order_index, 3);
        assert_eq!(updated.title, "X");
        assert_eq!(updated.description, "X description");
        assert_eq!(updated.created_at, x.created_at);
        assert!(updated.updated_at > x.updated_at);

        let listed = svc.list().await.unwrap();
        assert_eq!(listed.last().map(|o| o.id), Some(x.id));
    }

    #[tokio::test]
    async fn repeated_updates_keep_moving_forward() {
        let svc = memory::<Offering>();
        let o = svc.create(content("X", 0)).await.unwrap();
        let mut last = o.updated_at;
        for i in 0..5 {
            let u = svc.update(UpdateContentInput { id: o.id, order_index: Some(i), ..Default::default() }).await.unwrap();
            assert!(u.updated_at > last);
            last = u.updated_at;
        }
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = memory::<Offering>();
        let err = svc.update(UpdateContentInput { id: 99, title: Some("t".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { kind: "offering", id: 99 }));
    }

    #[tokio::test]
    async fn case_study_null_patch_vs_omission() {
        let svc = memory::<CaseStudy>();
        let created = svc
            .create(CreateCaseStudyInput {
                main_title: "M".into(),
                primary_subtitle: "P".into(),
                primary_description: "D".into(),
                secondary_subtitle: Some("S".into()),
                secondary_description: Some("SD".into()),
                order_index: 0,
            })
            .await
            .unwrap();

        let kept = svc.update(UpdateCaseStudyInput { id: created.id, main_title: Some("M2".into()), ..Default::default() }).await.unwrap();
        assert_eq!(kept.secondary_subtitle.as_deref(), Some("S"));

        let cleared = svc.update(UpdateCaseStudyInput { id: created.id, secondary_subtitle: Patch::Null, ..Default::default() }).await.unwrap();
        assert_eq!(cleared.secondary_subtitle, None);
        assert_eq!(cleared.secondary_description.as_deref(), Some("SD"));
        assert_eq!(cleared.main_title, "M2");
    }

    #[tokio::test]
    async fn concurrent_partial_updates_keep_each_field() {
        let svc = memory::<Offering>();
        let id = svc.create(CreateContentInput { title: "T0".into(), description: "D0".into(), order_index: 0 }).await.unwrap().id;

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    let input = if i % 2 == 0 {
                        UpdateContentInput { id, title: Some("T1".into()), ..Default::default() }
                    } else {
                        UpdateContentInput { id, description: Some("D1".into()), ..Default::default() }
                    };
                    svc.update(input).await
                })
            })
            .collect();
        for t in tasks {
            t.await.unwrap().unwrap();
        }

        let stored = svc.list().await.unwrap().remove(0);
        assert_eq!(stored.title, "T1");
        assert_eq!(stored.description, "D1");
        assert_eq!(stored.order_index, 0);
    }

    struct BrokenStore;

    #[async_trait]
    impl CollectionRepository<Offering> for BrokenStore {
        async fn list(&self) -> Result<Vec<Offering>, ServiceError> { Err(ServiceError::Storage("disk on fire".into())) }
        async fn insert(&self, _: CreateContentInput, _: DateTimeWithTimeZone) -> Result<Offering, ServiceError> {
            Err(ServiceError::Storage("disk on fire".into()))
        }
        async fn update(&self, _: UpdateContentInput) -> Result<Offering, ServiceError> {
            Err(ServiceError::Storage("disk on fire".into()))
        }
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let svc: CollectionService<Offering> = CollectionService::new(Arc::new(BrokenStore));
        assert!(matches!(svc.list().await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.create(content("X", 0)).await, Err(ServiceError::Storage(_))));
        let upd = svc.update(UpdateContentInput { id: 1, ..Default::default() }).await;
        assert!(matches!(upd, Err(ServiceError::Storage(_))));
    }
}
