use std::marker::PhantomData;

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::clock;
use crate::collection::repository::CollectionRepository;
use crate::errors::ServiceError;
use crate::resource::Resource;

pub struct SeaOrmCollectionRepository<R> {
    pub db: DatabaseConnection,
    _kind: PhantomData<fn() -> R>,
}

impl<R> SeaOrmCollectionRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _kind: PhantomData } }
}

#[async_trait::async_trait]
impl<R> CollectionRepository<R> for SeaOrmCollectionRepository<R>
where
    R: Resource + IntoActiveModel<R::ActiveModel>,
{
    async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let mut query = R::Entity::find();
        for (column, order) in R::ordering() {
            query = query.order_by(column, order);
        }
        Ok(query.all(&self.db).await?)
    }

    async fn insert(&self, input: R::CreateInput, now: DateTimeWithTimeZone) -> Result<R, ServiceError> {
        let mut active: R::ActiveModel = R::from_input(input, 0, now).into_active_model().reset_all();
        // id comes from the sequence
        active.not_set(R::id_column());
        Ok(active.insert(&self.db).await?)
    }

    async fn update(&self, input: R::UpdateInput) -> Result<R, ServiceError> {
        let id = R::target_id(&input);
        let txn = self.db.begin().await?;
        let current = R::Entity::find()
            .filter(R::id_column().eq(id))
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        let now = clock::next_after(current.updated_at());

        // only the provided columns appear in the SET list
        let result = R::Entity::update_many()
            .set(R::changes(input, now))
            .filter(R::id_column().eq(id))
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(R::KIND, id));
        }
        let updated = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        txn.commit().await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{
        CreateCaseStudyInput, CreateContactSubmissionInput, CreateContentInput, UpdateCaseStudyInput, UpdateContentInput,
    };
    use crate::patch::Patch;
    use crate::resource::{CaseStudy, ContactSubmission, Offering};
    use crate::test_support::{get_db, unmigrated_db};
    use chrono::Duration;

    fn content(title: &str, order_index: i32) -> CreateContentInput {
        CreateContentInput { title: title.into(), description: "d".into(), order_index }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_lists_in_order() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<Offering>::new(get_db().await?);
        assert!(repo.list().await?.is_empty());

        let now = clock::now();
        let b = repo.insert(content("b", 5), now).await?;
        let a = repo.insert(content("a", 1), now).await?;
        let c = repo.insert(content("c", 5), now).await?;
        assert!(a.id > 0 && b.id > 0 && a.id != b.id);
        assert_eq!(a.created_at, a.updated_at);

        let ids: Vec<i32> = repo.list().await?.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        Ok(())
    }

    fn study() -> CreateCaseStudyInput {
        CreateCaseStudyInput {
            main_title: "M".into(),
            primary_subtitle: "P".into(),
            primary_description: "D".into(),
            secondary_subtitle: Some("S".into()),
            secondary_description: Some("SD".into()),
            order_index: 0,
        }
    }

    #[tokio::test]
    async fn update_writes_only_provided_columns() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<CaseStudy>::new(get_db().await?);
        let created = repo.insert(study(), clock::now()).await?;

        let updated = repo
            .update(UpdateCaseStudyInput { id: created.id, secondary_subtitle: Patch::Null, ..Default::default() })
            .await?;
        assert_eq!(updated.secondary_subtitle, None);
        assert_eq!(updated.secondary_description.as_deref(), Some("SD"));
        assert_eq!(updated.main_title, "M");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(repo.list().await?, vec![updated]);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<Offering>::new(get_db().await?);
        let err = repo.update(UpdateContentInput { id: 4242, title: Some("t".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 4242, .. }));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_updates_to_different_fields_both_stick() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<Offering>::new(get_db().await?);
        let created = repo
            .insert(CreateContentInput { title: "T0".into(), description: "D0".into(), order_index: 0 }, clock::now())
            .await?;

        let (a, b) = tokio::join!(
            repo.update(UpdateContentInput { id: created.id, title: Some("T1".into()), ..Default::default() }),
            repo.update(UpdateContentInput { id: created.id, description: Some("D1".into()), ..Default::default() }),
        );
        let (a, b) = (a?, b?);
        assert_ne!(a.updated_at, b.updated_at);

        let stored = repo.list().await?.remove(0);
        assert_eq!(stored.title, "T1");
        assert_eq!(stored.description, "D1");
        assert_eq!(stored.updated_at, a.updated_at.max(b.updated_at));
        Ok(())
    }

    #[tokio::test]
    async fn contact_submissions_newest_first() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<ContactSubmission>::new(get_db().await?);
        let input = CreateContactSubmissionInput {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.co".into(),
            phone: "1".into(),
            message: "m".into(),
        };
        let t0 = clock::now();
        let old = repo.insert(input.clone(), t0 - Duration::seconds(10)).await?;
        let new = repo.insert(input.clone(), t0).await?;
        let mid = repo.insert(input, t0 - Duration::seconds(5)).await?;

        let ids: Vec<i32> = repo.list().await?.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![new.id, mid.id, old.id]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_is_storage_error() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let repo = SeaOrmCollectionRepository::<Offering>::new(unmigrated_db().await?);
        assert!(matches!(repo.list().await, Err(ServiceError::Storage(_))));
        assert!(matches!(repo.insert(content("x", 0), clock::now()).await, Err(ServiceError::Storage(_))));
        Ok(())
    }
}
