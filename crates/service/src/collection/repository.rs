use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::errors::ServiceError;
use crate::resource::Resource;

/// Persistence for one record kind.
#[async_trait]
pub trait CollectionRepository<R: Resource>: Send + Sync {
    /// Every record, in the kind's display order.
    async fn list(&self) -> Result<Vec<R>, ServiceError>;
    /// Store a new record stamped with `now`; the store assigns the id.
    async fn insert(&self, input: R::CreateInput, now: DateTimeWithTimeZone) -> Result<R, ServiceError>;
    /// Write only the fields present in `input`, moving `updated_at` strictly
    /// forward, and return the full record. Atomic with respect to other updates.
    async fn update(&self, input: R::UpdateInput) -> Result<R, ServiceError>;
}

/// In-memory repository for tests and database-less runs
pub mod mock {
    use super::*;
    use crate::clock;
    use std::sync::atomic::{AtomicI32, Ordering};
    use tokio::sync::RwLock;

    pub struct InMemoryCollectionRepository<R> {
        rows: RwLock<Vec<R>>,
        next_id: AtomicI32,
    }

    impl<R> Default for InMemoryCollectionRepository<R> {
        fn default() -> Self {
            Self { rows: RwLock::new(Vec::new()), next_id: AtomicI32::new(1) }
        }
    }

    #[async_trait]
    impl<R: Resource> CollectionRepository<R> for InMemoryCollectionRepository<R> {
        async fn list(&self) -> Result<Vec<R>, ServiceError> {
            let mut rows = self.rows.read().await.clone();
            rows.sort_by(|a, b| a.display_cmp(b));
            Ok(rows)
        }

        async fn insert(&self, input: R::CreateInput, now: DateTimeWithTimeZone) -> Result<R, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let record = R::from_input(input, id, now);
            self.rows.write().await.push(record.clone());
            Ok(record)
        }

        async fn update(&self, input: R::UpdateInput) -> Result<R, ServiceError> {
            let id = R::target_id(&input);
            let mut rows = self.rows.write().await;
            let slot = rows.iter_mut().find(|r| r.id() == id).ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
            let now = clock::next_after(slot.updated_at());
            slot.apply_update(input, now);
            Ok(slot.clone())
        }
    }
}
