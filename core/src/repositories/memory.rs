//! Process-local repository used by tests and the `memory` storage backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::base::{EntityPredicate, Repository};
use crate::domain::entities::Entity;
use crate::domain::specification::{SortOrder, Specification};
use crate::errors::{DomainError, DomainResult};

/// In-memory repository evaluating the callable form of specifications
pub struct InMemoryRepository<T: Entity> {
    records: Arc<RwLock<HashMap<String, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-populated with `records`
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored records, active or not
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn sorted_matches(&self, spec: &Specification<T>, sort: SortOrder) -> Vec<T> {
        let records = self.records.read().await;
        let mut matches: Vec<T> = records
            .values()
            .filter(|record| spec.is_satisfied_by(record))
            .cloned()
            .collect();
        matches.sort_by(|a, b| sort.compare(a, b));
        matches
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_matching(&self, spec: &Specification<T>, sort: SortOrder) -> DomainResult<Vec<T>> {
        Ok(self.sorted_matches(spec, sort).await)
    }

    async fn find_where(&self, predicate: &EntityPredicate<T>) -> DomainResult<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().filter(|record| predicate(*record)).cloned().collect())
    }

    async fn find_page(
        &self,
        spec: &Specification<T>,
        sort: SortOrder,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<T>> {
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .sorted_matches(spec, sort)
            .await
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count(&self, spec: &Specification<T>) -> DomainResult<u64> {
        let records = self.records.read().await;
        Ok(records.values().filter(|record| spec.is_satisfied_by(record)).count() as u64)
    }

    async fn add(&self, entity: T) -> DomainResult<T> {
        let mut records = self.records.write().await;

        // Ids are generated server-side, a clash means a caller bug
        if records.contains_key(entity.id()) {
            return Err(DomainError::Storage {
                message: format!("{} with id {} already exists", T::RESOURCE, entity.id()),
            });
        }

        records.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> DomainResult<T> {
        let mut records = self.records.write().await;

        if !records.contains_key(entity.id()) {
            return Err(DomainError::not_found(T::RESOURCE));
        }

        records.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }
}
