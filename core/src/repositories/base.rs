//! Generic repository trait defining storage operations for any entity.

use async_trait::async_trait;

use crate::domain::entities::Entity;
use crate::domain::specification::{SortOrder, Specification};
use crate::errors::DomainResult;

/// Ad-hoc predicate for [`Repository::find_where`]
pub type EntityPredicate<T> = dyn Fn(&T) -> bool + Send + Sync;

/// Storage contract for one entity type
///
/// Methods taking a specification apply it exactly as given; they do not add
/// the active-only filter. Callers that serve normal reads go through
/// [`crate::services::query`], which scopes every specification to active
/// records.
///
/// # Example
/// ```no_run
/// # use inv_core::domain::entities::Product;
/// # use inv_core::domain::specification::{product, SortOrder, Specification};
/// # use inv_core::repositories::Repository;
/// # async fn example(repo: &dyn Repository<Product>) -> Result<(), Box<dyn std::error::Error>> {
/// let spec = Specification::active().and(&product::by_category("tools"));
/// let total = repo.count(&spec).await?;
/// let first_page = repo.find_page(&spec, SortOrder::NewestFirst, 0, 10).await?;
/// println!("{} of {}", first_page.len(), total);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find a record by id, active or not
    ///
    /// # Returns
    /// * `Ok(Some(T))` - Record found
    /// * `Ok(None)` - No record with this id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// Every stored record, including soft-deleted ones
    async fn find_all(&self) -> DomainResult<Vec<T>>;

    /// Records satisfying `spec`, ordered by `sort`
    async fn find_matching(&self, spec: &Specification<T>, sort: SortOrder) -> DomainResult<Vec<T>>;

    /// Records satisfying an arbitrary predicate
    ///
    /// The predicate cannot be pushed down to storage; prefer
    /// [`Repository::find_matching`] for anything on a hot path.
    async fn find_where(&self, predicate: &EntityPredicate<T>) -> DomainResult<Vec<T>>;

    /// One window of the records satisfying `spec`
    ///
    /// # Arguments
    /// * `spec` - Filter
    /// * `sort` - Ordering applied before the window
    /// * `offset` - Records to skip
    /// * `limit` - Maximum records returned
    async fn find_page(
        &self,
        spec: &Specification<T>,
        sort: SortOrder,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<T>>;

    /// Number of records satisfying `spec`
    async fn count(&self, spec: &Specification<T>) -> DomainResult<u64>;

    /// Whether any record satisfies `spec`
    async fn exists(&self, spec: &Specification<T>) -> DomainResult<bool> {
        Ok(self.count(spec).await? > 0)
    }

    /// Persist a new record
    async fn add(&self, entity: T) -> DomainResult<T>;

    /// Replace an existing record
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No record with this id
    async fn update(&self, entity: T) -> DomainResult<T>;

    /// Find a record by id, treating soft-deleted records as absent
    async fn get_active(&self, id: &str) -> DomainResult<Option<T>> {
        Ok(self.find_by_id(id).await?.filter(|entity| entity.is_active()))
    }

    /// Mark a record inactive
    ///
    /// # Returns
    /// * `Ok(true)` - Record was active and is now inactive
    /// * `Ok(false)` - No active record with this id
    async fn soft_delete(&self, id: &str) -> DomainResult<bool> {
        match self.get_active(id).await? {
            Some(mut entity) => {
                entity.deactivate();
                self.update(entity).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
