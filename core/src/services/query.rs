//! Paginated query executor.
//!
//! Every read served to callers goes through these functions, which scope
//! the given specification to active records. Count and page are computed
//! from the same scoped specification.

use inv_shared::{PaginatedResponse, Pagination};

use crate::domain::entities::Entity;
use crate::domain::specification::{SortOrder, Specification};
use crate::errors::DomainResult;
use crate::repositories::Repository;

/// `active AND spec`
pub fn scoped<T: Entity>(spec: &Specification<T>) -> Specification<T> {
    Specification::active().and(spec)
}

/// One page of active records matching `spec`, with pagination metadata
///
/// A page past the end is returned empty, never as an error.
pub async fn fetch_page<T, R>(
    repo: &R,
    spec: &Specification<T>,
    sort: SortOrder,
    pagination: &Pagination,
) -> DomainResult<PaginatedResponse<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    let spec = scoped(spec);
    let total_count = repo.count(&spec).await?;

    let items = if pagination.offset() >= total_count {
        Vec::new()
    } else {
        repo.find_page(&spec, sort, pagination.offset(), pagination.limit())
            .await?
    };

    Ok(PaginatedResponse::new(items, pagination, total_count))
}

/// Every active record matching `spec`
pub async fn fetch_all<T, R>(repo: &R, spec: &Specification<T>, sort: SortOrder) -> DomainResult<Vec<T>>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    repo.find_matching(&scoped(spec), sort).await
}

/// Number of active records matching `spec`
pub async fn count<T, R>(repo: &R, spec: &Specification<T>) -> DomainResult<u64>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    repo.count(&scoped(spec)).await
}

/// Whether any active record matches `spec`
pub async fn exists<T, R>(repo: &R, spec: &Specification<T>) -> DomainResult<bool>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    repo.exists(&scoped(spec)).await
}
