//! Generic MongoDB repository

use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use inv_core::domain::entities::Entity;
use inv_core::domain::specification::{SortOrder, Specification};
use inv_core::errors::{DomainError, DomainResult};
use inv_core::repositories::{
    CategoryRepository, EntityPredicate, NotificationRepository, ProductRepository, Repository,
    UserRepository,
};

use super::documents::{
    CategoryDocument, EntityDocument, NotificationDocument, ProductDocument, UserDocument,
};
use super::filter::{criterion_to_filter, sort_document};
use crate::error::InfrastructureError;

/// Repository over one collection
///
/// Specifications are evaluated by the server through their criterion, so
/// filtering, counting and paging never load unmatched documents.
pub struct MongoRepository<D: EntityDocument> {
    collection: Collection<D>,
}

impl<D: EntityDocument> MongoRepository<D> {
    /// Create a repository over `D::COLLECTION` in `database`
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<D>(D::COLLECTION),
        }
    }

    /// Underlying collection, for index management
    pub fn collection(&self) -> &Collection<D> {
        &self.collection
    }

    async fn load(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Vec<D::Entity>, InfrastructureError> {
        let cursor = self.collection.find(filter, options).await?;
        let documents: Vec<D> = cursor.try_collect().await?;
        documents.into_iter().map(D::into_entity).collect()
    }
}

impl<D: EntityDocument> Clone for MongoRepository<D> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

#[async_trait]
impl<D: EntityDocument> Repository<D::Entity> for MongoRepository<D> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<D::Entity>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(document.map(D::into_entity).transpose()?)
    }

    async fn find_all(&self) -> DomainResult<Vec<D::Entity>> {
        Ok(self.load(Document::new(), None).await?)
    }

    async fn find_matching(
        &self,
        spec: &Specification<D::Entity>,
        sort: SortOrder,
    ) -> DomainResult<Vec<D::Entity>> {
        let options = FindOptions::builder().sort(sort_document(sort)).build();
        Ok(self.load(criterion_to_filter(spec.criterion()), Some(options)).await?)
    }

    /// Closures cannot be pushed down; every document is loaded and tested
    async fn find_where(&self, predicate: &EntityPredicate<D::Entity>) -> DomainResult<Vec<D::Entity>> {
        let all = self.load(Document::new(), None).await?;
        Ok(all.into_iter().filter(|entity| predicate(entity)).collect())
    }

    async fn find_page(
        &self,
        spec: &Specification<D::Entity>,
        sort: SortOrder,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<D::Entity>> {
        let options = FindOptions::builder()
            .sort(sort_document(sort))
            .skip(offset)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();
        Ok(self.load(criterion_to_filter(spec.criterion()), Some(options)).await?)
    }

    async fn count(&self, spec: &Specification<D::Entity>) -> DomainResult<u64> {
        let total = self
            .collection
            .count_documents(criterion_to_filter(spec.criterion()), None)
            .await
            .map_err(InfrastructureError::from)?;
        Ok(total)
    }

    async fn add(&self, entity: D::Entity) -> DomainResult<D::Entity> {
        self.collection
            .insert_one(D::from_entity(&entity), None)
            .await
            .map_err(InfrastructureError::from)?;
        Ok(entity)
    }

    async fn update(&self, entity: D::Entity) -> DomainResult<D::Entity> {
        let result = self
            .collection
            .replace_one(doc! { "_id": entity.id() }, D::from_entity(&entity), None)
            .await
            .map_err(InfrastructureError::from)?;

        if result.matched_count == 0 {
            return Err(DomainError::not_found(<D::Entity as Entity>::RESOURCE));
        }
        Ok(entity)
    }
}

impl ProductRepository for MongoRepository<ProductDocument> {}
impl CategoryRepository for MongoRepository<CategoryDocument> {}
impl UserRepository for MongoRepository<UserDocument> {}
impl NotificationRepository for MongoRepository<NotificationDocument> {}

