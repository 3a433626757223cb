//! Category commands and queries

use async_trait::async_trait;
use inv_shared::FieldErrors;
use serde::Deserialize;
use validator::Validate;

use super::dto::CategoryDto;
use super::mediator::{Handler, Mediator, Reply};
use super::request::{AccessPolicy, Request, RequestContext};
use super::validation::{check, not_blank};
use crate::domain::entities::Category;
use crate::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(
        length(min = 1, max = 100, message = "Name is required and must not exceed 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl Request for CreateCategory {
    type Output = CategoryDto;
    const NAME: &'static str = "CreateCategory";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    /// Taken from the route
    #[serde(default)]
    pub id: String,
    #[validate(
        length(min = 1, max = 100, message = "Name is required and must not exceed 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl Request for UpdateCategory {
    type Output = CategoryDto;
    const NAME: &'static str = "UpdateCategory";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;

    fn validate_request(&self) -> Result<(), FieldErrors> {
        check(self)
    }
}

/// Soft-delete a category that no active product uses
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategory {
    pub id: String,
}

impl Request for DeleteCategory {
    type Output = bool;
    const NAME: &'static str = "DeleteCategory";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;
}

/// Active categories by name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetCategories;

impl Request for GetCategories {
    type Output = Vec<CategoryDto>;
    const NAME: &'static str = "GetCategories";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCategoryById {
    pub id: String,
}

impl Request for GetCategoryById {
    type Output = CategoryDto;
    const NAME: &'static str = "GetCategoryById";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

impl Mediator {
    async fn active_category(&self, id: &str) -> DomainResult<Category> {
        self.categories
            .get_active(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category"))
    }

    async fn ensure_unique_category_name(&self, name: &str, exclude_id: Option<&str>) -> DomainResult<()> {
        if self.categories.name_exists(name, exclude_id).await? {
            return Err(DomainError::business(format!(
                "A category named '{}' already exists",
                name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Handler<CreateCategory> for Mediator {
    async fn handle(&self, request: CreateCategory, _ctx: &RequestContext) -> DomainResult<Reply<CategoryDto>> {
        let name = request.name.trim();
        self.ensure_unique_category_name(name, None).await?;

        let category = self.categories.add(Category::new(name, request.description)).await?;
        tracing::info!(category_id = %category.id, "Category created");

        Ok(Reply::new(CategoryDto::from(category), "Category created successfully"))
    }
}

#[async_trait]
impl Handler<UpdateCategory> for Mediator {
    async fn handle(&self, request: UpdateCategory, _ctx: &RequestContext) -> DomainResult<Reply<CategoryDto>> {
        let mut category = self.active_category(&request.id).await?;
        let name = request.name.trim();
        self.ensure_unique_category_name(name, Some(&request.id)).await?;

        category.update(name, request.description);
        let category = self.categories.update(category).await?;
        tracing::info!(category_id = %category.id, "Category updated");

        Ok(Reply::new(CategoryDto::from(category), "Category updated successfully"))
    }
}

#[async_trait]
impl Handler<DeleteCategory> for Mediator {
    async fn handle(&self, request: DeleteCategory, _ctx: &RequestContext) -> DomainResult<Reply<bool>> {
        let category = self.active_category(&request.id).await?;

        if self.products.any_in_category(&category.id).await? {
            return Err(DomainError::business(
                "The category cannot be deleted because it has associated products",
            ));
        }

        self.categories.soft_delete(&category.id).await?;
        tracing::info!(category_id = %category.id, "Category deleted");

        Ok(Reply::new(true, "Category deleted successfully"))
    }
}

#[async_trait]
impl Handler<GetCategories> for Mediator {
    async fn handle(&self, _request: GetCategories, _ctx: &RequestContext) -> DomainResult<Reply<Vec<CategoryDto>>> {
        let categories = self.categories.find_active_sorted().await?;
        let message = format!("{} categories found", categories.len());
        Ok(Reply::new(categories.into_iter().map(CategoryDto::from).collect(), message))
    }
}

#[async_trait]
impl Handler<GetCategoryById> for Mediator {
    async fn handle(&self, request: GetCategoryById, _ctx: &RequestContext) -> DomainResult<Reply<CategoryDto>> {
        let category = self.active_category(&request.id).await?;
        Ok(Reply::new(CategoryDto::from(category), "Category retrieved successfully"))
    }
}
