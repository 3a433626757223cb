//! Product commands and queries

use std::collections::HashMap;

use async_trait::async_trait;
use inv_shared::{PaginatedResponse, Pagination};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::dto::ProductDto;
use super::mediator::{Handler, Mediator, Reply};
use super::request::{AccessPolicy, Request, RequestContext};
use super::validation::{check, not_blank, positive_price};
use crate::domain::entities::{Product, ProductDetails, LOW_STOCK_THRESHOLD};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ProductFilter;

/// Create a product
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(
        length(min = 1, max = 200, message = "Name is required and must not exceed 200 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i32,
    pub category_id: Option<String>,
    #[validate(length(max = 50, message = "SKU must not exceed 50 characters"))]
    pub sku: Option<String>,
    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: Option<String>,
}

impl Request for CreateProduct {
    type Output = ProductDto;
    const NAME: &'static str = "CreateProduct";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;

    fn validate_request(&self) -> Result<(), inv_shared::FieldErrors> {
        check(self)
    }
}

/// Replace a product's attributes and stock
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    /// Taken from the route
    #[serde(default)]
    pub id: String,
    #[validate(
        length(min = 1, max = 200, message = "Name is required and must not exceed 200 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i32,
    pub category_id: Option<String>,
    #[validate(length(max = 50, message = "SKU must not exceed 50 characters"))]
    pub sku: Option<String>,
    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: Option<String>,
}

impl Request for UpdateProduct {
    type Output = ProductDto;
    const NAME: &'static str = "UpdateProduct";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;

    fn validate_request(&self) -> Result<(), inv_shared::FieldErrors> {
        check(self)
    }
}

/// Soft-delete a product
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProduct {
    pub id: String,
}

impl Request for DeleteProduct {
    type Output = bool;
    const NAME: &'static str = "DeleteProduct";
    const POLICY: AccessPolicy = AccessPolicy::AdminOnly;
}

/// Add (positive) or remove (negative) units
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStock {
    /// Taken from the route
    #[serde(default)]
    pub id: String,
    #[validate(custom(function = "non_zero_delta"))]
    pub quantity: i32,
}

fn non_zero_delta(quantity: i32) -> Result<(), ValidationError> {
    if quantity == 0 {
        let mut error = ValidationError::new("non_zero");
        error.message = Some("Quantity must not be zero".into());
        return Err(error);
    }
    Ok(())
}

impl Request for AdjustStock {
    type Output = ProductDto;
    const NAME: &'static str = "AdjustStock";
    const POLICY: AccessPolicy = AccessPolicy::EmployeeOrAdmin;

    fn validate_request(&self) -> Result<(), inv_shared::FieldErrors> {
        check(self)
    }
}

/// Manually alert administrators about one product
#[derive(Debug, Clone, Deserialize)]
pub struct ReportLowStock {
    pub id: String,
}

impl Request for ReportLowStock {
    /// Administrators notified
    type Output = usize;
    const NAME: &'static str = "ReportLowStock";
    const POLICY: AccessPolicy = AccessPolicy::EmployeeOrAdmin;
}

/// Paged, filtered product listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProducts {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search_term: Option<String>,
    pub category_id: Option<String>,
}

impl Request for GetProducts {
    type Output = PaginatedResponse<ProductDto>;
    const NAME: &'static str = "GetProducts";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetProductById {
    pub id: String,
}

impl Request for GetProductById {
    type Output = ProductDto;
    const NAME: &'static str = "GetProductById";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;
}

/// Products below a stock threshold
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GetLowStockProducts {
    #[validate(range(min = 0, message = "Threshold cannot be negative"))]
    pub threshold: Option<i32>,
}

impl Request for GetLowStockProducts {
    type Output = Vec<ProductDto>;
    const NAME: &'static str = "GetLowStockProducts";
    const POLICY: AccessPolicy = AccessPolicy::Authenticated;

    fn validate_request(&self) -> Result<(), inv_shared::FieldErrors> {
        check(self)
    }
}

struct ProductInput {
    name: String,
    description: Option<String>,
    price: Decimal,
    category_id: Option<String>,
    sku: Option<String>,
    image_url: Option<String>,
}

impl ProductInput {
    fn into_details(self) -> ProductDetails {
        ProductDetails {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
            sku: self.sku,
            image_url: self.image_url,
        }
    }
}

impl From<CreateProduct> for ProductInput {
    fn from(r: CreateProduct) -> Self {
        Self {
            name: r.name.trim().to_string(),
            description: r.description,
            price: r.price,
            category_id: non_blank(r.category_id),
            sku: non_blank(r.sku),
            image_url: non_blank(r.image_url),
        }
    }
}

impl From<UpdateProduct> for ProductInput {
    fn from(r: UpdateProduct) -> Self {
        Self {
            name: r.name.trim().to_string(),
            description: r.description,
            price: r.price,
            category_id: non_blank(r.category_id),
            sku: non_blank(r.sku),
            image_url: non_blank(r.image_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Mediator {
    /// Fail unless the referenced category is active; returns its name
    async fn require_category(&self, category_id: Option<&str>) -> DomainResult<Option<String>> {
        let Some(id) = category_id else {
            return Ok(None);
        };
        match self.categories.get_active(id).await? {
            Some(category) => Ok(Some(category.name)),
            None => Err(DomainError::business("The specified category does not exist")),
        }
    }

    async fn ensure_unique_product_name(&self, name: &str, exclude_id: Option<&str>) -> DomainResult<()> {
        if self.products.name_exists(name, exclude_id).await? {
            return Err(DomainError::business(format!(
                "A product named '{}' already exists",
                name
            )));
        }
        Ok(())
    }

    async fn active_product(&self, id: &str) -> DomainResult<Product> {
        self.products
            .get_active(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))
    }

    async fn product_dto(&self, product: Product) -> DomainResult<ProductDto> {
        let category_name = match product.category_id.as_deref() {
            Some(id) => self.categories.get_active(id).await?.map(|c| c.name),
            None => None,
        };
        Ok(ProductDto::from_product(product, category_name))
    }

    async fn category_names(&self) -> DomainResult<HashMap<String, String>> {
        Ok(self
            .categories
            .find_active_sorted()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect())
    }

    /// Best-effort fan-out; a failure never fails the triggering command
    async fn alert_low_stock(&self, product: &Product) {
        if let Err(e) = self.notifier.notify_low_stock(product).await {
            tracing::warn!(product_id = %product.id, error = %e, "Low stock alert failed");
        }
    }
}

fn to_dto(product: Product, names: &HashMap<String, String>) -> ProductDto {
    let category_name = product
        .category_id
        .as_ref()
        .and_then(|id| names.get(id).cloned());
    ProductDto::from_product(product, category_name)
}

#[async_trait]
impl Handler<CreateProduct> for Mediator {
    async fn handle(&self, request: CreateProduct, _ctx: &RequestContext) -> DomainResult<Reply<ProductDto>> {
        let stock = request.stock_quantity;
        let input = ProductInput::from(request);

        self.ensure_unique_product_name(&input.name, None).await?;
        let category_name = self.require_category(input.category_id.as_deref()).await?;

        let product = self.products.add(Product::new(input.into_details(), stock)?).await?;
        tracing::info!(product_id = %product.id, stock = product.stock_quantity, "Product created");

        if product.is_low_stock() {
            self.alert_low_stock(&product).await;
        }

        Ok(Reply::new(
            ProductDto::from_product(product, category_name),
            "Product created successfully",
        ))
    }
}

#[async_trait]
impl Handler<UpdateProduct> for Mediator {
    async fn handle(&self, request: UpdateProduct, _ctx: &RequestContext) -> DomainResult<Reply<ProductDto>> {
        let id = request.id.clone();
        let stock = request.stock_quantity;
        let input = ProductInput::from(request);

        let mut product = self.active_product(&id).await?;
        self.ensure_unique_product_name(&input.name, Some(&id)).await?;
        let category_name = self.require_category(input.category_id.as_deref()).await?;

        let was_low = product.is_low_stock();
        product.update_details(input.into_details())?;
        product.set_stock(stock)?;
        let product = self.products.update(product).await?;
        tracing::info!(product_id = %product.id, "Product updated");

        if !was_low && product.is_low_stock() {
            self.alert_low_stock(&product).await;
        }

        Ok(Reply::new(
            ProductDto::from_product(product, category_name),
            "Product updated successfully",
        ))
    }
}

#[async_trait]
impl Handler<DeleteProduct> for Mediator {
    async fn handle(&self, request: DeleteProduct, _ctx: &RequestContext) -> DomainResult<Reply<bool>> {
        if !self.products.soft_delete(&request.id).await? {
            return Err(DomainError::not_found("Product"));
        }
        tracing::info!(product_id = %request.id, "Product deleted");
        Ok(Reply::new(true, "Product deleted successfully"))
    }
}

#[async_trait]
impl Handler<AdjustStock> for Mediator {
    async fn handle(&self, request: AdjustStock, _ctx: &RequestContext) -> DomainResult<Reply<ProductDto>> {
        let mut product = self.active_product(&request.id).await?;
        let was_low = product.is_low_stock();

        if request.quantity > 0 {
            product.increase_stock(request.quantity)?;
        } else {
            let removed = request
                .quantity
                .checked_neg()
                .ok_or_else(|| DomainError::business("Stock quantity is too large"))?;
            product.decrease_stock(removed)?;
        }

        let product = self.products.update(product).await?;
        tracing::info!(
            product_id = %product.id,
            delta = request.quantity,
            stock = product.stock_quantity,
            "Stock adjusted"
        );

        if !was_low && product.is_low_stock() {
            self.alert_low_stock(&product).await;
        }

        Ok(Reply::new(self.product_dto(product).await?, "Stock updated successfully"))
    }
}

#[async_trait]
impl Handler<ReportLowStock> for Mediator {
    async fn handle(&self, request: ReportLowStock, _ctx: &RequestContext) -> DomainResult<Reply<usize>> {
        let product = self.active_product(&request.id).await?;
        let notified = self.notifier.notify_low_stock(&product).await?;
        Ok(Reply::new(notified, "Low stock report sent successfully"))
    }
}

#[async_trait]
impl Handler<GetProducts> for Mediator {
    async fn handle(
        &self,
        request: GetProducts,
        _ctx: &RequestContext,
    ) -> DomainResult<Reply<PaginatedResponse<ProductDto>>> {
        let pagination = Pagination::from_request(request.page, request.page_size, &self.pagination);
        let filter = ProductFilter {
            search_term: request.search_term,
            category_id: request.category_id,
        };

        let page = self.products.find_filtered(&filter, &pagination).await?;
        let names = self.category_names().await?;
        let message = format!("{} products found", page.total_count);

        Ok(Reply::new(page.map(|p| to_dto(p, &names)), message))
    }
}

#[async_trait]
impl Handler<GetProductById> for Mediator {
    async fn handle(&self, request: GetProductById, _ctx: &RequestContext) -> DomainResult<Reply<ProductDto>> {
        let product = self.active_product(&request.id).await?;
        Ok(Reply::new(self.product_dto(product).await?, "Product retrieved successfully"))
    }
}

#[async_trait]
impl Handler<GetLowStockProducts> for Mediator {
    async fn handle(
        &self,
        request: GetLowStockProducts,
        _ctx: &RequestContext,
    ) -> DomainResult<Reply<Vec<ProductDto>>> {
        let threshold = request.threshold.unwrap_or(LOW_STOCK_THRESHOLD);
        let products = self.products.find_low_stock(threshold).await?;
        let names = self.category_names().await?;
        let message = format!("{} products below {} units", products.len(), threshold);

        Ok(Reply::new(
            products.into_iter().map(|p| to_dto(p, &names)).collect(),
            message,
        ))
    }
}
