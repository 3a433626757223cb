//! Product entity and stock rules.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, new_entity_id};
use crate::errors::{DomainError, DomainResult};

/// Stock strictly below this quantity counts as low stock
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Low-stock rule shared by entities, specifications and reports
pub fn is_low_stock(stock_quantity: i32) -> bool {
    stock_quantity < LOW_STOCK_THRESHOLD
}

/// Editable product attributes (everything except stock and audit fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<String>,
    pub sku: Option<String>,
    pub image_url: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,

    /// Display name, unique among active products (case-insensitive)
    pub name: String,

    pub description: Option<String>,

    /// Unit price, always positive
    pub price: Decimal,

    /// Units on hand, never negative
    pub stock_quantity: i32,

    /// Owning category, if any
    pub category_id: Option<String>,

    pub sku: Option<String>,

    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,

    pub is_active: bool,
}

impl_entity!(Product, "Product", name = name);

impl Product {
    /// Creates a new active product
    pub fn new(details: ProductDetails, stock_quantity: i32) -> DomainResult<Self> {
        ensure_positive_price(details.price)?;
        ensure_not_negative(stock_quantity)?;
        Ok(Self {
            id: new_entity_id(),
            name: details.name,
            description: details.description,
            price: details.price,
            stock_quantity,
            category_id: details.category_id,
            sku: details.sku,
            image_url: details.image_url,
            created_at: Utc::now(),
            updated_at: None,
            is_active: true,
        })
    }

    /// Whether stock is below [`LOW_STOCK_THRESHOLD`]
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.stock_quantity)
    }

    /// Replace the editable attributes; the product is unchanged on error
    pub fn update_details(&mut self, details: ProductDetails) -> DomainResult<()> {
        ensure_positive_price(details.price)?;
        self.name = details.name;
        self.description = details.description;
        self.price = details.price;
        self.category_id = details.category_id;
        self.sku = details.sku;
        self.image_url = details.image_url;
        self.touch();
        Ok(())
    }

    /// Set the stock to an absolute quantity
    pub fn set_stock(&mut self, quantity: i32) -> DomainResult<()> {
        ensure_not_negative(quantity)?;
        self.stock_quantity = quantity;
        self.touch();
        Ok(())
    }

    /// Add units to stock
    pub fn increase_stock(&mut self, quantity: i32) -> DomainResult<()> {
        ensure_not_negative(quantity)?;
        let updated = self
            .stock_quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::business("Stock quantity is too large"))?;
        self.stock_quantity = updated;
        self.touch();
        Ok(())
    }

    /// Remove units from stock, failing rather than going negative
    pub fn decrease_stock(&mut self, quantity: i32) -> DomainResult<()> {
        ensure_not_negative(quantity)?;
        if quantity > self.stock_quantity {
            return Err(DomainError::business(format!(
                "Insufficient stock: {} available, {} requested",
                self.stock_quantity, quantity
            )));
        }
        self.stock_quantity -= quantity;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

fn ensure_positive_price(price: Decimal) -> DomainResult<()> {
    if price <= Decimal::ZERO {
        return Err(DomainError::business("Price must be greater than 0"));
    }
    Ok(())
}

fn ensure_not_negative(quantity: i32) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::business("Stock quantity cannot be negative"));
    }
    Ok(())
}
