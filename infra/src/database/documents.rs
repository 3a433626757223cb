//! BSON document shapes for each collection

use std::str::FromStr;

use bson::DateTime as BsonDateTime;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use inv_core::domain::entities::{Category, Entity, Notification, Product, User, UserRole};

use crate::error::InfrastructureError;

/// Maps a domain entity onto its stored document
pub trait EntityDocument: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    type Entity: Entity;

    /// Collection holding these documents
    const COLLECTION: &'static str;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn into_entity(self) -> Result<Self::Entity, InfrastructureError>;
}

fn to_bson_time(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_chrono(value)
}

fn to_bson_time_opt(value: Option<DateTime<Utc>>) -> Option<BsonDateTime> {
    value.map(BsonDateTime::from_chrono)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Decimal as its exact string form
    pub price: String,
    pub stock_quantity: i32,
    pub category_id: Option<String>,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: Option<BsonDateTime>,
    pub is_active: bool,
}

impl EntityDocument for ProductDocument {
    type Entity = Product;
    const COLLECTION: &'static str = "products";

    fn from_entity(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.to_string(),
            stock_quantity: p.stock_quantity,
            category_id: p.category_id.clone(),
            sku: p.sku.clone(),
            image_url: p.image_url.clone(),
            created_at: to_bson_time(p.created_at),
            updated_at: to_bson_time_opt(p.updated_at),
            is_active: p.is_active,
        }
    }

    fn into_entity(self) -> Result<Product, InfrastructureError> {
        let price = Decimal::from_str(&self.price).map_err(|e| {
            InfrastructureError::Mapping(format!("product {} has invalid price '{}': {}", self.id, self.price, e))
        })?;

        Ok(Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price,
            stock_quantity: self.stock_quantity,
            category_id: self.category_id,
            sku: self.sku,
            image_url: self.image_url,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.map(|t| t.to_chrono()),
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: Option<BsonDateTime>,
    pub is_active: bool,
}

impl EntityDocument for CategoryDocument {
    type Entity = Category;
    const COLLECTION: &'static str = "categories";

    fn from_entity(c: &Category) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            created_at: to_bson_time(c.created_at),
            updated_at: to_bson_time_opt(c.updated_at),
            is_active: c.is_active,
        }
    }

    fn into_entity(self) -> Result<Category, InfrastructureError> {
        Ok(Category {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.map(|t| t.to_chrono()),
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_at: Option<BsonDateTime>,
    pub created_at: BsonDateTime,
    pub updated_at: Option<BsonDateTime>,
    pub is_active: bool,
}

impl EntityDocument for UserDocument {
    type Entity = User;
    const COLLECTION: &'static str = "users";

    fn from_entity(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            email: u.email.clone(),
            password_hash: u.password_hash.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            role: u.role.to_string(),
            refresh_token: u.refresh_token.clone(),
            refresh_token_expires_at: to_bson_time_opt(u.refresh_token_expires_at),
            created_at: to_bson_time(u.created_at),
            updated_at: to_bson_time_opt(u.updated_at),
            is_active: u.is_active,
        }
    }

    fn into_entity(self) -> Result<User, InfrastructureError> {
        let role = UserRole::from_str(&self.role).map_err(InfrastructureError::Mapping)?;

        Ok(User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role,
            refresh_token: self.refresh_token,
            refresh_token_expires_at: self.refresh_token_expires_at.map(|t| t.to_chrono()),
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.map(|t| t.to_chrono()),
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub is_read: bool,
    pub read_at: Option<BsonDateTime>,
    pub related_entity_id: Option<String>,
    pub related_entity_type: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: Option<BsonDateTime>,
    pub is_active: bool,
}

impl EntityDocument for NotificationDocument {
    type Entity = Notification;
    const COLLECTION: &'static str = "notifications";

    fn from_entity(n: &Notification) -> Self {
        Self {
            id: n.id.clone(),
            user_id: n.user_id.clone(),
            title: n.title.clone(),
            message: n.message.clone(),
            notification_type: n.notification_type.clone(),
            is_read: n.is_read,
            read_at: to_bson_time_opt(n.read_at),
            related_entity_id: n.related_entity_id.clone(),
            related_entity_type: n.related_entity_type.clone(),
            created_at: to_bson_time(n.created_at),
            updated_at: to_bson_time_opt(n.updated_at),
            is_active: n.is_active,
        }
    }

    fn into_entity(self) -> Result<Notification, InfrastructureError> {
        Ok(Notification {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            notification_type: self.notification_type,
            is_read: self.is_read,
            read_at: self.read_at.map(|t| t.to_chrono()),
            related_entity_id: self.related_entity_id,
            related_entity_type: self.related_entity_type,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.map(|t| t.to_chrono()),
            is_active: self.is_active,
        })
    }
}
