//! MongoDB client lifecycle and index management

use std::time::Duration;

use bson::doc;
use mongodb::options::{ClientOptions, Collation, CollationStrength, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use tracing::{debug, info};

use inv_shared::config::DatabaseConfig;

use super::documents::{
    CategoryDocument, EntityDocument, NotificationDocument, ProductDocument, UserDocument,
};
use super::repository::MongoRepository;
use crate::error::InfrastructureError;

const APP_NAME: &str = "inventory-api";

/// Connected client plus the application database
#[derive(Clone)]
pub struct MongoContext {
    client: Client,
    database: Database,
}

impl MongoContext {
    /// Connect and verify the server answers a ping
    ///
    /// # Arguments
    /// * `config` - Connection string, database name and timeout
    ///
    /// # Returns
    /// * `Ok(MongoContext)` - Server reachable
    /// * `Err(InfrastructureError)` - Invalid URL or server unreachable
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);

        let mut options = ClientOptions::parse(&config.url).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);
        let context = Self { client, database };

        context.health_check().await?;
        info!(database = %config.database_name, "Connected to MongoDB");

        Ok(context)
    }

    /// Round-trip a ping command
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Repository over the collection of `D`
    pub fn repository<D: EntityDocument>(&self) -> MongoRepository<D> {
        MongoRepository::new(&self.database)
    }

    /// Create the indexes the queries and uniqueness rules rely on
    ///
    /// Unique indexes only cover active records, so a soft-deleted record
    /// never blocks re-creating its name or email.
    pub async fn ensure_indexes(&self) -> Result<(), InfrastructureError> {
        let users = self.repository::<UserDocument>();
        users
            .collection()
            .create_index(active_unique("users_email_active", doc! { "email": 1 }, None), None)
            .await?;

        let case_insensitive = Collation::builder()
            .locale("en")
            .strength(CollationStrength::Secondary)
            .build();
        let categories = self.repository::<CategoryDocument>();
        categories
            .collection()
            .create_index(
                active_unique("categories_name_active", doc! { "name": 1 }, Some(case_insensitive)),
                None,
            )
            .await?;

        let products = self.repository::<ProductDocument>();
        products
            .collection()
            .create_index(plain("products_created_at", doc! { "createdAt": -1 }), None)
            .await?;
        products
            .collection()
            .create_index(plain("products_category", doc! { "categoryId": 1, "isActive": 1 }), None)
            .await?;

        let notifications = self.repository::<NotificationDocument>();
        notifications
            .collection()
            .create_index(
                plain("notifications_user_created", doc! { "userId": 1, "createdAt": -1 }),
                None,
            )
            .await?;

        debug!("MongoDB indexes ensured");
        Ok(())
    }
}

fn active_unique(name: &str, keys: bson::Document, collation: Option<Collation>) -> IndexModel {
    let options = IndexOptions::builder()
        .name(name.to_string())
        .unique(true)
        .partial_filter_expression(doc! { "isActive": true })
        .collation(collation)
        .build();
    IndexModel::builder().keys(keys).options(options).build()
}

fn plain(name: &str, keys: bson::Document) -> IndexModel {
    let options = IndexOptions::builder().name(name.to_string()).build();
    IndexModel::builder().keys(keys).options(options).build()
}
