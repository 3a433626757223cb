//! Notification service implementation

use std::sync::Arc;

use crate::domain::entities::{Notification, Product, User, LOW_STOCK_NOTIFICATION_TYPE};
use crate::errors::DomainResult;
use crate::repositories::{NotificationRepository, UserRepository};
use crate::services::email::EmailSender;

const LOW_STOCK_TITLE: &str = "Low Stock Alert";
const RELATED_PRODUCT: &str = "Product";

/// Sends in-app and email alerts to every active administrator
pub struct NotificationService {
    user_repository: Arc<dyn UserRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    email_sender: Arc<dyn EmailSender>,
}

impl NotificationService {
    /// Create a new notification service
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
        email_sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            user_repository,
            notification_repository,
            email_sender,
        }
    }

    /// Alert administrators that `product` is low on stock
    ///
    /// Administrators are processed one after another. A failure for one
    /// administrator is logged and the next is still notified.
    ///
    /// # Returns
    ///
    /// * `Ok(n)` - Number of in-app notifications stored
    /// * `Err(DomainError)` - Administrators could not be loaded
    pub async fn notify_low_stock(&self, product: &Product) -> DomainResult<usize> {
        let administrators = self.user_repository.find_administrators().await?;
        let message = format!(
            "Product '{}' is running low on stock. Current quantity: {}",
            product.name, product.stock_quantity
        );

        let mut stored = 0;
        for admin in &administrators {
            if self.store_alert(admin, product, &message).await {
                stored += 1;
            }
            self.email_alert(admin, product).await;
        }

        tracing::info!(
            product_id = %product.id,
            administrators = administrators.len(),
            stored,
            "Low stock alert dispatched"
        );
        Ok(stored)
    }

    async fn store_alert(&self, admin: &User, product: &Product, message: &str) -> bool {
        let notification = Notification::new(&admin.id, LOW_STOCK_TITLE, message, LOW_STOCK_NOTIFICATION_TYPE)
            .with_related_entity(RELATED_PRODUCT, &product.id);

        match self.notification_repository.add(notification).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(user_id = %admin.id, product_id = %product.id, error = %e, "Failed to store low stock notification");
                false
            }
        }
    }

    async fn email_alert(&self, admin: &User, product: &Product) {
        let subject = format!("{}: {}", LOW_STOCK_TITLE, product.name);
        let body = low_stock_email_body(admin, product);

        if let Err(e) = self.email_sender.send(&admin.email, &subject, &body).await {
            tracing::warn!(user_id = %admin.id, product_id = %product.id, error = %e, "Failed to send low stock email");
        }
    }
}

fn low_stock_email_body(admin: &User, product: &Product) -> String {
    let sku = product.sku.as_deref().unwrap_or("-");
    format!(
        "<html><body>\
         <h2>{title}</h2>\
         <p>Hello {name},</p>\
         <p>The following product is running low on stock:</p>\
         <table>\
         <tr><td><strong>Product</strong></td><td>{product}</td></tr>\
         <tr><td><strong>SKU</strong></td><td>{sku}</td></tr>\
         <tr><td><strong>Current stock</strong></td><td>{stock}</td></tr>\
         </table>\
         <p>Please restock soon.</p>\
         </body></html>",
        title = LOW_STOCK_TITLE,
        name = escape_html(&admin.first_name),
        product = escape_html(&product.name),
        sku = escape_html(sku),
        stock = product.stock_quantity,
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
