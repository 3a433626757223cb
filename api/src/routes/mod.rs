//! Route handlers and the `/api` route table

pub mod auth;
pub mod categories;
pub mod health;
pub mod notifications;
pub mod products;
pub mod reports;

use actix_web::web;

use crate::middleware::JwtAuth;

/// Register every route under the enclosing scope
///
/// Register, login, token refresh and health are public; everything else
/// requires a valid bearer access token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/refresh-token", web::post().to(auth::refresh_token))
                .route("/logout", web::post().to(auth::logout).wrap(JwtAuth::new())),
        )
        .service(
            web::scope("/products")
                .wrap(JwtAuth::new())
                .route("", web::get().to(products::list_products))
                .route("", web::post().to(products::create_product))
                .route("/low-stock", web::get().to(products::low_stock_products))
                .route("/{id}", web::get().to(products::get_product))
                .route("/{id}", web::put().to(products::update_product))
                .route("/{id}", web::delete().to(products::delete_product))
                .route("/{id}/stock", web::post().to(products::adjust_stock))
                .route("/{id}/report-low-stock", web::post().to(products::report_low_stock)),
        )
        .service(
            web::scope("/categories")
                .wrap(JwtAuth::new())
                .route("", web::get().to(categories::list_categories))
                .route("", web::post().to(categories::create_category))
                .route("/{id}", web::get().to(categories::get_category))
                .route("/{id}", web::put().to(categories::update_category))
                .route("/{id}", web::delete().to(categories::delete_category)),
        )
        .service(
            web::scope("/notifications")
                .wrap(JwtAuth::new())
                .route("", web::get().to(notifications::list_notifications))
                .route("/unread-count", web::get().to(notifications::unread_count))
                .route("/read-all", web::put().to(notifications::mark_all_as_read))
                .route("/{id}/read", web::put().to(notifications::mark_as_read)),
        )
        .service(
            web::scope("/reports")
                .wrap(JwtAuth::new())
                .route("/low-stock/pdf", web::get().to(reports::low_stock_report))
                .route("/inventory/pdf", web::get().to(reports::inventory_report)),
        );
}
