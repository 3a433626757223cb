//! Integration tests against a live MongoDB server
//!
//! Run with `MONGODB_URL` pointing at a disposable server and `--ignored`.
//! Each test works in its own database and drops it afterwards.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;

use inv_core::domain::entities::{Category, Product, ProductDetails, User, UserRole};
use inv_core::errors::DomainError;
use inv_core::repositories::{CategoryRepository, ProductFilter, ProductRepository, Repository, UserRepository};
use inv_infra::{CategoryDocument, MongoContext, ProductDocument, UserDocument};
use inv_shared::config::DatabaseConfig;
use inv_shared::Pagination;

async fn fresh_context() -> MongoContext {
    let url = std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let name = format!("inventory_test_{}", Utc::now().timestamp_nanos_opt().unwrap_or_default());
    let mut config = DatabaseConfig::new(url, name);
    config.connect_timeout_secs = 5;

    let context = MongoContext::connect(&config).await.unwrap();
    context.ensure_indexes().await.unwrap();
    context
}

fn product(name: &str, stock: i32, category_id: Option<&str>) -> Product {
    Product::new(
        ProductDetails {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            price: Decimal::from_str("9.95").unwrap(),
            category_id: category_id.map(str::to_string),
            sku: None,
            image_url: None,
        },
        stock,
    )
    .unwrap()
}

#[tokio::test]
async fn test_connect_rejects_invalid_url() {
    let config = DatabaseConfig::new("invalid://url", "inventory");
    assert!(MongoContext::connect(&config).await.is_err());
}

#[tokio::test]
#[ignore] // Requires a MongoDB server
async fn test_product_queries_run_on_server() {
    let context = fresh_context().await;
    let products = context.repository::<ProductDocument>();

    for (name, stock) in [("Anchor", 2), ("Bolt", 40), ("Drill", 7)] {
        products.add(product(name, stock, Some("tools"))).await.unwrap();
    }
    products.add(product("Apron", 3, Some("clothing"))).await.unwrap();
    let clamp = products.add(product("Clamp", 1, Some("tools"))).await.unwrap();
    assert!(products.soft_delete(&clamp.id).await.unwrap());

    let filter = ProductFilter {
        search_term: Some("an".to_string()),
        category_id: Some("tools".to_string()),
    };
    let page = products.find_filtered(&filter, &Pagination::new(1, 10)).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].name, "Anchor");

    let low: Vec<String> = products
        .find_low_stock(5)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(low, vec!["Anchor", "Apron"]);

    assert!(products.name_exists("BOLT", None).await.unwrap());
    assert!(!products.name_exists("clamp", None).await.unwrap());
    assert_eq!(products.find_all().await.unwrap().len(), 5);

    context.database().drop(None).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires a MongoDB server
async fn test_update_of_missing_record_is_not_found() {
    let context = fresh_context().await;
    let categories = context.repository::<CategoryDocument>();

    let result = categories.update(Category::new("Ghost", None)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    context.database().drop(None).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires a MongoDB server
async fn test_unique_email_only_among_active_users() {
    let context = fresh_context().await;
    let users = context.repository::<UserDocument>();
    let user = || User::new("dup@example.com", "h".into(), "A".into(), "B".into(), UserRole::Employee);

    let first = users.add(user()).await.unwrap();
    assert!(matches!(users.add(user()).await, Err(DomainError::BusinessRule { .. })));

    users.soft_delete(&first.id).await.unwrap();
    users.add(user()).await.unwrap();
    assert!(users.find_by_email("DUP@example.com").await.unwrap().is_some());

    context.database().drop(None).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires a MongoDB server
async fn test_category_names_sorted_and_case_insensitive() {
    let context = fresh_context().await;
    let categories = context.repository::<CategoryDocument>();

    categories.add(Category::new("Tools", None)).await.unwrap();
    categories.add(Category::new("Food", None)).await.unwrap();

    assert!(categories.name_exists("tools", None).await.unwrap());
    let names: Vec<String> = categories
        .find_active_sorted()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Food", "Tools"]);

    context.database().drop(None).await.unwrap();
}
