//! Category handler tests

use inv_shared::FailureKind;
use rust_decimal::Decimal;

use super::TestApp;
use crate::application::categories::{
    CreateCategory, DeleteCategory, GetCategories, GetCategoryById, UpdateCategory,
};
use crate::application::products::CreateProduct;

fn create(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn test_categories_listed_by_name() {
    let app = TestApp::new().await;
    for name in ["Tools", "Electronics", "Garden"] {
        assert!(app.send(create(name), &app.admin).await.is_success);
    }

    let names: Vec<_> = app
        .send(GetCategories, &app.employee)
        .await
        .data
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Electronics", "Garden", "Tools"]);
}

#[tokio::test]
async fn test_duplicate_category_name_rejected() {
    let app = TestApp::new().await;
    app.send(create("Tools"), &app.admin).await;

    let response = app.send(create(" tools "), &app.admin).await;
    assert_eq!(response.failure, Some(FailureKind::Validation));
}

#[tokio::test]
async fn test_update_may_keep_own_name() {
    let app = TestApp::new().await;
    let tools = app.send(create("Tools"), &app.admin).await.data.unwrap();

    let response = app
        .send(
            UpdateCategory {
                id: tools.id.clone(),
                name: "TOOLS".to_string(),
                description: Some("Hand tools".to_string()),
            },
            &app.admin,
        )
        .await;

    let updated = response.data.unwrap();
    assert_eq!(updated.name, "TOOLS");
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let app = TestApp::new().await;
    let tools = app.send(create("Tools"), &app.admin).await.data.unwrap();
    app.send(
        CreateProduct {
            name: "Hammer".to_string(),
            description: None,
            price: Decimal::new(1500, 2),
            stock_quantity: 10,
            category_id: Some(tools.id.clone()),
            sku: None,
            image_url: None,
        },
        &app.admin,
    )
    .await;

    let response = app.send(DeleteCategory { id: tools.id.clone() }, &app.admin).await;

    assert_eq!(response.failure, Some(FailureKind::Validation));
    assert!(app.send(GetCategoryById { id: tools.id }, &app.employee).await.is_success);
}

#[tokio::test]
async fn test_deleted_category_is_hidden() {
    let app = TestApp::new().await;
    let tools = app.send(create("Tools"), &app.admin).await.data.unwrap();

    assert!(app.send(DeleteCategory { id: tools.id.clone() }, &app.admin).await.is_success);

    let lookup = app.send(GetCategoryById { id: tools.id.clone() }, &app.employee).await;
    assert_eq!(lookup.failure, Some(FailureKind::NotFound));
    assert_eq!(app.categories.len().await, 1);

    let again = app.send(DeleteCategory { id: tools.id }, &app.admin).await;
    assert_eq!(again.failure, Some(FailureKind::NotFound));
}
