//! Behaviour of the concrete product specifications

use rust_decimal::Decimal;

use crate::domain::entities::{Entity, Product, ProductDetails};
use crate::domain::specification::product;

fn make(name: &str, description: Option<&str>, stock: i32, category: Option<&str>) -> Product {
    Product::new(
        ProductDetails {
            name: name.to_string(),
            description: description.map(String::from),
            price: Decimal::new(1000, 2),
            category_id: category.map(String::from),
            sku: None,
            image_url: None,
        },
        stock,
    )
    .unwrap()
}

#[test]
fn test_search_matches_name_or_description_ignoring_case() {
    let spec = product::search("WIDG");
    assert!(spec.is_satisfied_by(&make("Blue widget", None, 10, None)));
    assert!(spec.is_satisfied_by(&make("Gear", Some("fits any Widget"), 10, None)));
    assert!(!spec.is_satisfied_by(&make("Gear", Some("metal"), 10, None)));
}

#[test]
fn test_missing_description_never_matches() {
    let spec = product::description_contains("");
    let product = make("Gear", None, 10, None);
    assert!(!spec.is_satisfied_by(&product));
    assert!(!spec.criterion().matches(&product));
}

#[test]
fn test_missing_category_never_equals() {
    let spec = product::by_category("cat-a");
    let product = make("Gear", None, 10, None);
    assert!(!spec.is_satisfied_by(&product));
    assert!(!spec.criterion().matches(&product));
}

#[test]
fn test_low_stock_requires_active() {
    let mut product = make("Gear", None, 2, None);
    assert!(product::low_stock().is_satisfied_by(&product));

    product.deactivate();
    assert!(!product::low_stock().is_satisfied_by(&product));
}

#[test]
fn test_low_stock_boundary() {
    assert!(product::low_stock().is_satisfied_by(&make("A", None, 4, None)));
    assert!(!product::low_stock().is_satisfied_by(&make("B", None, 5, None)));
}

#[test]
fn test_name_taken_is_case_insensitive_and_excludes_self() {
    let existing = make("Widget", None, 10, None);

    assert!(product::name_taken("wIDGET", None).is_satisfied_by(&existing));
    assert!(!product::name_taken("widget", Some(existing.id())).is_satisfied_by(&existing));
    assert!(!product::name_taken("Widgets", None).is_satisfied_by(&existing));
}

#[test]
fn test_name_taken_ignores_inactive() {
    let mut existing = make("Widget", None, 10, None);
    existing.deactivate();
    assert!(!product::name_taken("Widget", None).is_satisfied_by(&existing));
}
