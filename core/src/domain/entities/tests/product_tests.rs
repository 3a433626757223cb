//! Unit tests for the product entity

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::domain::entities::{is_low_stock, Entity, Product, ProductDetails, LOW_STOCK_THRESHOLD};
use crate::errors::DomainError;

fn details(name: &str) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: None,
        price: Decimal::new(1000, 2),
        category_id: None,
        sku: None,
        image_url: None,
    }
}

#[test]
fn test_new_product_is_active() {
    let product = Product::new(details("Widget"), 3).unwrap();
    assert!(product.is_active());
    assert!(product.updated_at.is_none());
    assert_eq!(product.name_key(), Some("Widget"));
}

#[test]
fn test_low_stock_boundary() {
    assert!(Product::new(details("A"), 4).unwrap().is_low_stock());
    assert!(!Product::new(details("B"), 5).unwrap().is_low_stock());
    assert!(Product::new(details("C"), 0).unwrap().is_low_stock());
}

#[test]
fn test_negative_initial_stock_rejected() {
    let result = Product::new(details("Widget"), -1);
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
}

#[test]
fn test_non_positive_price_rejected() {
    for price in [Decimal::ZERO, Decimal::new(-150, 2)] {
        let result = Product::new(ProductDetails { price, ..details("Widget") }, 3);
        assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
    }
}

#[test]
fn test_update_details_rejects_zero_price() {
    let mut product = Product::new(details("Widget"), 3).unwrap();

    let result = product.update_details(ProductDetails {
        price: Decimal::ZERO,
        ..details("Gadget")
    });

    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, Decimal::new(1000, 2));
    assert!(product.updated_at.is_none());
}

#[test]
fn test_decrease_stock_fails_closed() {
    let mut product = Product::new(details("Widget"), 3).unwrap();

    let result = product.decrease_stock(4);
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
    assert_eq!(product.stock_quantity, 3);
    assert!(product.updated_at.is_none());

    product.decrease_stock(3).unwrap();
    assert_eq!(product.stock_quantity, 0);
    assert!(product.updated_at.is_some());
}

#[test]
fn test_stock_changes_reject_negative_amounts() {
    let mut product = Product::new(details("Widget"), 10).unwrap();
    assert!(product.increase_stock(-1).is_err());
    assert!(product.decrease_stock(-1).is_err());
    assert!(product.set_stock(-5).is_err());
    assert_eq!(product.stock_quantity, 10);
}

#[test]
fn test_increase_stock_overflow_rejected() {
    let mut product = Product::new(details("Widget"), i32::MAX).unwrap();
    assert!(product.increase_stock(1).is_err());
    assert_eq!(product.stock_quantity, i32::MAX);
}

#[test]
fn test_deactivate_stamps_update() {
    let mut product = Product::new(details("Widget"), 10).unwrap();
    product.deactivate();
    assert!(!product.is_active());
    assert!(product.updated_at.is_some());
}

proptest! {
    #[test]
    fn prop_low_stock_matches_threshold(stock in 0i32..10_000) {
        prop_assert_eq!(is_low_stock(stock), stock < LOW_STOCK_THRESHOLD);
        let product = Product::new(details("P"), stock).unwrap();
        prop_assert_eq!(product.is_low_stock(), stock < 5);
    }

    #[test]
    fn prop_stock_never_negative(start in 0i32..1_000, delta in 0i32..2_000) {
        let mut product = Product::new(details("P"), start).unwrap();
        let _ = product.decrease_stock(delta);
        prop_assert!(product.stock_quantity >= 0);
    }
}
