
use rust_decimal::Decimal;

use crate::domain::entities::{Product, ProductDetails};

pub(super) fn product(name: &str, stock: i32) -> Product {
    Product::new(
        ProductDetails {
            name: name.to_string(),
            description: None,
            price: Decimal::new(1000, 2),
            category_id: None,
            sku: None,
            image_url: None,
        },
        stock,
    )
    .unwrap()
}

/// Product created `seconds_ago` in the past, for ordering tests
pub(super) fn aged_product(name: &str, seconds_ago: i64) -> Product {
    let mut p = product(name, 10);
    p.created_at = chrono::Utc::now() - chrono::Duration::seconds(seconds_ago);
    p
}
