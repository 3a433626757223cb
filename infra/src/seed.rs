//! Default catalog data inserted on first start

use tracing::{debug, info};

use inv_core::domain::entities::Category;
use inv_core::errors::DomainResult;
use inv_core::repositories::{CategoryRepository, Repository};

const DEFAULT_CATEGORIES: [(&str, &str); 5] = [
    ("Electronics", "Electronic products"),
    ("Clothing", "Apparel and garments"),
    ("Home", "Household items"),
    ("Sports", "Sporting equipment"),
    ("Food", "Food products"),
];

/// Insert the default categories when the collection holds no records at all
///
/// Soft-deleted categories count as existing, so seeding runs only once per
/// database.
///
/// # Returns
///
/// Number of categories inserted
pub async fn seed_default_categories(categories: &dyn CategoryRepository) -> DomainResult<usize> {
    if !categories.find_all().await?.is_empty() {
        debug!("Categories present, skipping seed");
        return Ok(0);
    }

    for (name, description) in DEFAULT_CATEGORIES {
        categories
            .add(Category::new(name, Some(description.to_string())))
            .await?;
    }

    info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
