//! Unit tests for criterion translation

use bson::{doc, Bson, Regex};

use inv_core::domain::entities::{Product, UserRole};
use inv_core::domain::specification::{notification, product, user, Criterion, SortOrder, Specification};

use crate::database::{criterion_to_filter, sort_document};

fn regex(pattern: &str) -> Bson {
    Bson::RegularExpression(Regex {
        pattern: pattern.to_string(),
        options: "i".to_string(),
    })
}

#[test]
fn test_all_is_empty_filter() {
    assert_eq!(criterion_to_filter(&Criterion::All), doc! {});
}

#[test]
fn test_active_and_category() {
    let spec = Specification::<Product>::active().and(&product::by_category("c-1"));

    assert_eq!(
        criterion_to_filter(spec.criterion()),
        doc! { "$and": [ { "isActive": true }, { "categoryId": "c-1" } ] }
    );
}

#[test]
fn test_id_maps_to_underscore_id() {
    let spec = Specification::<Product>::by_id("p-1");
    assert_eq!(criterion_to_filter(spec.criterion()), doc! { "_id": "p-1" });
}

#[test]
fn test_stock_below_uses_lt() {
    let spec = product::stock_below(10);
    assert_eq!(
        criterion_to_filter(spec.criterion()),
        doc! { "stockQuantity": { "$lt": 10_i64 } }
    );
}

#[test]
fn test_search_escapes_regex_metacharacters() {
    let spec = product::name_contains("a.b*");
    assert_eq!(
        criterion_to_filter(spec.criterion()),
        doc! { "name": regex(r"a\.b\*") }
    );
}

#[test]
fn test_exact_name_is_anchored() {
    let spec = product::named("Widget");
    assert_eq!(criterion_to_filter(spec.criterion()), doc! { "name": regex("^Widget$") });
}

#[test]
fn test_search_is_or_of_name_and_description() {
    let spec = product::search("bolt");
    assert_eq!(
        criterion_to_filter(spec.criterion()),
        doc! { "$or": [ { "name": regex("bolt") }, { "description": regex("bolt") } ] }
    );
}

#[test]
fn test_exclusion_uses_nor() {
    let spec = product::name_taken("Widget", Some("p-1"));
    let filter = criterion_to_filter(spec.criterion());

    let clauses = filter.get_array("$and").unwrap();
    assert!(clauses.contains(&Bson::Document(doc! { "$nor": [ { "_id": "p-1" } ] })));
}

#[test]
fn test_role_is_stored_as_text() {
    let spec = user::with_role(UserRole::Administrator);
    assert_eq!(criterion_to_filter(spec.criterion()), doc! { "role": "Administrator" });
}

#[test]
fn test_unread_for_user() {
    let filter = criterion_to_filter(notification::unread_for_user("u-1").criterion());
    let text = filter.to_string();

    assert!(text.contains("userId"));
    assert!(text.contains("isRead"));
}

#[test]
fn test_sort_documents_break_ties_on_id() {
    assert_eq!(sort_document(SortOrder::NewestFirst), doc! { "createdAt": -1, "_id": 1 });
    assert_eq!(sort_document(SortOrder::NameAscending), doc! { "name": 1, "_id": 1 });
}
