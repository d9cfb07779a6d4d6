//! Integration tests for the items repository.
//!
//! - Catalog listing and search
//! - Name suggestions
//! - Unique name constraint
//! - Guarded stock adjustments and discount updates
//! - Delete cascading to cart lines

use chrono::NaiveDate;
use sqlx::SqlitePool;

use grocer_db::models::item::CreateItem;
use grocer_db::repositories::{CartRepo, ItemRepo};

fn new_item(name: &str, category: Option<&str>, price: f64, quantity: i64) -> CreateItem {
    CreateItem {
        name: name.to_string(),
        category: category.map(str::to_string),
        price,
        quantity,
        expiry_date: None,
        notes: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_list_ordered_by_name(pool: SqlitePool) {
    ItemRepo::create(&pool, &new_item("Banana", Some("Fruits"), 0.50, 10))
        .await
        .unwrap();
    ItemRepo::create(&pool, &new_item("Apple", Some("Fruits"), 2.00, 5))
        .await
        .unwrap();

    let items = ItemRepo::list(&pool, None).await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana"]);
    assert!(items[0].discount_percent.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_search_matches_name_and_category(pool: SqlitePool) {
    ItemRepo::create(&pool, &new_item("Apple", Some("Fruits"), 2.00, 5))
        .await
        .unwrap();
    ItemRepo::create(&pool, &new_item("Milk", Some("Dairy"), 1.50, 8))
        .await
        .unwrap();
    ItemRepo::create(&pool, &new_item("Cheese", Some("Dairy"), 4.00, 3))
        .await
        .unwrap();

    let by_name = ItemRepo::list(&pool, Some("app")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Apple");

    let by_category = ItemRepo::list(&pool, Some("dairy")).await.unwrap();
    assert_eq!(by_category.len(), 2);

    // Blank search terms fall back to the full catalog.
    let blank = ItemRepo::list(&pool, Some("   ")).await.unwrap();
    assert_eq!(blank.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_suggest_caps_at_five(pool: SqlitePool) {
    for n in 0..7 {
        ItemRepo::create(&pool, &new_item(&format!("Apple {n}"), None, 1.00, 1))
            .await
            .unwrap();
    }

    let names = ItemRepo::suggest(&pool, "apple").await.unwrap();
    assert_eq!(names.len(), 5);
    assert_eq!(names[0], "Apple 0");

    let none = ItemRepo::suggest(&pool, "zzz").await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_name_rejected(pool: SqlitePool) {
    ItemRepo::create(&pool, &new_item("Apple", None, 2.00, 5))
        .await
        .unwrap();
    let result = ItemRepo::create(&pool, &new_item("Apple", None, 3.00, 1)).await;
    assert!(result.is_err(), "Duplicate item name should fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stock_adjustments_are_guarded(pool: SqlitePool) {
    ItemRepo::create(&pool, &new_item("Bread", None, 1.20, 1))
        .await
        .unwrap();

    assert!(ItemRepo::increase_stock(&pool, "Bread").await.unwrap());
    assert!(ItemRepo::decrease_stock(&pool, "Bread").await.unwrap());
    assert!(ItemRepo::decrease_stock(&pool, "Bread").await.unwrap());

    // At zero the decrement no longer applies.
    assert!(!ItemRepo::decrease_stock(&pool, "Bread").await.unwrap());

    assert!(!ItemRepo::increase_stock(&pool, "Nope").await.unwrap());
    assert!(!ItemRepo::decrease_stock(&pool, "Nope").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_discount_by_id(pool: SqlitePool) {
    let item = ItemRepo::create(&pool, &new_item("Apple", None, 10.00, 5))
        .await
        .unwrap();

    assert!(ItemRepo::set_discount(&pool, item.id, 20).await.unwrap());
    let items = ItemRepo::list(&pool, None).await.unwrap();
    assert_eq!(items[0].discount_percent, Some(20));
    assert_eq!(items[0].effective_price(), 8.00);

    assert!(!ItemRepo::set_discount(&pool, item.id + 99, 20).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_cascades_to_cart_line(pool: SqlitePool) {
    ItemRepo::create(&pool, &new_item("Apple", None, 2.00, 5))
        .await
        .unwrap();
    CartRepo::add(&pool, "Apple").await.unwrap();
    assert_eq!(CartRepo::unit_count(&pool).await.unwrap(), 1);

    assert!(ItemRepo::delete_by_name(&pool, "Apple").await.unwrap());

    // The cart line goes with the item instead of dangling.
    assert_eq!(CartRepo::unit_count(&pool).await.unwrap(), 0);
    assert!(!ItemRepo::delete_by_name(&pool, "Apple").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_stores_expiry_and_notes(pool: SqlitePool) {
    let mut input = new_item("Yogurt", Some("Dairy"), 0.99, 12);
    input.expiry_date = NaiveDate::from_ymd_opt(2026, 9, 1);
    input.notes = Some("keep chilled".to_string());

    let item = ItemRepo::create(&pool, &input).await.unwrap();
    assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2026, 9, 1));
    assert_eq!(item.notes.as_deref(), Some("keep chilled"));
    assert!(item.created_at.timestamp() > 0);
}
