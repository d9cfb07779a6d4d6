//! Handlers for the shopper-facing catalog pages.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use grocer_core::category::{category_icon, normalize_category};
use grocer_core::pricing::discounted_unit_price;
use grocer_db::models::Item;
use grocer_db::repositories::{CartRepo, ItemRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::catalog::{CatalogProduct, CategorySection};
use crate::views::{catalog, layout, track};

/// Query parameters for `GET /`.
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
}

/// Query parameters for `GET /suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub q: Option<String>,
}

/// GET /
///
/// Catalog view grouped by category, optionally filtered by `?search=`.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Html<String>> {
    let search = params.search.unwrap_or_default();
    let items = ItemRepo::list(&state.pool, Some(&search)).await?;
    let cart_count = CartRepo::unit_count(&state.pool).await?;

    let sections = group_by_category(items);
    let body = catalog::render_catalog(&sections, &search);
    Ok(Html(layout::render_page("Catalog", cart_count, &body)))
}

/// GET /suggest?q=
///
/// JSON array of up to five item names matching the partial query,
/// consumed by the search box.
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> AppResult<Json<Vec<String>>> {
    let q = params.q.unwrap_or_default();
    let names = ItemRepo::suggest(&state.pool, &q).await?;
    Ok(Json(names))
}

/// GET /track
pub async fn track_order(State(state): State<AppState>) -> AppResult<Html<String>> {
    let cart_count = CartRepo::unit_count(&state.pool).await?;
    Ok(Html(layout::render_page(
        "Track Order",
        cart_count,
        &track::render_track(),
    )))
}

/// Group catalog items into category sections with display labels and icons.
///
/// Categories are normalized ("veg", "veggies", "Vegetable" all land in
/// Vegetables) and sections come out in alphabetical label order.
fn group_by_category(items: Vec<Item>) -> Vec<CategorySection> {
    let mut grouped: BTreeMap<String, Vec<CatalogProduct>> = BTreeMap::new();

    for item in items {
        let label = normalize_category(item.category.as_deref());
        grouped.entry(label).or_default().push(CatalogProduct {
            discounted_price: discounted_unit_price(item.price, item.discount_percent),
            discount_percent: item.discount_percent.unwrap_or(0),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        });
    }

    grouped
        .into_iter()
        .map(|(label, products)| CategorySection {
            icon: category_icon(&label),
            label,
            products,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(name: &str, category: Option<&str>) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            category: category.map(str::to_string),
            price: 1.00,
            quantity: 3,
            discount_percent: None,
            expiry_date: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_grouping_normalizes_category_synonyms() {
        let sections = group_by_category(vec![
            item("Apple", Some("fruit")),
            item("Banana", Some("Fruits")),
            item("Carrot", Some("veggies")),
            item("Soap", None),
        ]);

        let labels: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Fruits", "Other", "Vegetables"]);
        assert_eq!(sections[0].products.len(), 2);
    }
}
