//! Category display normalization.
//!
//! Categories are free text on the item row; they are folded into a
//! canonical display label only when the catalog is grouped. Common
//! synonyms map onto the five storefront departments, anything else is
//! shown with its first letter capitalized, and missing/blank categories
//! land in "Other".

/// Normalize a raw category value into its display label.
pub fn normalize_category(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return "Other".to_string();
    }

    let lower = trimmed.to_lowercase();
    match lower.as_str() {
        "fruit" | "fruits" => "Fruits".to_string(),
        "vegetable" | "vegetables" | "veg" | "veggies" => "Vegetables".to_string(),
        "dairy" | "milk" => "Dairy".to_string(),
        "bakery" | "biscuit" | "biscuits" => "Bakery".to_string(),
        "drink" | "drinks" | "juice" | "beverage" => "Drinks".to_string(),
        _ => capitalize(&lower),
    }
}

/// Icon shown next to a department header on the storefront.
///
/// Unknown categories get a generic basket.
pub fn category_icon(label: &str) -> &'static str {
    match label {
        "Fruits" => "\u{1F34E}",     // red apple
        "Vegetables" => "\u{1F966}", // broccoli
        "Bakery" => "\u{1F956}",     // baguette
        "Dairy" => "\u{1F95B}",      // glass of milk
        "Drinks" => "\u{1F964}",     // cup with straw
        _ => "\u{1F9FA}",            // basket
    }
}

/// Uppercase the first character, leaving the rest as-is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
