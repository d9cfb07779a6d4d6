//! Catalog page: items grouped by category, with search and suggestions.

use super::{html_escape, urlencode_path};

/// One product as shown on the catalog page.
pub struct CatalogProduct {
    pub name: String,
    pub price: f64,
    pub discount_percent: i64,
    pub discounted_price: f64,
    pub quantity: i64,
}

/// One category section: display label, icon, and its products.
pub struct CategorySection {
    pub label: String,
    pub icon: &'static str,
    pub products: Vec<CatalogProduct>,
}

/// Render the catalog body: search bar plus one card grid per category.
pub fn render_catalog(sections: &[CategorySection], search: &str) -> String {
    let content = if sections.is_empty() {
        r#"<p class="text-muted">No items match your search.</p>"#.to_string()
    } else {
        sections.iter().map(render_section).collect()
    };

    format!(
        r#"{search_bar}
{content}"#,
        search_bar = render_search_bar(search),
    )
}

fn render_search_bar(search: &str) -> String {
    format!(
        r#"<form method="get" action="/" class="row g-2 mb-4">
  <div class="col-auto flex-grow-1">
    <input class="form-control" type="search" name="search" placeholder="Search items or categories"
           value="{value}" list="name-suggestions" id="search-box" autocomplete="off">
    <datalist id="name-suggestions"></datalist>
  </div>
  <div class="col-auto">
    <button class="btn btn-success" type="submit">Search</button>
  </div>
</form>
<script>
document.getElementById('search-box').addEventListener('input', async (e) => {{
  const q = e.target.value.trim();
  if (!q) return;
  const names = await fetch('/suggest?q=' + encodeURIComponent(q)).then(r => r.json());
  document.getElementById('name-suggestions').innerHTML =
    names.map(n => `<option value="${{n}}">`).join('');
}});
</script>"#,
        value = html_escape(search),
    )
}

fn render_section(section: &CategorySection) -> String {
    let cards: String = section.products.iter().map(render_product_card).collect();
    format!(
        r#"<section class="mb-4">
  <h4>{icon} {label}</h4>
  <div class="row row-cols-1 row-cols-md-3 g-3">
    {cards}
  </div>
</section>"#,
        icon = section.icon,
        label = html_escape(&section.label),
    )
}

fn render_product_card(product: &CatalogProduct) -> String {
    let price_html = if product.discount_percent > 0 {
        format!(
            r#"<span class="text-decoration-line-through text-muted">${:.2}</span>
        <span class="fw-bold">${:.2}</span>
        <span class="badge bg-danger">-{}%</span>"#,
            product.price, product.discounted_price, product.discount_percent
        )
    } else {
        format!(r#"<span class="fw-bold">${:.2}</span>"#, product.price)
    };

    let (stock_html, action_html) = if product.quantity > 0 {
        (
            format!(
                r#"<span class="text-success">In stock: {}</span>"#,
                product.quantity
            ),
            format!(
                r#"<a class="btn btn-sm btn-success" href="/add-to-cart/{}">Add to Cart</a>"#,
                urlencode_path(&product.name)
            ),
        )
    } else {
        (
            r#"<span class="text-danger">Out of stock</span>"#.to_string(),
            r#"<button class="btn btn-sm btn-secondary" disabled>Add to Cart</button>"#.to_string(),
        )
    };

    format!(
        r#"<div class="col">
      <div class="card h-100">
        <div class="card-body">
          <h5 class="card-title">{name}</h5>
          <p class="card-text">{price_html}</p>
          <p class="card-text">{stock_html}</p>
          {action_html}
        </div>
      </div>
    </div>"#,
        name = html_escape(&product.name),
    )
}
