//! Admin console pages: login form and the inventory dashboard.

use grocer_db::models::Item;

use super::{html_escape, urlencode_path};

/// Login page body. `error` renders as an alert above the form.
pub fn render_login(error: Option<&str>) -> String {
    let alert = match error {
        Some(message) => format!(
            r#"<div class="alert alert-danger">{}</div>"#,
            html_escape(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="row justify-content-center">
  <div class="col-md-4">
    <div class="card">
      <div class="card-body">
        <h4 class="card-title mb-3">Admin Login</h4>
        {alert}
        <form method="post" action="/admin/login">
          <div class="mb-3">
            <label class="form-label">Username</label>
            <input name="username" required class="form-control">
          </div>
          <div class="mb-3">
            <label class="form-label">Password</label>
            <input name="password" type="password" required class="form-control">
          </div>
          <button class="btn btn-dark w-100">Log in</button>
        </form>
      </div>
    </div>
  </div>
</div>"#,
    )
}

/// One inventory row prepared for the dashboard table.
pub struct DashboardRow {
    pub item: Item,
    /// Expiry badge text, empty when the date needs no flagging.
    pub expiry_badge: String,
    /// Bootstrap row class driven by expiry: `table-danger`, `table-warning`, or empty.
    pub row_class: &'static str,
    pub low_stock: bool,
}

/// Counts shown as chips above the dashboard table.
pub struct DashboardStats {
    pub total_items: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
}

/// Render the dashboard body: stats chips plus the full inventory table.
pub fn render_dashboard(rows: &[DashboardRow], stats: &DashboardStats) -> String {
    let table_rows: String = rows.iter().map(render_row).collect();

    format!(
        r#"<div class="d-flex gap-3 mb-3">
  <span class="badge bg-secondary fs-6">Items: {total}</span>
  <span class="badge bg-warning text-dark fs-6">Low stock: {low}</span>
  <span class="badge bg-danger fs-6">Expiring soon: {expiring}</span>
</div>
<table class="table table-bordered align-middle bg-white">
  <thead>
    <tr>
      <th>ID</th><th>Name</th><th>Category</th><th>Price</th>
      <th>Discount</th><th>Quantity</th><th>Expiry</th><th>Notes</th><th></th>
    </tr>
  </thead>
  <tbody>
    {table_rows}
  </tbody>
</table>"#,
        total = stats.total_items,
        low = stats.low_stock,
        expiring = stats.expiring_soon,
    )
}

fn render_row(row: &DashboardRow) -> String {
    let item = &row.item;
    let encoded = urlencode_path(&item.name);

    let expiry_html = match (&item.expiry_date, row.expiry_badge.is_empty()) {
        (Some(date), true) => date.to_string(),
        (Some(date), false) => format!(
            r#"{date} <span class="badge bg-danger">{badge}</span>"#,
            badge = html_escape(&row.expiry_badge)
        ),
        (None, _) => r#"<span class="text-muted">-</span>"#.to_string(),
    };

    let quantity_html = format!(
        r#"<a class="btn btn-sm btn-outline-secondary" href="/admin/decrease/{encoded}">-</a>
        <span class="mx-2">{quantity}</span>
        <a class="btn btn-sm btn-outline-secondary" href="/admin/increase/{encoded}">+</a>{low}"#,
        quantity = item.quantity,
        low = if row.low_stock {
            r#" <span class="badge bg-warning text-dark">Low</span>"#
        } else {
            ""
        },
    );

    format!(
        r#"<tr class="{row_class}">
      <td>{id}</td>
      <td>{name}</td>
      <td>{category}</td>
      <td>${price:.2}</td>
      <td>
        <form method="post" action="/admin/update-discount/{id}" class="d-flex gap-1">
          <input name="discount" type="number" min="0" max="100" value="{discount}"
                 class="form-control form-control-sm" style="width: 5rem;">
          <button class="btn btn-sm btn-outline-dark">Save</button>
        </form>
      </td>
      <td>{quantity_html}</td>
      <td>{expiry_html}</td>
      <td>{notes}</td>
      <td><a class="btn btn-sm btn-outline-danger" href="/admin/delete/{encoded}">Delete</a></td>
    </tr>"#,
        row_class = row.row_class,
        id = item.id,
        name = html_escape(&item.name),
        category = html_escape(item.category.as_deref().unwrap_or("-")),
        price = item.price,
        discount = item.discount_percent.unwrap_or(0),
        notes = html_escape(item.notes.as_deref().unwrap_or("")),
    )
}
