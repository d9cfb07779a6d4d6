//! Cart page: one row per line with quantity controls and discounted totals.

use grocer_db::models::CartLineView;

use super::{html_escape, urlencode_path};

/// Render the cart body. `total` is the discounted grand total.
pub fn render_cart(lines: &[CartLineView], total: f64) -> String {
    if lines.is_empty() {
        return r#"<h3>Your Cart</h3>
<p class="text-muted">Your cart is empty.</p>
<a class="btn btn-success" href="/">Browse the catalog</a>"#
            .to_string();
    }

    let rows: String = lines.iter().map(render_line).collect();

    format!(
        r#"<h3>Your Cart</h3>
<table class="table table-striped align-middle bg-white">
  <thead>
    <tr>
      <th>Item</th><th>Price</th><th>Discount</th><th>Quantity</th><th>Subtotal</th><th></th>
    </tr>
  </thead>
  <tbody>
    {rows}
  </tbody>
  <tfoot>
    <tr>
      <th colspan="4" class="text-end">Total</th>
      <th>${total:.2}</th>
      <th></th>
    </tr>
  </tfoot>
</table>
<a class="btn btn-outline-success" href="/">Continue shopping</a>
<a class="btn btn-success" href="/checkout">Proceed to Checkout</a>"#,
    )
}

fn render_line(line: &CartLineView) -> String {
    let encoded = urlencode_path(&line.name);
    let discount = line.discount_percent.unwrap_or(0);

    let price_html = if discount > 0 {
        format!(
            r#"<span class="text-decoration-line-through text-muted">${:.2}</span> ${:.2}"#,
            line.price,
            line.effective_price()
        )
    } else {
        format!("${:.2}", line.price)
    };

    let discount_html = if discount > 0 {
        format!(r#"<span class="badge bg-danger">-{discount}%</span>"#)
    } else {
        r#"<span class="text-muted">-</span>"#.to_string()
    };

    format!(
        r#"<tr>
      <td>{name}</td>
      <td>{price_html}</td>
      <td>{discount_html}</td>
      <td>
        <a class="btn btn-sm btn-outline-secondary" href="/decrease/{encoded}">-</a>
        <span class="mx-2">{quantity}</span>
        <a class="btn btn-sm btn-outline-secondary" href="/increase/{encoded}">+</a>
      </td>
      <td>${subtotal:.2}</td>
      <td><a class="btn btn-sm btn-outline-danger" href="/remove/{encoded}">Remove</a></td>
    </tr>"#,
        name = html_escape(&line.name),
        quantity = line.quantity,
        subtotal = line.subtotal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: f64, discount: Option<i64>, quantity: i64) -> CartLineView {
        CartLineView {
            item_id: 1,
            name: name.to_string(),
            price,
            quantity,
            discount_percent: discount,
        }
    }

    #[test]
    fn test_empty_cart_message() {
        let html = render_cart(&[], 0.0);
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn test_line_controls_use_encoded_name() {
        let html = render_cart(&[line("Green Apple", 2.00, Some(10), 3)], 5.40);
        assert!(html.contains(r#"href="/increase/Green%20Apple""#));
        assert!(html.contains(r#"href="/decrease/Green%20Apple""#));
        assert!(html.contains(r#"href="/remove/Green%20Apple""#));
        assert!(html.contains("$5.40"));
        assert!(html.contains("-10%"));
    }
}
