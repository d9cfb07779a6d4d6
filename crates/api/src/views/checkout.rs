//! Checkout page and order confirmation.

use grocer_db::models::CartLineView;

use super::html_escape;

/// Render the checkout body: order summary plus the delivery details form.
///
/// `total` uses the same discounted formula as the cart page, so the
/// number a shopper confirms here is the number they saw a click ago.
pub fn render_checkout(lines: &[CartLineView], total: f64) -> String {
    if lines.is_empty() {
        return r#"<h3>Checkout</h3>
<p class="text-muted">Your cart is empty; nothing to check out.</p>
<a class="btn btn-success" href="/">Browse the catalog</a>"#
            .to_string();
    }

    let rows: String = lines
        .iter()
        .map(|line| {
            format!(
                r#"<tr><td>{name}</td><td>{quantity}</td><td>${subtotal:.2}</td></tr>"#,
                name = html_escape(&line.name),
                quantity = line.quantity,
                subtotal = line.subtotal(),
            )
        })
        .collect();

    format!(
        r#"<h3>Checkout</h3>
<div class="row">
  <div class="col-md-6">
    <h5>Order Summary</h5>
    <table class="table bg-white">
      <thead><tr><th>Item</th><th>Quantity</th><th>Subtotal</th></tr></thead>
      <tbody>{rows}</tbody>
      <tfoot><tr><th colspan="2" class="text-end">Total</th><th>${total:.2}</th></tr></tfoot>
    </table>
  </div>
  <div class="col-md-6">
    <h5>Delivery Details</h5>
    <form method="post" action="/place-order">
      <div class="mb-3">
        <label class="form-label">Name</label>
        <input name="name" required class="form-control">
      </div>
      <div class="mb-3">
        <label class="form-label">Phone</label>
        <input name="phone" required class="form-control">
      </div>
      <div class="mb-3">
        <label class="form-label">Address</label>
        <textarea name="address" required class="form-control"></textarea>
      </div>
      <button class="btn btn-success">Place Order</button>
    </form>
  </div>
</div>"#,
    )
}

/// Render the order confirmation shown after a successful checkout.
pub fn render_order_confirmation(customer_name: &str, total: f64) -> String {
    format!(
        r#"<div class="text-center py-5">
  <h2>Thank you, {name}!</h2>
  <p class="lead">Your order of ${total:.2} has been placed.</p>
  <a class="btn btn-outline-success" href="/track">Track Order</a>
  <a class="btn btn-success" href="/">Back to the store</a>
</div>"#,
        name = html_escape(customer_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_renders_form_and_total() {
        let lines = vec![CartLineView {
            item_id: 1,
            name: "Apple".to_string(),
            price: 2.00,
            quantity: 3,
            discount_percent: Some(10),
        }];
        let html = render_checkout(&lines, 5.40);
        assert!(html.contains(r#"action="/place-order""#));
        assert!(html.contains("$5.40"));
        assert!(html.contains("Apple"));
    }

    #[test]
    fn test_confirmation_escapes_customer_name() {
        let html = render_order_confirmation("<Mallory>", 9.99);
        assert!(html.contains("&lt;Mallory&gt;"));
        assert!(html.contains("$9.99"));
    }
}
