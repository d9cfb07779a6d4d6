//! Static order-tracking page. Orders are not persisted, so this shows
//! the standard delivery stages rather than live status.

pub fn render_track() -> String {
    r#"<h3>Track Your Order</h3>
<p class="text-muted">Orders are prepared in the sequence below. For questions, call the store.</p>
<ul class="list-group" style="max-width: 28rem;">
  <li class="list-group-item">1. Order received</li>
  <li class="list-group-item">2. Items picked and packed</li>
  <li class="list-group-item">3. Out for delivery</li>
  <li class="list-group-item">4. Delivered</li>
</ul>"#
        .to_string()
}
