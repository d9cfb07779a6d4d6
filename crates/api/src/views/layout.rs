//! Shared page chrome: document shell, navbar, and the error page.

use axum::http::StatusCode;

use super::html_escape;

/// Bootstrap CSS served from the CDN, pinned to one version.
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Wrap a page body in the storefront chrome.
///
/// `cart_count` feeds the navbar badge so every page shows how many
/// units the cart is holding.
pub fn render_page(title: &str, cart_count: i64, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - Grocer</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body class="bg-light">
<nav class="navbar navbar-expand navbar-dark bg-success mb-4">
  <div class="container">
    <a class="navbar-brand" href="/">Grocer</a>
    <div class="navbar-nav">
      <a class="nav-link" href="/">Home</a>
      <a class="nav-link" href="/cart">Cart <span class="badge bg-light text-dark">{cart_count}</span></a>
      <a class="nav-link" href="/track">Track Order</a>
      <a class="nav-link" href="/admin/dashboard">Admin</a>
    </div>
  </div>
</nav>
<div class="container pb-4">
{body}
</div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

/// Wrap an admin page body in the console chrome.
pub fn render_admin_page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - Grocer Admin</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body class="bg-light">
<nav class="navbar navbar-expand navbar-dark bg-dark mb-4">
  <div class="container">
    <a class="navbar-brand" href="/admin/dashboard">Grocer Admin</a>
    <div class="navbar-nav">
      <a class="nav-link" href="/">Storefront</a>
      <a class="nav-link" href="/export">Export CSV</a>
      <a class="nav-link" href="/admin/logout">Logout</a>
    </div>
  </div>
</nav>
<div class="container pb-4">
{body}
</div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

/// Standalone error page. Self-contained so it can render even when the
/// database is unreachable.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{code} - Grocer</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body class="bg-light">
<div class="container py-5 text-center">
  <h1 class="display-4">{code}</h1>
  <p class="lead">{message}</p>
  <a class="btn btn-success" href="/">Back to the store</a>
</div>
</body>
</html>"#,
        code = status.as_u16(),
        message = html_escape(message),
    )
}
