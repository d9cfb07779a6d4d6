//! Response helpers for the browser-facing surface.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A `302 Found` redirect to `location`.
///
/// `axum::response::Redirect` only emits 303/307/308, and this surface
/// answers plain `GET` links and the admin gate with 302.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
