//! Server-rendered HTML for the storefront and admin console.
//!
//! Each page module exposes `render_*` functions returning complete
//! HTML strings; [`layout`] wraps page bodies in the shared chrome.
//! All user-supplied text goes through [`html_escape`] and all item
//! names embedded in URL paths go through [`urlencode_path`].

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod layout;
pub mod track;

/// Escape text for interpolation into HTML content or attribute values.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encode a string for use as a single URL path segment.
pub(crate) fn urlencode_path(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    result
}
