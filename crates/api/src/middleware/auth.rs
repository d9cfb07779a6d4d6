//! Admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::auth::session::{validate_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires the
/// admin console gate:
///
/// ```ignore
/// async fn dashboard(admin: AdminSession) -> AppResult<Html<String>> {
///     tracing::debug!(username = %admin.username, "rendering dashboard");
///     ...
/// }
/// ```
///
/// A missing, invalid, or expired session rejects with
/// [`AppError::LoginRequired`], which answers with a 302 to `/admin/login`.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The admin username (from `claims.sub`).
    pub username: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookies| cookie_value(cookies, SESSION_COOKIE))
            .ok_or(AppError::LoginRequired)?;

        let claims = validate_session_token(token, &state.config.session)
            .map_err(|_| AppError::LoginRequired)?;

        Ok(AdminSession { username: claims.sub })
    }
}

/// Pick one cookie's value out of a `Cookie` header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_parsing() {
        let header = "theme=dark; grocer_admin=tok123; other=x";
        assert_eq!(cookie_value(header, "grocer_admin"), Some("tok123"));
        assert_eq!(cookie_value(header, "theme"), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn test_cookie_value_single_pair() {
        assert_eq!(cookie_value("grocer_admin=abc", "grocer_admin"), Some("abc"));
        assert_eq!(cookie_value("", "grocer_admin"), None);
    }
}
