//! Well-known role name constants for session claims.

pub const ROLE_ADMIN: &str = "admin";
