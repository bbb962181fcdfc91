//! Centralized configuration (environment variables + defaults).
//!
//! Read once at process start; handlers receive the resolved values through
//! `AppState` rather than touching the environment themselves.

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Pre-shared secret that authorizes deletions (required).
pub fn secret_key() -> String {
    std::env::var("SECRET_KEY").expect("SECRET_KEY must be set")
}

/// Listen address (optional).
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
