//! Compile-time client configuration.
//!
//! The API base URL is baked in at build time from `AUTORES_API_BASE` so the
//! same WASM bundle can be pointed at a different backend without code edits.

/// Base URL prepended to every API path (no trailing slash).
pub const API_BASE: &str = match option_env!("AUTORES_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// How long a banner message stays visible, in milliseconds.
pub const MESSAGE_TTL_MS: u64 = 3000;

/// Unauthenticated entry route (login + public list).
pub const HOME_ROUTE: &str = "/";

/// Protected management route (table + form).
pub const MANAGE_ROUTE: &str = "/autores";
