//! Authentication
//!
//! Bearer token check for the admin API.

pub mod admin_token;

pub use admin_token::admin_auth_middleware;
