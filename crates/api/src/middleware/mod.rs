//! Request middleware.

pub mod auth;

pub use auth::{AuthSession, SESSION_COOKIE, auth_middleware};
