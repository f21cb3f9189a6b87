//! Core business logic for Hearth.
//!
//! Pure domain logic with no web or database dependencies:
//! - Password hashing with Argon2id
//! - The session authority (opaque tokens, absolute TTL)
//! - The interest projection engine

pub mod auth;
pub mod interest;
pub mod session;

pub use session::{Session, SessionStore};
