//! The session authority.
//!
//! Issues, validates, and destroys opaque session tokens bound to one
//! household. Sessions live in an in-process TTL cache; a process restart
//! invalidates all of them, which is the intended trade-off for this
//! deployment size.

mod store;

pub use store::{Session, SessionStore};
