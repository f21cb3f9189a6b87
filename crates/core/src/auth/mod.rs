//! Authentication primitives.
//!
//! The credential store never sees a plaintext password twice: registration
//! stores an Argon2id PHC hash, and login verifies against it.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
