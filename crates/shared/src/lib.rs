//! Shared types, errors, and configuration for Hearth.
//!
//! This crate provides common types used across all other crates:
//! - Authentication request/response payloads
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
