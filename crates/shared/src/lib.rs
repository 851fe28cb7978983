//! Shared types, errors, and configuration for dvtrack.
//!
//! This crate provides common pieces used across all other crates:
//! - Application configuration loading
//! - Application-wide error types
//! - Pagination and sorting types for list queries

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
