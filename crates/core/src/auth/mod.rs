//! Authentication primitives.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Opaque session token generation and hashing

mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{generate_session_token, hash_session_token, TOKEN_BYTES};
