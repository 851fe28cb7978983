//! Opaque session tokens.
//!
//! Tokens are random bytes handed to the client once; only the SHA-256
//! hash is persisted, so a database leak never exposes live sessions.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a session token.
pub const TOKEN_BYTES: usize = 32;

/// Generates a new URL-safe session token.
#[must_use]
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    base64_url::encode(&bytes)
}

/// Hashes a session token for storage and lookup.
#[must_use]
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = generate_session_token();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_hash_is_stable_hex_sha256() {
        let hash = hash_session_token("fixed-token");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_session_token("fixed-token"));
        assert_ne!(hash, hash_session_token("other-token"));
    }
}
