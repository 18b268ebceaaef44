//! Salted password hashing
//!
//! Passwords are stored as `sha256$<salt>$<digest>` with both parts
//! base64-encoded. The salt is 16 random bytes per password.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const SCHEME: &str = "sha256";

fn digest_with_salt(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let digest = digest_with_salt(&salt, password);

    format!(
        "{}${}${}",
        SCHEME,
        STANDARD.encode(salt),
        STANDARD.encode(digest)
    )
}

/// Check a password against a stored `sha256$salt$digest` string
#[allow(dead_code)]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');

    let (scheme, salt_b64, digest_b64) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(salt), Some(digest)) => (scheme, salt, digest),
        _ => return false,
    };

    if scheme != SCHEME {
        return false;
    }

    let salt = match STANDARD.decode(salt_b64) {
        Ok(salt) => salt,
        Err(_) => return false,
    };
    let expected = match STANDARD.decode(digest_b64) {
        Ok(digest) => digest,
        Err(_) => return false,
    };

    digest_with_salt(&salt, password) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = hash_password("secret123");
        assert!(!hashed.contains("secret123"));
        assert!(hashed.starts_with("sha256$"));
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let hashed = hash_password("secret123");
        assert!(verify_password("secret123", &hashed));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash_password("secret123");
        assert!(!verify_password("secret124", &hashed));
    }

    #[test]
    fn test_salts_are_unique_per_hash() {
        let a = hash_password("secret123");
        let b = hash_password("secret123");
        assert_ne!(a, b, "Equal passwords must not produce equal hashes");
    }

    #[test]
    fn test_verify_rejects_malformed_stored_value() {
        assert!(!verify_password("secret123", "not-a-hash"));
        assert!(!verify_password("secret123", "md5$AAAA$BBBB"));
    }
}
