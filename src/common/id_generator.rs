// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXXXXXX (e.g., U_K7NP3X2Q8M for users)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Default random-part length for record ids
const ID_LENGTH: usize = 10;

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Payment record (P_)
    Payment,
    /// Lesson (L_)
    Lesson,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Payment => "P",
            EntityPrefix::Lesson => "L",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// Returns a string in format "PREFIX_XXXXXXXXXX" (e.g., "U_K7NP3X2Q8M")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(ID_LENGTH))
}

pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

pub fn generate_payment_id() -> String {
    generate_id(EntityPrefix::Payment)
}

pub fn generate_lesson_id() -> String {
    generate_id(EntityPrefix::Lesson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = generate_user_id();
        assert!(id.starts_with("U_"));
        assert_eq!(id.len(), 2 + ID_LENGTH);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = generate_payment_id();
        let b = generate_payment_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_ambiguous_characters() {
        let id = generate_crockford_string(64);
        for c in id.chars() {
            assert!(
                !matches!(c, 'I' | 'L' | 'O' | 'U'),
                "ambiguous character {} in id",
                c
            );
        }
    }
}
