use sha2::{Digest, Sha512};

/// Compute the SHA-512 digest of a password, hex encoded.
///
/// The digest is deterministic: the same input always yields the same
/// 128-character lowercase hex string. Registration relies on this to
/// compare a re-submitted password against the stored digest without
/// any per-user salt lookup.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha512::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let a = hash_password("correct horse battery staple");
        let b = hash_password("correct horse battery staple");

        // Verify deterministic
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_shape() {
        let hash = hash_password("password123");

        assert_eq!(hash.len(), 128);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash.to_lowercase());
    }

    #[test]
    fn test_different_passwords_differ() {
        assert_ne!(hash_password("password123"), hash_password("password124"));
        assert_ne!(hash_password(""), hash_password(" "));
    }
}
