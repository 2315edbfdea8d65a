//! Password hashing (Argon2id)

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(
    password: &str,
    stored_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(stored_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret-pass").expect("hashing failed");
        assert!(verify_password("s3cret-pass", &hash).expect("verify failed"));
        assert!(!verify_password("wrong-pass", &hash).expect("verify failed"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same").expect("hashing failed");
        let b = hash_password("same").expect("hashing failed");
        assert_ne!(a, b);
    }
}
