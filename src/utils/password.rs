use bcrypt::{hash, verify};

use super::error::AppError;

/// Hash a plaintext password with bcrypt at the given cost.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AppError> {
    hash(plain, cost).map_err(AppError::from)
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// Returns `Err` when the stored value is not a bcrypt hash at all
/// (e.g. a plaintext password written by an older seeder).
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool, AppError> {
    verify(plain, stored_hash).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt minimum, keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hashed = hash_password("admin123", TEST_COST).unwrap();
        assert_ne!(hashed, "admin123");
        assert!(verify_password("admin123", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_plaintext_stored_value_is_an_error() {
        let result = verify_password("admin123", "admin123");
        assert!(matches!(result, Err(AppError::PasswordError(_))));
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        assert!(hash_password("admin123", 1).is_err());
    }
}
