use bcrypt::hash;
use bcrypt::verify;

use super::errors::PasswordError;

/// Work factor for password hashing.
///
/// Fixed at 12 to keep offline brute-force expensive while staying within
/// interactive login latency.
pub const HASH_COST: u32 = 12;

/// Password hashing implementation.
///
/// Wraps bcrypt with the portal's fixed work factor. The encoded hash is
/// self-describing (algorithm, cost, and salt are embedded), so verification
/// needs no externally stored salt.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the standard cost factor.
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Create a password hasher with a custom cost factor.
    ///
    /// bcrypt rejects costs below 4. Intended for test fixtures that cannot
    /// afford the production work factor; production callers should use
    /// [`PasswordHasher::new`].
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different encoded strings.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Recomputes with the salt and cost embedded in `hash` and compares
    /// against the stored digest. A non-matching password is `Ok(false)`;
    /// only a structurally malformed hash is an error, and callers must
    /// treat that as "not authenticated" rather than a crash.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        verify(password, hash)
            .map_err(|e| PasswordError::VerificationFailed(format!("Invalid password hash: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
