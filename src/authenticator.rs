use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::Role;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// This is the surface login/signup handlers call: hash a password at
/// account creation, verify it and mint a token at login, verify the token
/// on every authenticated request. Role gating itself stays with the
/// callers; this layer only establishes identity.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed identity token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an identity token.
    ///
    /// A wrong password and a malformed stored hash both surface as
    /// `InvalidCredentials`: callers get one generic failure signal, with
    /// nothing an attacker could use to probe the stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        sub: impl ToString,
        email: impl ToString,
        role: Role,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self
            .password_hasher
            .verify(password, stored_hash)
            .unwrap_or(false);

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(sub, email, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an identity token without password verification.
    ///
    /// Used at signup, where the account was just created and there is no
    /// stored hash to check against yet.
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(
        &self,
        sub: impl ToString,
        email: impl ToString,
        role: Role,
    ) -> Result<String, TokenError> {
        self.token_service.issue(sub, email, role)
    }

    /// Verify an identity token.
    ///
    /// Returns `None` for any invalid, expired, or malformed token; callers
    /// map that uniformly to a 401 or a redirect to login.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        self.token_service.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "user@club.edu", Role::Student)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .verify_token(&result.access_token)
            .expect("Token verification failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "user@club.edu");
        assert_eq!(claims.role, Role::Student);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "wrong_password",
            &hash,
            "user123",
            "user@club.edu",
            Role::Student,
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = Authenticator::new(SECRET);

        // A corrupted hash must read as "wrong password", not as an
        // internal error
        let result = authenticator.authenticate(
            "my_password",
            "not-a-bcrypt-hash",
            "user123",
            "user@club.edu",
            Role::Student,
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .issue_token("user123", "coach@club.edu", Role::Coach)
            .expect("Failed to issue token");

        let claims = authenticator
            .verify_token(&token)
            .expect("Token verification failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, Role::Coach);
    }

    #[test]
    fn test_verify_invalid_token() {
        let authenticator = Authenticator::new(SECRET);
        assert!(authenticator.verify_token("invalid.token.here").is_none());
    }
}
