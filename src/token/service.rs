use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Role;
use super::errors::TokenError;

/// Issues and verifies signed identity tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a symmetric secret injected at
/// construction. Verification is a pure function of the token and the
/// secret: no I/O, no shared mutable state, safe to call from any number of
/// request handlers concurrently.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service with a signing secret.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and come
    /// from configuration, never from code (see [`crate::config::Config`]).
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// Claims are stamped with the current time and the standard 7-day
    /// expiry; the role is whatever the account holds right now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        sub: impl ToString,
        email: impl ToString,
        role: Role,
    ) -> Result<String, TokenError> {
        self.encode(&Claims::new(sub, email, role))
    }

    /// Sign pre-built claims into a token.
    ///
    /// Lower-level building block for [`TokenService::issue`]; useful when
    /// the timestamps must be controlled explicitly.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Total function: returns `Some(claims)` only when the signature
    /// validates and the current time is before `exp`, and `None` for
    /// everything else (forged, structurally malformed, expired, or empty
    /// input). Callers cannot and must not distinguish the failure modes;
    /// the reason is logged at debug level only.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // No grace window on expiry
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            // The library treats a token as live at exactly exp; the portal
            // treats the expiry instant itself as already invalid
            Ok(data) if data.claims.is_expired(Utc::now().timestamp()) => {
                tracing::debug!("Rejected identity token: expired");
                None
            }
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected identity token");
                None
            }
        }
    }
}
