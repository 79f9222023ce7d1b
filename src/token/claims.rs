use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token lifetime. Tokens are not refreshed or revoked; a token stays valid
/// until this window elapses, even after a client-side logout.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Portal account role, carried verbatim in the token.
///
/// The role is captured at minting time and never refreshed: a role change
/// does not invalidate outstanding tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Coach,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "STUDENT"),
            Role::Coach => write!(f, "COACH"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Identity claims embedded in a signed token.
///
/// The closed claim set is deliberate: verification needs zero I/O and no
/// session store, so everything role gating requires travels in the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (portal user id)
    pub sub: String,

    /// Account email at minting time
    pub email: String,

    /// Account role at minting time
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with the standard 7-day expiration.
    pub fn new(sub: impl ToString, email: impl ToString, role: Role) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(TOKEN_TTL_DAYS);

        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    ///
    /// A token is invalid from its expiry instant onward: at exactly `exp`
    /// it is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
