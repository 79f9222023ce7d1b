//! Authentication core for the sports-club portal
//!
//! Provides the identity layer the portal's route handlers build on:
//! - Password hashing (bcrypt, cost factor 12)
//! - Signed identity tokens (JWT, HS256, 7-day expiry)
//! - Authentication coordination
//!
//! Route handlers, rosters, events, and the rest of the portal stay outside
//! this crate; they call in to hash/verify passwords and to mint/verify
//! tokens, then apply their own role checks on the returned claims.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use club_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Identity Tokens
//! ```
//! use club_auth::{TokenService, Role};
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = service.issue("u1", "a@b.com", Role::Admin).unwrap();
//! let claims = service.verify(&token).unwrap();
//! assert_eq!(claims.sub, "u1");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use club_auth::{Authenticator, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", "alice@club.edu", Role::Student)
//!     .unwrap();
//!
//! // Every authenticated request: verify token
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.role, Role::Student);
//! ```

pub mod authenticator;
pub mod config;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use config::Config;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Role;
pub use token::TokenError;
pub use token::TokenService;
