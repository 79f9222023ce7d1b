//! End-to-end authentication scenarios through the public API.

use club_auth::Authenticator;
use club_auth::Role;
use club_auth::TokenService;

const SECRET: &[u8] = b"integration_secret_at_least_32_bytes!";

#[test]
fn signup_login_and_authenticated_request() {
    let auth = Authenticator::new(SECRET);

    // Signup: the handler stores only the hash
    let stored_hash = auth.hash_password("admin123").expect("Failed to hash password");
    assert!(!stored_hash.contains("admin123"));

    // Login with the right password yields a token
    let result = auth
        .authenticate("admin123", &stored_hash, "u1", "a@b.com", Role::Admin)
        .expect("Login should succeed");

    // Login with the wrong password does not
    assert!(auth
        .authenticate("wrongpass", &stored_hash, "u1", "a@b.com", Role::Admin)
        .is_err());

    // The token carries the identity the handler gates on
    let claims = auth
        .verify_token(&result.access_token)
        .expect("Token should verify");
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.role, Role::Admin);
    assert!(claims.iat < claims.exp);
}

#[test]
fn tampered_token_is_treated_as_absent() {
    let service = TokenService::new(SECRET);

    let token = service
        .issue("u1", "a@b.com", Role::Admin)
        .expect("Failed to issue token");

    assert!(service.verify(&token).is_some());
    assert!(service.verify(&format!("{}x", token)).is_none());
    assert!(service.verify("").is_none());
}

#[test]
fn token_from_another_deployment_is_rejected() {
    let ours = TokenService::new(SECRET);
    let theirs = TokenService::new(b"some_other_secret_32_bytes_or_more!!");

    let token = theirs
        .issue("u1", "a@b.com", Role::Coach)
        .expect("Failed to issue token");

    assert!(ours.verify(&token).is_none());
}
