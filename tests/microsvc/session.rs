//! Bearer tokens carried in the session.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::json;
use storefront::auth::AuthGate;
use storefront::microsvc::Session;
use storefront::{CheckoutMode, Role, TokenGate};

use crate::support::{login, service, ADMIN_EMAIL, ADMIN_PASSWORD};

#[test]
fn login_token_resolves_to_identity() {
    let service = service(CheckoutMode::Lenient);
    let token = login(&service, ADMIN_EMAIL, ADMIN_PASSWORD);

    let identity = service.state().authenticate(&token).unwrap();
    assert_eq!(identity.email, ADMIN_EMAIL);
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn tampered_or_foreign_tokens_are_unauthorized() {
    let service = service(CheckoutMode::Lenient);
    let token = login(&service, ADMIN_EMAIL, ADMIN_PASSWORD);

    let mut tampered = token.clone();
    tampered.push('x');

    let other_gate = TokenGate::new("other-secret", Duration::from_secs(300));
    let identity = service.state().authenticate(&token).unwrap();
    let foreign = other_gate.issue(&identity).unwrap();

    for bad in [tampered.as_str(), foreign.as_str(), "garbage"] {
        let err = service
            .dispatch("user.list", json!({}), Session::with_bearer(bad))
            .unwrap_err();
        assert_eq!(err.status_code(), 401, "{bad}");
    }
}

#[test]
fn non_bearer_scheme_is_ignored() {
    let service = service(CheckoutMode::Lenient);
    let token = login(&service, ADMIN_EMAIL, ADMIN_PASSWORD);

    let mut headers = HashMap::new();
    headers.insert("authorization".to_string(), format!("Basic {token}"));
    let err = service
        .dispatch("user.list", json!({}), Session::from_map(headers))
        .unwrap_err();
    assert_eq!(err.status_code(), 401);
}
