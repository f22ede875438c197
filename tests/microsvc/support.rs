//! Test fixtures: a seeded storefront service and login helpers.

use std::time::Duration;

use serde_json::json;
use storefront::auth::{Accounts, AdminSeed};
use storefront::microsvc::{Service, Session};
use storefront::{handlers, seed, CheckoutMode, InMemoryModelStore, Storefront, TokenGate};

pub type App = Storefront<InMemoryModelStore>;

pub const ADMIN_EMAIL: &str = "admin@mystore.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn app(mode: CheckoutMode) -> App {
    let store = InMemoryModelStore::new();
    let tokens = TokenGate::new("test-secret", Duration::from_secs(300));
    let app = Storefront::new(store.clone(), tokens.clone(), mode)
        .with_accounts(Accounts::new(store, tokens).with_hash_cost(4));

    app.catalog().seed(seed::demo_catalog()).unwrap();
    app.accounts().ensure_admin(&AdminSeed::default()).unwrap();
    app
}

pub fn service(mode: CheckoutMode) -> Service<App> {
    handlers::service(app(mode))
}

pub fn login(service: &Service<App>, email: &str, password: &str) -> String {
    let outcome = service
        .dispatch(
            "user.login",
            json!({ "email": email, "password": password }),
            Session::new(),
        )
        .unwrap();
    outcome["token"].as_str().unwrap().to_string()
}

pub fn admin(service: &Service<App>) -> Session {
    Session::with_bearer(login(service, ADMIN_EMAIL, ADMIN_PASSWORD))
}

/// Register a customer and return a session carrying their token.
pub fn customer(service: &Service<App>, email: &str) -> Session {
    service
        .dispatch(
            "user.register",
            json!({ "name": "Test Customer", "email": email, "password": "pw" }),
            Session::new(),
        )
        .unwrap();
    Session::with_bearer(login(service, email, "pw"))
}
