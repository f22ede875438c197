//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::{json, Value};
use storefront::microsvc;
use storefront::CheckoutMode;

use crate::support::{service, ADMIN_EMAIL, ADMIN_PASSWORD};

/// Bind to port 0 and return the actual address.
async fn start_server(mode: CheckoutMode) -> String {
    let app = microsvc::router(Arc::new(service(mode)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn login(client: &reqwest::Client, base: &str, email: &str, password: &str) -> String {
    let resp = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Login successful!");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn root_and_health() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "API is Live!");

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["commands"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn unknown_routes_get_json_404() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();

    for path in ["/nope", "/api/nothing/here"] {
        let resp = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(resp.status(), 404, "{path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Route Not Found");
        assert_eq!(
            body["message"],
            format!("The API endpoint '{path}' does not exist.")
        );
    }
}

#[tokio::test]
async fn customer_shopping_flow() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/register"))
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["role"], "customer");

    let token = login(&client, &base, "ada@example.com", "pw").await;

    let resp = client.get(format!("{base}/api/products")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let products: Value = resp.json().await.unwrap();
    assert_eq!(products.as_array().unwrap().len(), 20);

    let cart = json!({ "cart": [
        { "id": "P001", "name": "Stylish Headset", "price": 59.99, "quantity": 2 },
    ]});

    let resp = client
        .post(format!("{base}/api/checkout"))
        .json(&cart)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .post(format!("{base}/api/checkout"))
        .bearer_auth(&token)
        .json(&cart)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let receipt: Value = resp.json().await.unwrap();
    assert_eq!(receipt["message"], "Checkout successful");

    let resp = client
        .get(format!("{base}/api/products/P001"))
        .send()
        .await
        .unwrap();
    let product: Value = resp.json().await.unwrap();
    assert_eq!(product["stock"], 13);

    let resp = client
        .get(format!("{base}/api/reports/sales"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn admin_manages_catalog_and_reads_report() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let resp = client
        .post(format!("{base}/api/products"))
        .bearer_auth(&token)
        .json(&json!({ "id": "P100", "name": "USB Hub", "price": 19.99, "stock": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = client
        .put(format!("{base}/api/products/P100"))
        .bearer_auth(&token)
        .json(&json!({ "price": 17.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let product: Value = resp.json().await.unwrap();
    assert_eq!(product["price"], 17.5);

    let resp = client
        .delete(format!("{base}/api/products/P100"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{base}/api/products/P100"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!("{base}/api/checkout"))
        .bearer_auth(&token)
        .json(&json!({ "cart": [
            { "id": "P002", "name": "Ergonomic Mouse", "price": 24.5, "quantity": 3 },
        ]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = client
        .get(format!("{base}/api/reports/sales"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let report: Value = resp.json().await.unwrap();
    assert_eq!(report[0]["productId"], "P002");
    assert_eq!(report[0]["totalUnitsSold"], 3);
    assert_eq!(report[0]["totalRevenue"], 73.5);

    let resp = client
        .get(format!("{base}/api/users"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn strict_mode_shortfall_is_409() {
    let base = start_server(CheckoutMode::Strict).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let resp = client
        .post(format!("{base}/api/checkout"))
        .bearer_auth(&token)
        .json(&json!({ "cart": [
            { "id": "P003", "name": "Portable Charger", "price": 35.0, "quantity": 1 },
        ]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["shortfalls"][0]["productId"], "P003");
}

#[tokio::test]
async fn post_command_by_name() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/product.get"))
        .json(&json!({ "id": "P002" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let product: Value = resp.json().await.unwrap();
    assert_eq!(product["name"], "Ergonomic Mouse");

    let resp = client
        .post(format!("{base}/no.such.command"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn anonymous_checkout_is_401_before_the_body_is_checked() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/checkout"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let token = login(&client, &base, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let resp = client
        .post(format!("{base}/api/checkout"))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "cart is empty");
}

#[tokio::test]
async fn string_price_is_accepted_and_served_as_a_number() {
    let base = start_server(CheckoutMode::Lenient).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let resp = client
        .post(format!("{base}/api/products"))
        .bearer_auth(&token)
        .json(&json!({ "id": "P100", "name": "Gold Keyboard", "price": "1234567890123.4567", "stock": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let product: Value = resp.json().await.unwrap();
    let price = product["price"].as_f64().unwrap();
    assert!((price - 1234567890123.4567).abs() < 1e-3, "{price}");
}
