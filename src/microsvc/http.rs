//! HTTP transport - maps REST routes and raw command posts onto dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` - liveness banner.
//! - `GET /health` - `{ "ok": true, "commands": [...] }`.
//! - `POST /api/register`, `POST /api/login`, `GET /api/users`
//! - `GET|POST /api/products`, `GET|PUT|DELETE /api/products/:id`
//! - `POST /api/checkout`, `GET /api/reports/sales`
//! - `POST /:command` - dispatch any registered command by name.
//!
//! Anything else answers with a JSON 404. Request headers become the
//! session, so `Authorization: Bearer <token>` reaches the handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::service::Service;
use super::session::Session;

type Shared<R> = State<Arc<Service<R>>>;

/// Build an axum `Router` over the given service.
pub fn router<R: Send + Sync + 'static>(service: Arc<Service<R>>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler::<R>))
        .route("/api/register", post(register_handler::<R>))
        .route("/api/login", post(login_handler::<R>))
        .route("/api/users", get(users_handler::<R>))
        .route(
            "/api/products",
            get(product_list_handler::<R>).post(product_create_handler::<R>),
        )
        .route(
            "/api/products/:id",
            get(product_get_handler::<R>)
                .put(product_update_handler::<R>)
                .delete(product_delete_handler::<R>),
        )
        .route("/api/checkout", post(checkout_handler::<R>))
        .route("/api/reports/sales", get(sales_report_handler::<R>))
        .route(
            "/:command",
            post(command_handler::<R>).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`)
/// until `shutdown` resolves.
pub async fn serve<R, F>(service: Arc<Service<R>>, addr: &str, shutdown: F) -> Result<(), std::io::Error>
where
    R: Send + Sync + 'static,
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Dispatch `command` and shape the result as an HTTP response.
fn respond<R: Send + Sync + 'static>(
    service: &Service<R>,
    command: &str,
    input: Value,
    headers: &HeaderMap,
    success: StatusCode,
) -> Response {
    match service.dispatch(command, input, session_from_headers(headers)) {
        Ok(value) => (success, Json(value)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(e.body())).into_response()
        }
    }
}

/// Merge the path id into a JSON object body.
fn with_id(id: String, body: Value) -> Value {
    let mut body = match body {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    body.insert("id".into(), Value::String(id));
    Value::Object(body)
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "status": "API is Live!",
        "message": "Welcome to the storefront API.",
        "documentation": "Access routes like /api/register, /api/login, /api/products and /api/checkout.",
    }))
}

/// `GET /health` - returns `{ "ok": true, "commands": [...] }`.
async fn health_handler<R: Send + Sync + 'static>(State(service): Shared<R>) -> impl IntoResponse {
    let mut commands: Vec<&str> = service.commands();
    commands.sort_unstable();
    Json(json!({ "ok": true, "commands": commands }))
}

async fn register_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, "user.register", input, &headers, StatusCode::CREATED)
}

async fn login_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, "user.login", input, &headers, StatusCode::OK)
}

async fn users_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
) -> Response {
    respond(&service, "user.list", json!({}), &headers, StatusCode::OK)
}

async fn product_list_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
) -> Response {
    respond(&service, "product.list", json!({}), &headers, StatusCode::OK)
}

async fn product_create_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, "product.create", input, &headers, StatusCode::CREATED)
}

async fn product_get_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    respond(&service, "product.get", json!({ "id": id }), &headers, StatusCode::OK)
}

async fn product_update_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, "product.update", with_id(id, input), &headers, StatusCode::OK)
}

async fn product_delete_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    respond(&service, "product.delete", json!({ "id": id }), &headers, StatusCode::OK)
}

async fn checkout_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, "checkout", input, &headers, StatusCode::CREATED)
}

async fn sales_report_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    headers: HeaderMap,
) -> Response {
    respond(&service, "report.sales", json!({}), &headers, StatusCode::OK)
}

/// `POST /:command` - dispatch a command with JSON body and headers as session.
async fn command_handler<R: Send + Sync + 'static>(
    State(service): Shared<R>,
    Path(command): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> Response {
    respond(&service, &command, input, &headers, StatusCode::OK)
}

async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route Not Found",
            "message": format!("The API endpoint '{}' does not exist.", uri),
        })),
    )
}

/// Extract session variables from HTTP headers.
///
/// All headers are lowercased and included as session variables.
fn session_from_headers(headers: &HeaderMap) -> Session {
    let mut vars = std::collections::HashMap::new();
    for (name, value) in headers.iter() {
        if let Ok(v) = value.to_str() {
            vars.insert(name.as_str().to_string(), v.to_string());
        }
    }
    Session::from_map(vars)
}
