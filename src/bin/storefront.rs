//! Storefront HTTP server.
//!
//! ```text
//! STOREFRONT__SERVER__PORT=8080 STOREFRONT_LOG=debug cargo run --bin storefront
//! ```

use std::sync::Arc;

use storefront::config::Config;
use storefront::{handlers, microsvc, seed, telemetry, InMemoryModelStore, Storefront, TokenGate};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init_tracing(config.log.json);

    if config.uses_dev_secret() {
        warn!("auth.token_secret is the built-in development value; set STOREFRONT__AUTH__TOKEN_SECRET");
    }

    let store = InMemoryModelStore::new();
    let tokens = TokenGate::new(config.auth.token_secret.clone(), config.auth.token_ttl());
    let app = Storefront::new(store, tokens, config.checkout.mode());

    if config.seed.catalog {
        let count = app.catalog().seed(seed::demo_catalog())?;
        info!(count, "demo catalog loaded");
    }
    if let Some(admin) = &config.seed.admin {
        app.accounts().ensure_admin(admin)?;
    }

    let service = Arc::new(handlers::service(app));
    let addr = config.server.addr();
    info!(%addr, mode = ?config.checkout.mode(), "starting storefront");

    microsvc::serve(service, &addr, shutdown_signal()).await?;
    info!("storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
