// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! holded-bridge server binary

use clap::Parser;
use holded_bridge::{
    catalog::Catalog,
    config::Config,
    create_router,
    credentials::{EnvVar, HostKeyStore, KeyFile, ProviderChain},
    handlers::routes,
    registry::{self, HttpRegistry, StaticToken, TokenProvider},
    state::AppState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Key stores in lookup order: host key store, keys file, then the environment.
fn credential_chain(
    config: &Config,
    http: &reqwest::Client,
    token: &str,
) -> anyhow::Result<ProviderChain> {
    let mut chain = ProviderChain::new();
    if let Some(url) = &config.key_store_url {
        chain = chain.with(HostKeyStore::new(http.clone(), url.clone(), token));
    }
    if let Some(path) = &config.keys_file {
        chain = chain.with(KeyFile::load(path)?);
        info!("Loaded keys from {}", path.display());
    }
    Ok(chain.with(EnvVar))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize logging
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.to_string())),
        )
        .init();

    let http = reqwest::Client::new();
    let token = StaticToken(config.token()).token().await?;
    if token.is_empty() {
        warn!("No service token configured - descriptors carry an empty token");
    }

    let credentials = credential_chain(&config, &http, &token)?;
    let catalog = Catalog::build(config.public_url.as_deref(), &token);

    // Registration errors abort startup
    match &config.registry_url {
        Some(url) => {
            let registry = HttpRegistry::new(http.clone(), url.clone(), token.clone());
            registry::register_catalog(&registry, &catalog).await?;
        }
        None => info!(
            "No registry configured - descriptors served at {}",
            routes::CATALOG
        ),
    }

    let state = Arc::new(AppState::new(config.clone(), http, credentials, catalog)?);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("holded-bridge listening on {}", addr);
    info!("Holded extension initialized");

    axum::serve(listener, app).await?;

    Ok(())
}
