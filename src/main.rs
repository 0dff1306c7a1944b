mod client;
mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod prompt;

use axum::{routing::{any, get, Router}};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use client::GeminiClient;
use config::Config;
use reqwest::Client;

// shared by every request, read-only.
// the http client is shared so connections are pooled
// instead of building a new client per request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gemini: GeminiClient
}

pub fn app(state: AppState) -> Router {

    // any() so that the handler answers non-POST methods itself
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/generate-recipes", any(handlers::generate_recipes))
        .route("/.netlify/functions/generate-recipes", any(handlers::generate_recipes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();
    logger::init_tracing();

    let config = Config::from_env()
        .expect("Invalid configuration");

    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, generation requests will fail");
    }

    let state = AppState {
        gemini: GeminiClient::new(Client::new(), &config),
        config: Arc::new(config)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], state.config.port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind listener");
    tracing::info!(model = %state.config.model, "listening on {}", listener.local_addr()
        .expect("Failed to get local address"));

    axum::serve(listener, app(state)).await
        .expect("Server failed");

}
