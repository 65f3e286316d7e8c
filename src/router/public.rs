//! Public routes: liveness and provider listing

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::planner::{Provider, ServiceMap};

#[derive(Serialize)]
struct PingResponse {
    status: String,
    version: String,
}

#[derive(Serialize)]
struct ProviderEntry {
    provider: Provider,
    services: ServiceMap,
}

pub fn public_router() -> Router {
    Router::new()
        .route("/api/v1/public/ping", get(ping))
        .route("/api/v1/public/providers", get(providers))
}

async fn ping() -> Response {
    (StatusCode::OK, Json(PingResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })).into_response()
}

async fn providers() -> Response {
    let entries: Vec<ProviderEntry> = Provider::ALL
        .into_iter()
        .map(|provider| ProviderEntry {
            provider,
            services: provider.services(),
        })
        .collect();

    (StatusCode::OK, Json(entries)).into_response()
}
