//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener with graceful shutdown
//! - Orchestrate fetch → resize → response per request

use std::time::Instant;

use axum::{
    body::Body,
    extract::{Query, State},
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::fetch::SvgFetcher;
use crate::http::request::{MakeRequestUuid, ResizeQuery, X_REQUEST_ID};
use crate::http::response::{cache_control_value, svg_response};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::svg::resize_svg;

/// Application state injected into handlers. Built once, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: SvgFetcher,
    pub cache_control: String,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            fetcher: SvgFetcher::from_config(&config.upstream)?,
            cache_control: cache_control_value(config.response.cache_max_age_secs),
        })
    }
}

/// HTTP server for the resizer.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let state = AppState::from_config(&config)?;
        let router = build_router(state);
        Ok(Self { router, config })
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(resize_handler))
        .route("/resize", get(resize_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Resize handler: `GET /?svg=<url>&width=<n>&height=<n>`.
async fn resize_handler(
    State(state): State<AppState>,
    Query(query): Query<ResizeQuery>,
) -> Response {
    let start_time = Instant::now();

    match resize_remote(&state, query).await {
        Ok(svg) => {
            metrics::record_request("ok", start_time);
            tracing::info!(bytes = svg.len(), "Resized SVG");
            svg_response(svg, &state.cache_control)
        }
        Err(err) => {
            metrics::record_request(err.kind(), start_time);
            tracing::warn!(kind = err.kind(), error = %err, "Resize request failed");
            err.into_response()
        }
    }
}

async fn resize_remote(state: &AppState, query: ResizeQuery) -> Result<String, ServiceError> {
    let target = query.into_target()?;
    let text = state.fetcher.fetch(&target.url).await?;
    let resized = resize_svg(&text, target.size)?;
    Ok(resized)
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
