//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the backend proxy and the health check, and stitches them with
//! Leptos SSR rendering under a single Axum router. Paths the app does not
//! know are still rendered by the app, which shows the home view.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ConfigError, ServerError};
use crate::proxy::{self, ProxyState};

/// Proxy + health check + Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or the
/// upstream HTTP client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let proxy_state = ProxyState::new(config)?;
    tracing::info!(backend = proxy_state.backend_url(), "proxying identity backend");

    Ok(proxy::routes(proxy_state)
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
