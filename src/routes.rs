//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is server-rendered by Leptos at `/`; the hydration bundle
//! is served from `/pkg`, the pitch deck and other documents from `/deck`,
//! and `/healthz` answers liveness probes.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use client::app::{App, shell};
use widgets::SiteContent;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not involve Leptos rendering.
pub fn static_routes(config: &ServerConfig) -> Router {
    Router::new().route("/healthz", get(healthz)).nest_service("/deck", ServeDir::new(config.deck_dir()))
}

/// Full application: static routes + Leptos SSR + hydration assets.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig, content: Arc<SiteContent>) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let routes = generate_route_list({
        let content = Arc::clone(&content);
        move || view! { <App content=Arc::clone(&content)/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), Arc::clone(&content))
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
