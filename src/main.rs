mod config;
mod error;
mod routes;

use std::sync::Arc;

use widgets::SiteContent;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "naijacare failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    // Content is validated once here; a broken script never reaches a render.
    let content = Arc::new(SiteContent::naijacare()?);
    tracing::info!(
        script_steps = content.script.len(),
        roadmap_entries = content.roadmap_entries.len(),
        partners = content.partner_names.len(),
        "site content loaded"
    );

    // The deck is deployed alongside the binary, not built with it.
    if let Some(deck) = config.deck_path(content.contact_details.deck_href) {
        if !deck.is_file() {
            tracing::warn!(path = %deck.display(), "pitch deck missing; deck links will 404 until it is supplied");
        }
    }

    let app = routes::app(&config, content)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, assets_dir = %config.assets_dir.display(), "naijacare listening");
    axum::serve(listener, app).await?;
    Ok(())
}
