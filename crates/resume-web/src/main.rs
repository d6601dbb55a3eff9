use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use resume_core::{OracleSettings, build_oracle};
use resume_parsing::ResumeExtractor;
use resume_pdf_mupdf::MupdfBackend;

mod handlers;
mod state;
mod upload;

use state::AppState;

const DEFAULT_PORT: u16 = 3001;

fn app(state: Arc<AppState>) -> axum::Router {
    // Resumes are small; 20MB is generous.
    let body_limit = axum::extract::DefaultBodyLimit::max(20 * 1024 * 1024);

    axum::Router::new()
        .route("/extract", axum::routing::post(handlers::extract))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = OracleSettings::load()?;
    let oracle = build_oracle(&settings)?;
    tracing::info!(oracle = oracle.name(), "entity oracle configured");

    let state = Arc::new(AppState {
        backend: Arc::new(MupdfBackend::new()),
        oracle,
        extractor: ResumeExtractor::new(),
    });

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid PORT {raw:?}: {e}"))?,
        Err(_) => DEFAULT_PORT,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
