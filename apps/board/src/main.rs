mod config;
mod digest;
mod errors;
mod ingest;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::digest::{build_digest, PointExtractor, TopicCache};
use crate::llm_client::LlmClient;
use crate::render::{render_page, BackgroundImage, NoPacing, Pacer, SleepPacer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Topic Board v{}", env!("CARGO_PKG_VERSION"));

    // Startup precondition: a configured background image must exist.
    let background = match &config.background_image {
        Some(path) => match BackgroundImage::load(path) {
            Ok(image) => Some(Arc::new(image)),
            Err(e) => {
                error!("{e}");
                return Err(e.into());
            }
        },
        None => None,
    };

    // Initialize LLM client once; every topic reuses it
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let extractor = PointExtractor::new(Arc::new(llm));

    info!(
        "Board: layout={} max_points={} pacing={}ms",
        config.board.layout,
        config.board.max_points,
        config.board.pacing.as_millis()
    );

    if let Some(output) = &config.render_output {
        let digest = build_digest(&config.team_files_dir, &extractor, config.board.max_points).await?;
        let html = render_page(&digest, &config.board, background.as_deref()).into_html();
        std::fs::write(output, html)
            .with_context(|| format!("Cannot write '{}'", output.display()))?;
        info!("Wrote dashboard to {}", output.display());
        return Ok(());
    }

    let pacer: Arc<dyn Pacer> = if config.board.pacing.is_zero() {
        Arc::new(NoPacing)
    } else {
        Arc::new(SleepPacer(config.board.pacing))
    };

    let state = AppState {
        team_files_dir: config.team_files_dir.clone(),
        board: config.board.clone(),
        extractor,
        cache: config.cache_results.then(TopicCache::new),
        pacer,
        background,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
