mod analysis;
mod config;
mod documents;
mod errors;
mod feedback;
mod identity;
mod llm_client;
mod nlp;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::Extractor;
use crate::analysis::sections::HeaderTable;
use crate::analysis::taxonomy::SkillTaxonomy;
use crate::config::Config;
use crate::feedback::FeedbackSynthesizer;
use crate::identity::embedder::{FaceEmbedder, RemoteFaceEmbedder};
use crate::llm_client::LlmClient;
use crate::nlp::{NlpEngine, RemoteNlpEngine, RuleBasedEngine};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
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

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = build_extractor(&config).await;

    // LLM feedback is optional; without a key every response uses rule-based feedback
    let llm = match config.anthropic_api_key.clone() {
        Some(key) => {
            let client = LlmClient::new(key, config.llm_max_attempts)?;
            info!(
                "LLM client initialized (model: {}, attempts: {})",
                llm_client::MODEL,
                client.max_attempts()
            );
            Some(client)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set, feedback will be rule-based");
            None
        }
    };

    let face_embedder = build_face_embedder(&config).await;

    let state = AppState {
        extractor,
        feedback: FeedbackSynthesizer::new(llm),
        face_embedder,
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects the NLP engine. A configured remote engine that cannot be reached
/// disables analysis rather than silently switching engines.
async fn build_extractor(config: &Config) -> Option<Extractor> {
    let engine: Arc<dyn NlpEngine> = match &config.nlp_service_url {
        Some(url) => match RemoteNlpEngine::connect(url).await {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                error!("NLP engine failed to start, /analyze-resume will answer 503: {e}");
                return None;
            }
        },
        None => Arc::new(RuleBasedEngine::new()),
    };

    let taxonomy = SkillTaxonomy::default();
    let categories = taxonomy.categories().len();
    for category in taxonomy.categories() {
        debug!(
            "Skill category {}: {}",
            category.name,
            category.skills().collect::<Vec<_>>().join(", ")
        );
    }
    let extractor = Extractor::new(engine, Arc::new(HeaderTable::default()), Arc::new(taxonomy));
    info!(
        "Extractor initialized (engine: {}, {} skill categories)",
        extractor.engine_name(),
        categories
    );
    Some(extractor)
}

async fn build_face_embedder(config: &Config) -> Option<Arc<dyn FaceEmbedder>> {
    let url = config.face_service_url.as_deref()?;
    match RemoteFaceEmbedder::connect(url).await {
        Ok(embedder) => {
            info!("Face embedder initialized ({})", embedder.name());
            Some(Arc::new(embedder))
        }
        Err(e) => {
            warn!("Face service unavailable, /verify-face will answer 503: {e}");
            None
        }
    }
}
