//! Law Agent guidance server.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use law_agent::adapters::clock::SystemClock;
use law_agent::adapters::content::load_registry_from_path;
use law_agent::adapters::http::{guidance_router, GuidanceAppState};
use law_agent::adapters::law_agent_api::{HttpClientConfig, HttpLawAgentClient};
use law_agent::application::ConsultationDefaults;
use law_agent::config::{AppConfig, ServerConfig};
use law_agent::domain::guidance::{
    builtin_registry, FlowLayoutEngine, GuidanceRegistry, GuidanceSynthesizer, StageProgressClock,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate()?;
    let addr = config.server.socket_addr()?;

    let registry = load_registry(&config).await?;
    let missing = registry.missing_domains(&["rent_dispute", "family_law", "employment_law"]);
    if !missing.is_empty() {
        tracing::warn!(?missing, "Classifier domains without authored guidance");
    }

    let guidance = &config.guidance;
    let synthesizer = Arc::new(GuidanceSynthesizer::new(
        Arc::new(registry),
        FlowLayoutEngine::new(
            guidance.layout_base_x,
            guidance.layout_spacing,
            guidance.layout_y,
            guidance.layout_z,
        ),
    ));

    let api = &config.law_agent_api;
    let client = Arc::new(HttpLawAgentClient::new(
        HttpClientConfig::new(api.base_url.as_str()).with_timeout(api.timeout()),
    )?);

    let state = GuidanceAppState {
        synthesizer,
        progress_clock: StageProgressClock::new(Arc::new(SystemClock::new()), guidance.stage_period()),
        classifier: client.clone(),
        feedback_client: client,
        consultation_defaults: ConsultationDefaults::from(api),
        verbose_errors: config.features.verbose_errors,
    };

    let mut app: Router = guidance_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server));
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, law_agent_api = %api.base_url, "Law Agent guidance server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

async fn load_registry(config: &AppConfig) -> Result<GuidanceRegistry, BoxError> {
    match &config.guidance.content_path {
        Some(path) => Ok(load_registry_from_path(path).await?),
        None => {
            tracing::info!("No guidance content path configured; using built-in content");
            Ok(builtin_registry()?)
        }
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
