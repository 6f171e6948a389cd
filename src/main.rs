//! Feedback forms HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feedback_forms::adapters::http::{build_app, FormsAppState};
use feedback_forms::adapters::{
    FileKeyValueStore, FormStore, GeminiProvider, InMemoryKeyValueStore, UuidIdGenerator,
};
use feedback_forms::application::FeedbackGateway;
use feedback_forms::config::{AppConfig, StorageBackend};
use feedback_forms::ports::KeyValueStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let backend: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let gateway = match config.ai.gemini() {
        Some(gemini) => {
            tracing::info!(model = %gemini.model, "AI provider configured");
            FeedbackGateway::new(Arc::new(GeminiProvider::new(gemini)?))
        }
        None => {
            tracing::warn!("No Gemini API key; AI endpoints are disabled");
            FeedbackGateway::unconfigured()
        }
    };

    let state = FormsAppState {
        repository: Arc::new(FormStore::new(backend)),
        ids: Arc::new(UuidIdGenerator),
        gateway,
        public_base_url: config.server.public_base_url.clone(),
    };
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "feedback-forms listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutting down");
}
