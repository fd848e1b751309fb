//! Application state for the DeckCraft API

use std::time::Instant;

use deckcraft_pdf::PdfProcessor;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::vespa::VespaClient;

pub struct AppState {
    pub config: Config,
    pub started: Instant,
    pub processor: PdfProcessor,
    /// Connected at startup; no queries are issued against it yet.
    pub db: Option<SqlitePool>,
    pub vespa: VespaClient,
}

impl AppState {
    /// Full startup path: connect the pool (best effort outside
    /// production) and wire the Vespa client.
    pub async fn initialize(config: Config) -> anyhow::Result<Self> {
        let mut state = Self::without_database(config);

        tracing::info!("Connecting to database: {}", state.config.database_url);
        match SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&state.config.database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("Database connected");
                state.db = Some(pool);
            }
            Err(e) if state.config.environment.is_production() => {
                return Err(anyhow::anyhow!("database connection failed: {}", e));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Database unavailable, continuing without it");
            }
        }

        if state.vespa.ping().await {
            tracing::info!("Vespa reachable at {}", state.config.vespa_endpoint);
        } else {
            tracing::warn!(
                "Vespa unreachable at {}, running without vector search",
                state.config.vespa_endpoint
            );
        }

        Ok(state)
    }

    /// State with no database pool. Used by tests and as the base for
    /// `initialize`.
    pub fn without_database(config: Config) -> Self {
        let processor = PdfProcessor::new(config.max_upload_bytes);
        let vespa = VespaClient::new(config.vespa_endpoint.clone(), config.vespa_timeout_ms);
        Self {
            config,
            started: Instant::now(),
            processor,
            db: None,
            vespa,
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
