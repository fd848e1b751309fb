//! Liveness and subsystem health endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_secs: u64,
    pub environment: &'static str,
    pub service: &'static str,
}

/// Handler: GET /health
pub async fn basic(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: state.uptime_secs(),
        environment: state.config.environment.as_str(),
        service: "deckcraft-api",
    })
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: UptimeInfo,
    pub environment: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub subsystems: SubsystemStatus,
    pub features: FeatureFlags,
}

#[derive(Serialize)]
pub struct UptimeInfo {
    pub seconds: u64,
    pub human: String,
}

#[derive(Serialize)]
pub struct SubsystemStatus {
    /// "connected" when the pool exists and is open.
    pub database: &'static str,
    /// "reachable" when the Vespa application status page answers.
    pub vespa: &'static str,
    pub ocr: &'static str,
}

#[derive(Serialize)]
pub struct FeatureFlags {
    pub pdf_processing: &'static str,
    pub ocr: &'static str,
    pub batch_upload: &'static str,
    pub image_extraction: &'static str,
}

/// Handler: GET /health/detailed
pub async fn detailed(State(state): State<Arc<AppState>>) -> Json<DetailedHealthResponse> {
    let uptime = state.uptime_secs();

    let database = match &state.db {
        Some(pool) if !pool.is_closed() => "connected",
        Some(_) => "closed",
        None => "unavailable",
    };

    let vespa = if state.vespa.ping().await {
        "reachable"
    } else {
        "unreachable"
    };

    Json(DetailedHealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        uptime: UptimeInfo {
            seconds: uptime,
            human: format!("{}m {}s", uptime / 60, uptime % 60),
        },
        environment: state.config.environment.as_str(),
        service: "deckcraft-api",
        version: env!("CARGO_PKG_VERSION"),
        subsystems: SubsystemStatus {
            database,
            vespa,
            ocr: if state.processor.ocr().is_ready() {
                "stub"
            } else {
                "unavailable"
            },
        },
        features: FeatureFlags {
            pdf_processing: "enabled",
            ocr: "stub",
            batch_upload: "enabled",
            image_extraction: "disabled",
        },
    })
}
