use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::trace::{TraceEntry, TraceStore};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TraceHistory {
    pub traces: Vec<TraceEntry>,
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP".to_string(),
    })
}

pub async fn get_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Recorded exchanges, oldest first.
pub async fn get_httptrace(State(store): State<Arc<TraceStore>>) -> Json<TraceHistory> {
    Json(TraceHistory {
        traces: store.snapshot(),
    })
}
