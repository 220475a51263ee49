//! Middleware that records every exchange into the [`TraceStore`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::trace::entry::{TraceEntry, TracedRequest, TracedResponse};
use crate::trace::store::TraceStore;

pub async fn record_exchange(
    State(store): State<Arc<TraceStore>>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let traced_request = TracedRequest {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        path: request.uri().path().to_string(),
        remote_address: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string()),
        headers: store.capture_headers(request.headers()),
    };

    let response = next.run(request).await;

    let entry = TraceEntry {
        timestamp_ms,
        request: traced_request,
        response: TracedResponse {
            status: response.status().as_u16(),
            headers: store.capture_headers(response.headers()),
        },
        time_taken_ms: start_time.elapsed().as_millis() as u64,
    };

    tracing::trace!(
        method = %entry.request.method,
        path = %entry.request.path,
        status = entry.response.status,
        "Exchange recorded"
    );
    store.record(entry);

    response
}
