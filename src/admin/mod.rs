//! Diagnostics routes under `/actuator`.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use self::handlers::*;
use crate::trace::TraceStore;

/// `/actuator/httptrace` is only mounted when a store is given.
pub fn setup_admin_router(traces: Option<Arc<TraceStore>>) -> Router {
    let router = Router::new()
        .route("/actuator/health", get(get_health))
        .route("/actuator/info", get(get_info));

    match traces {
        Some(store) => {
            let history: Router = Router::new()
                .route("/actuator/httptrace", get(get_httptrace))
                .with_state(store);
            router.merge(history)
        }
        None => router,
    }
}
