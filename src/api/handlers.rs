use axum::{
    extract::State,
    http::HeaderMap,
    routing::get,
    Router,
};

use crate::api::error::ApiError;
use crate::http::request::request_id;
use crate::http::server::AppState;

/// `GET /public`: fixed text, always 200.
pub async fn get_public(State(state): State<AppState>) -> String {
    state.greeting.load().public_message()
}

/// `GET /private`: echoes the credential header injected by the gateway.
pub async fn get_private(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, ApiError> {
    let greeting = state.greeting.load();

    match greeting.private_message(&headers) {
        Ok(body) => {
            tracing::debug!(
                request_id = %request_id(&headers),
                header = %greeting.header(),
                "Rendered private response"
            );
            Ok(body)
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id(&headers),
                error = %e,
                "Rejected private request"
            );
            Err(e)
        }
    }
}

/// Routes relative to the `/api` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public", get(get_public))
        .route("/private", get(get_private))
}
