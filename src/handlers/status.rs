use axum::{Json, extract::State, http::StatusCode};

use crate::router::PulseState;
use crate::types::StatusResponse;

/// GET / -> API status plus a fresh datastore connectivity verdict.
///
/// 200 when the probe reports connected, 500 otherwise.
pub async fn status_handler(State(state): State<PulseState>) -> (StatusCode, Json<StatusResponse>) {
    let verdict = state.prober.probe().await;
    let code = if verdict.is_connected {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (code, Json(StatusResponse::new(verdict)))
}
