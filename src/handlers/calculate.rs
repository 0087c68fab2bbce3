use axum::Json;

use crate::types::PlaceholderResponse;

/// POST /calculate -> fixed placeholder; the request body is never read.
pub async fn calculate_handler() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::default())
}
