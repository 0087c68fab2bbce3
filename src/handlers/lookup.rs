use axum::{Json, extract::RawQuery, http::StatusCode};
use tracing::debug;

use crate::types::responses::PROCESSED;
use crate::types::{LookupRequest, LookupResponse};

/// GET /lookup?id=..&product=.. -> echoes both values, or 400 if either is missing.
pub async fn lookup_handler(RawQuery(query): RawQuery) -> (StatusCode, Json<LookupResponse>) {
    let req = LookupRequest::from_query(query.as_deref());

    let (code, detail) = if req.is_complete() {
        (
            StatusCode::OK,
            format!(
                "Successfully processed request for ID: {} and Product: {}.",
                req.id, req.product
            ),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            "Missing required parameters (id and/or product).".to_string(),
        )
    };
    debug!(id = %req.id, product = %req.product, status = %code, "lookup handled");

    (
        code,
        Json(LookupResponse {
            status: PROCESSED.to_string(),
            requested_id: req.id,
            requested_product: req.product,
            detail,
        }),
    )
}
