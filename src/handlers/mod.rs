pub mod calculate;
pub mod lookup;
pub mod status;

use axum::http::Uri;

use crate::error::PulseError;

/// Fallback for unknown paths.
pub async fn not_found_handler(uri: Uri) -> PulseError {
    PulseError::NotFound(uri.path().to_string())
}
