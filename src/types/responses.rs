use serde::{Deserialize, Serialize};

use super::verdict::ConnectivityVerdict;

pub const API_RUNNING: &str = "API Running";
pub const STATUS_HELP: &str = "Use /lookup?id=<id>&product=<product> for the dynamic endpoint.";
pub const PLACEHOLDER_ERROR: &str = "This is a placeholder for your main test logic.";
pub const PROCESSED: &str = "processed";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub database_connection: ConnectivityVerdict,
    pub message: String,
}

impl StatusResponse {
    pub fn new(database_connection: ConnectivityVerdict) -> Self {
        Self {
            status: API_RUNNING.to_string(),
            database_connection,
            message: STATUS_HELP.to_string(),
        }
    }
}

/// Body of `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderResponse {
    pub error: String,
}

impl Default for PlaceholderResponse {
    fn default() -> Self {
        Self {
            error: PLACEHOLDER_ERROR.to_string(),
        }
    }
}

/// Body of `GET /lookup`, for both the complete and incomplete case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub status: String,
    pub requested_id: String,
    pub requested_product: String,
    pub detail: String,
}
