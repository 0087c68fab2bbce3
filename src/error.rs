use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

/// Faults raised while starting the service or building the datastore client.
#[derive(Debug, ThisError)]
pub enum PulseError {
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("unsupported URL scheme `{0}`; expected http or https")]
    UnsupportedScheme(String),

    #[error("access key is not a valid header value")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no route for {0}")]
    NotFound(String),
}

impl From<figment::Error> for PulseError {
    fn from(e: figment::Error) -> Self {
        PulseError::Config(Box::new(e))
    }
}

impl IntoResponse for PulseError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PulseError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("No route for {path}."),
                },
            ),
            other => {
                tracing::error!(error = %other, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Why a single probe failed. The `Display` output is the verdict text.
#[derive(Debug, ThisError)]
pub enum ProbeError {
    /// No client exists; carries the fault retained at startup.
    #[error("{0}")]
    NotConfigured(String),

    /// The datastore answered, but rejected the request.
    #[error("Query error: {message}")]
    Query { status: StatusCode, message: String },

    /// The datastore could not be reached, or answered with something unusable.
    #[error("Transport or unexpected error: {kind}: {message}")]
    Transport {
        kind: TransportKind,
        message: String,
    },
}

impl ProbeError {
    /// HTTP status of a rejected query, if the datastore answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProbeError::Query { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ProbeError::Transport {
            kind: TransportKind::MalformedResponse,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        ProbeError::Transport {
            kind: TransportKind::classify(&e),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::malformed(e.to_string())
    }
}

impl From<url::ParseError> for ProbeError {
    fn from(e: url::ParseError) -> Self {
        ProbeError::Transport {
            kind: TransportKind::Request,
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Request,
    Decode,
    MalformedResponse,
    Other,
}

impl TransportKind {
    pub fn classify(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportKind::Timeout
        } else if e.is_connect() {
            TransportKind::Connect
        } else if e.is_decode() || e.is_body() {
            TransportKind::Decode
        } else if e.is_request() || e.is_builder() || e.is_redirect() {
            TransportKind::Request
        } else {
            TransportKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Timeout => "Timeout",
            TransportKind::Connect => "ConnectError",
            TransportKind::Request => "RequestError",
            TransportKind::Decode => "DecodeError",
            TransportKind::MalformedResponse => "MalformedResponse",
            TransportKind::Other => "UnexpectedError",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
