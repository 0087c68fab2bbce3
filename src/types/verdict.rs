use serde::{Deserialize, Serialize};

/// Outcome of one connectivity probe. Built fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityVerdict {
    pub is_connected: bool,
    pub details: String,
}

impl ConnectivityVerdict {
    pub fn connected(details: impl Into<String>) -> Self {
        Self {
            is_connected: true,
            details: details.into(),
        }
    }

    pub fn disconnected(details: impl Into<String>) -> Self {
        Self {
            is_connected: false,
            details: details.into(),
        }
    }
}
