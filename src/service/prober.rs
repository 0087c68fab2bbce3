use crate::config::{Config, HEALTH_CHECK_COLUMN, HEALTH_CHECK_TABLE, MISSING_CREDENTIALS_FAULT};
use crate::db::models::display_value;
use crate::db::{PostgrestClient, Row};
use crate::error::ProbeError;
use crate::types::verdict::ConnectivityVerdict;
use tracing::{debug, error, info, warn};

/// What a successful read tells us about the health table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// First row's `status` value, rendered for display.
    Row(String),
    Empty,
}

impl ProbeOutcome {
    fn details(&self) -> String {
        match self {
            ProbeOutcome::Row(value) => {
                format!("Connection successful. Data retrieved: {value}")
            }
            ProbeOutcome::Empty => {
                "Connection successful. Table is reachable but empty.".to_string()
            }
        }
    }
}

/// Answers "can this process reach the datastore with valid credentials?".
///
/// Holds either a ready client or the fault retained when the client could
/// not be built. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ConnectivityProber {
    client: Result<PostgrestClient, String>,
}

impl ConnectivityProber {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client: Ok(client) }
    }

    /// A prober that reports `fault` on every call without touching the network.
    pub fn unavailable(fault: impl Into<String>) -> Self {
        Self {
            client: Err(fault.into()),
        }
    }

    /// Resolve credentials and build the client once; faults are kept, not raised.
    pub fn from_config(cfg: &Config) -> Self {
        let Some(creds) = cfg.credentials() else {
            warn!("DATABASE_URL or DATABASE_KEY missing; status endpoint will report disconnected");
            return Self::unavailable(MISSING_CREDENTIALS_FAULT);
        };

        match PostgrestClient::new(&creds, cfg.probe_timeout(), cfg.proxy.as_ref()) {
            Ok(client) => {
                info!(rest_url = %client.rest_url(), "datastore client initialized");
                Self::new(client)
            }
            Err(e) => {
                error!(error = %e, "datastore client initialization failed");
                Self::unavailable(format!("Client initialization failed: {e}"))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_ok()
    }

    /// One bounded read against the health table, folded into a verdict.
    /// Never fails; every error path ends up in `details`.
    pub async fn probe(&self) -> ConnectivityVerdict {
        match self.check().await {
            Ok(outcome) => {
                debug!(?outcome, "datastore probe succeeded");
                ConnectivityVerdict::connected(outcome.details())
            }
            Err(e) => {
                warn!(error = %e, status = ?e.status(), "datastore probe failed");
                ConnectivityVerdict::disconnected(e.to_string())
            }
        }
    }

    async fn check(&self) -> Result<ProbeOutcome, ProbeError> {
        let client = match &self.client {
            Ok(client) => client,
            Err(fault) => return Err(ProbeError::NotConfigured(fault.clone())),
        };
        let rows = client
            .select_one(HEALTH_CHECK_TABLE, HEALTH_CHECK_COLUMN)
            .await?;
        outcome_from_rows(&rows)
    }
}

fn outcome_from_rows(rows: &[Row]) -> Result<ProbeOutcome, ProbeError> {
    let Some(row) = rows.first() else {
        return Ok(ProbeOutcome::Empty);
    };
    let value = row.get(HEALTH_CHECK_COLUMN).ok_or_else(|| {
        ProbeError::malformed(format!("row is missing column `{HEALTH_CHECK_COLUMN}`"))
    })?;
    Ok(ProbeOutcome::Row(display_value(value)))
}
