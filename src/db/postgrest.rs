use crate::config::{Credentials, REST_PATH};
use crate::db::models::{PostgrestErrorBody, Row};
use crate::error::{ProbeError, PulseError};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;
use url::Url;

const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only handle on the datastore's REST layer, bound to one endpoint and key.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_url: Url,
}

impl PostgrestClient {
    /// Build a client for the given credentials.
    ///
    /// Fails when the endpoint is not an absolute http(s) URL, when the key
    /// cannot be carried in a header, or when the HTTP client cannot be built.
    pub fn new(
        creds: &Credentials,
        timeout: Duration,
        proxy: Option<&Url>,
    ) -> Result<Self, PulseError> {
        let rest_url = rest_base(&creds.url)?;

        let mut apikey = HeaderValue::from_str(&creds.key)?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", creds.key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("dbpulse/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .timeout(timeout)
            .default_headers(headers);
        if let Some(proxy_url) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }
        let http = builder.build()?;

        Ok(Self { http, rest_url })
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// `GET <rest>/<table>?select=<column>&limit=1`.
    ///
    /// Returns at most one row. Non-2xx answers become [`ProbeError::Query`];
    /// everything else that goes wrong is a [`ProbeError::Transport`].
    pub async fn select_one(&self, table: &str, column: &str) -> Result<Vec<Row>, ProbeError> {
        let url = self.rest_url.join(table)?;
        debug!(%url, column, "issuing read query");

        let resp = self
            .http
            .get(url)
            .query(&[("select", column), ("limit", "1")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // An unreadable error body still means the datastore answered.
            let body = resp.bytes().await.unwrap_or_default();
            let error = PostgrestErrorBody::from_slice(&body);
            debug!(
                %status,
                code = ?error.code,
                details = ?error.details,
                hint = ?error.hint,
                "datastore rejected read query"
            );
            let message = error
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(ProbeError::Query { status, message });
        }

        let body = resp.bytes().await?;
        let rows: Vec<Row> = serde_json::from_slice(&body)?;
        Ok(rows)
    }
}

/// Normalise the configured endpoint into the REST base URL (always ending in `/`).
fn rest_base(endpoint: &str) -> Result<Url, PulseError> {
    let mut base = Url::parse(endpoint.trim())?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(PulseError::UnsupportedScheme(base.scheme().to_string()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);
    Ok(base.join(REST_PATH)?)
}
