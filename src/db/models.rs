use serde::Deserialize;
use serde_json::{Map, Value};

/// One row of a `select` result, keyed by column name.
pub type Row = Map<String, Value>;

/// Error payload returned by the REST layer (and its API gateway) on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct PostgrestErrorBody {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub hint: Option<Value>,
}

impl PostgrestErrorBody {
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Render a column value for display; strings are shown without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
