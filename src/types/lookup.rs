/// Placeholder for a query parameter that was not supplied.
pub const SENTINEL: &str = "N/A";

/// The `id`/`product` pair read from a lookup query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: String,
    pub product: String,
}

impl LookupRequest {
    /// Parse a raw query string. Absent or empty values fall back to [`SENTINEL`];
    /// when a key repeats, the first occurrence wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut id = None;
        let mut product = None;

        if let Some(qs) = query {
            for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
                if v.is_empty() {
                    continue;
                }
                match k.as_ref() {
                    "id" if id.is_none() => id = Some(v.into_owned()),
                    "product" if product.is_none() => product = Some(v.into_owned()),
                    _ => {}
                }
            }
        }

        Self {
            id: id.unwrap_or_else(|| SENTINEL.to_string()),
            product: product.unwrap_or_else(|| SENTINEL.to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.id != SENTINEL && self.product != SENTINEL
    }
}
