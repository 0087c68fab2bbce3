use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Fault retained when the datastore credentials are absent at startup.
pub const MISSING_CREDENTIALS_FAULT: &str = "Fatal: required connectivity credentials are missing.";

/// Table and column read by the connectivity probe.
pub const HEALTH_CHECK_TABLE: &str = "health_check";
pub const HEALTH_CHECK_COLUMN: &str = "status";

/// REST prefix appended to the datastore endpoint.
pub const REST_PATH: &str = "rest/v1/";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOGLEVEL: &str = "info";
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_key: Option<String>,
    pub listen_addr: String,
    pub loglevel: String,
    pub probe_timeout_secs: u64,
    pub proxy: Option<Url>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_key: None,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            loglevel: DEFAULT_LOGLEVEL.to_string(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

/// Endpoint/key pair, present only when both halves are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub key: String,
}

impl Config {
    /// Layered sources: defaults, the parsed environment for typed settings,
    /// then the string settings taken verbatim (legacy `SUPABASE_*` names
    /// first, so the canonical names win).
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["PROBE_TIMEOUT_SECS", "PROXY"]))
            .merge(verbatim_env())
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn credentials(&self) -> Option<Credentials> {
        let url = non_empty(self.database_url.as_deref())?;
        let key = non_empty(self.database_key.as_deref())?;
        Some(Credentials {
            url: url.to_string(),
            key: key.to_string(),
        })
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.max(1))
    }
}

/// Field name and the variables it is read from, lowest priority first.
const VERBATIM_VARS: &[(&str, &[&str])] = &[
    ("database_url", &["SUPABASE_URL", "DATABASE_URL"]),
    ("database_key", &["SUPABASE_KEY", "DATABASE_KEY"]),
    ("listen_addr", &["LISTEN_ADDR"]),
    ("loglevel", &["LOGLEVEL"]),
];

/// `Env` parses values (`12345` becomes a number, `[x]` a sequence); these
/// settings are opaque strings, so they bypass that parsing.
fn verbatim_env() -> Figment {
    VERBATIM_VARS
        .iter()
        .flat_map(|(field, vars)| vars.iter().map(move |var| (*field, *var)))
        .filter_map(|(field, var)| std::env::var(var).ok().map(|value| (field, value)))
        .fold(Figment::new(), |fig, (field, value)| {
            fig.merge(Serialized::default(field, value))
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
            assert_eq!(cfg.loglevel, DEFAULT_LOGLEVEL);
            assert_eq!(cfg.probe_timeout(), Duration::from_secs(5));
            assert!(cfg.credentials().is_none());
            Ok(())
        });
    }

    #[test]
    fn reads_canonical_credentials() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "https://project.example.co");
            jail.set_env("DATABASE_KEY", "anon-key");
            jail.set_env("PROBE_TIMEOUT_SECS", "2");

            let cfg = Config::load()?;
            assert_eq!(
                cfg.credentials(),
                Some(Credentials {
                    url: "https://project.example.co".to_string(),
                    key: "anon-key".to_string(),
                })
            );
            assert_eq!(cfg.probe_timeout(), Duration::from_secs(2));
            Ok(())
        });
    }

    #[test]
    fn legacy_names_are_a_fallback() {
        Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://legacy.example.co");
            jail.set_env("SUPABASE_KEY", "legacy-key");
            jail.set_env("DATABASE_KEY", "new-key");

            let creds = Config::load()?.credentials().expect("credentials present");
            assert_eq!(creds.url, "https://legacy.example.co");
            assert_eq!(creds.key, "new-key");
            Ok(())
        });
    }

    #[test]
    fn blank_values_count_as_missing() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "https://project.example.co");
            jail.set_env("DATABASE_KEY", "   ");

            assert!(Config::load()?.credentials().is_none());
            Ok(())
        });
    }

    #[test]
    fn scalar_looking_credentials_stay_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "https://project.example.co");
            jail.set_env("DATABASE_KEY", "12345");

            let creds = Config::load()?.credentials().expect("credentials present");
            assert_eq!(creds.key, "12345");

            jail.set_env("DATABASE_KEY", "[abc]");
            jail.set_env("SUPABASE_URL", "true");
            jail.set_env("DATABASE_URL", "8080");
            jail.set_env("LISTEN_ADDR", "127.0.0.1:9000");

            let cfg = Config::load()?;
            let creds = cfg.credentials().expect("credentials present");
            assert_eq!(creds.key, "[abc]");
            assert_eq!(creds.url, "8080");
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let cfg = Config {
            probe_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(cfg.probe_timeout(), Duration::from_secs(1));
    }
}
