//! Partner client configuration.
//!
//! This module loads the partner credentials and endpoint settings from
//! environment variables. It uses the `envy` crate to deserialize
//! `POKEPAY_`-prefixed variables into a type-safe struct.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "POKEPAY_";

/// Partner configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `POKEPAY_CLIENT_ID` (required): partner client id
/// - `POKEPAY_CLIENT_SECRET` (required): key the dispatcher seals payloads with
/// - `POKEPAY_API_BASE_URL` (required): e.g. `https://partnerapi-sandbox.pokepay.jp`
/// - `POKEPAY_TIMEZONE` (optional): IANA zone for call timestamps, defaults to `Asia/Tokyo`
/// - `POKEPAY_TIMEOUT` (optional): read timeout in seconds, defaults to 5
/// - `POKEPAY_CONNECT_TIMEOUT` (optional): connect timeout in seconds, defaults to 5
/// - `POKEPAY_SSL_KEY_FILE`, `POKEPAY_SSL_CERT_FILE` (optional): client certificate pair
#[derive(Clone, Deserialize)]
pub struct Config {
    pub client_id: String,

    pub client_secret: String,

    pub api_base_url: Url,

    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    #[serde(default = "default_timeout_secs", deserialize_with = "timeout_secs")]
    pub timeout: f64,

    #[serde(default = "default_timeout_secs", deserialize_with = "timeout_secs")]
    pub connect_timeout: f64,

    #[serde(default)]
    pub ssl_key_file: Option<PathBuf>,

    #[serde(default)]
    pub ssl_cert_file: Option<PathBuf>,
}

fn default_timezone() -> Tz {
    chrono_tz::Asia::Tokyo
}

fn default_timeout_secs() -> f64 {
    5.0
}

/// Timeouts must be finite and non-negative to convert into a `Duration`.
fn timeout_secs<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "timeout must be a finite number of seconds >= 0, got {secs}"
        )));
    }
    Ok(secs)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Attempts to load a `.env` file first (which is optional), then reads
    /// the `POKEPAY_` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., POKEPAY_CLIENT_ID)
    /// - Values cannot be parsed (bad URL, unknown timezone, non-numeric timeout)
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::prefixed(ENV_PREFIX).from_env::<Config>()
    }

    /// Load configuration from explicit `(name, value)` pairs.
    ///
    /// Names carry the `POKEPAY_` prefix, exactly as they would in the
    /// environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.connect_timeout)
    }

    /// Whether calls go over TLS; the client certificate pair only applies then.
    pub fn uses_tls(&self) -> bool {
        self.api_base_url.scheme() == "https"
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("timezone", &self.timezone)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("ssl_key_file", &self.ssl_key_file)
            .field("ssl_cert_file", &self.ssl_cert_file)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = Config::from_vars(vars(&[
            ("POKEPAY_CLIENT_ID", "client-1"),
            ("POKEPAY_CLIENT_SECRET", "secret"),
            ("POKEPAY_API_BASE_URL", "https://partnerapi-sandbox.pokepay.jp"),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.timezone, chrono_tz::Asia::Tokyo);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert!(config.ssl_key_file.is_none());
        assert!(config.uses_tls());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("POKEPAY_CLIENT_ID", "client-1"),
            ("POKEPAY_CLIENT_SECRET", "secret"),
            ("POKEPAY_API_BASE_URL", "http://localhost:8080"),
            ("POKEPAY_TIMEZONE", "UTC"),
            ("POKEPAY_TIMEOUT", "2.5"),
            ("POKEPAY_CONNECT_TIMEOUT", "1"),
            ("POKEPAY_SSL_CERT_FILE", "/etc/pokepay/cert.pem"),
        ]))
        .unwrap();

        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(config.connect_timeout(), Duration::from_secs(1));
        assert_eq!(
            config.ssl_cert_file,
            Some(PathBuf::from("/etc/pokepay/cert.pem"))
        );
        assert!(!config.uses_tls());
    }

    #[test]
    fn missing_client_id_is_rejected() {
        let result = Config::from_vars(vars(&[
            ("POKEPAY_CLIENT_SECRET", "secret"),
            ("POKEPAY_API_BASE_URL", "https://partnerapi.pokepay.jp"),
        ]));

        assert!(result.is_err());
    }

    fn with_timeout(name: &str, value: &str) -> Result<Config, envy::Error> {
        Config::from_vars(vars(&[
            ("POKEPAY_CLIENT_ID", "client-1"),
            ("POKEPAY_CLIENT_SECRET", "secret"),
            ("POKEPAY_API_BASE_URL", "https://partnerapi.pokepay.jp"),
            (name, value),
        ]))
    }

    #[test]
    fn negative_timeouts_are_rejected() {
        assert!(with_timeout("POKEPAY_TIMEOUT", "-1").is_err());
        assert!(with_timeout("POKEPAY_CONNECT_TIMEOUT", "-0.5").is_err());
    }

    #[test]
    fn non_finite_timeouts_are_rejected() {
        assert!(with_timeout("POKEPAY_TIMEOUT", "NaN").is_err());
        assert!(with_timeout("POKEPAY_TIMEOUT", "inf").is_err());
        assert!(with_timeout("POKEPAY_CONNECT_TIMEOUT", "NaN").is_err());
    }

    #[test]
    fn zero_timeout_is_accepted() {
        let config = with_timeout("POKEPAY_TIMEOUT", "0").unwrap();

        assert_eq!(config.timeout(), Duration::ZERO);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = Config::from_vars(vars(&[
            ("POKEPAY_CLIENT_ID", "client-1"),
            ("POKEPAY_CLIENT_SECRET", "very-secret-value"),
            ("POKEPAY_API_BASE_URL", "https://partnerapi.pokepay.jp"),
        ]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("very-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
