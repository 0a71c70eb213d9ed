//! Client configuration.
//!
//! In the browser the page may embed
//! `<script type="application/json" id="repodash-config">{...}</script>`;
//! on the host the same settings come from `REPODASH_*` environment
//! variables. Every field has a default, so an absent source is not an error.

use serde::Deserialize;

/// Id of the `<script>` element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "repodash-config";

/// What happens when a form is submitted while its previous submission is
/// still in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoubleSubmitPolicy {
    /// Drop the new submission
    #[default]
    Ignore,
    /// Send an overlapping request.
    ///
    /// Overlapping requests share one spinner and one banner slot: the
    /// spinner stays until the last request settles, and each failure
    /// replaces the banner of the one before it, so only the most recent
    /// error is visible.
    Allow,
}

impl std::str::FromStr for DoubleSubmitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "allow" => Ok(Self::Allow),
            other => Err(format!("unknown double-submit policy: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub double_submit: DoubleSubmitPolicy,
    /// Disable submit buttons while a request is in flight
    pub disable_submit_controls: bool,
    /// No timeout when unset; the transport default applies
    pub request_timeout_ms: Option<u32>,
    /// Duration of the list-item fade after an inline delete
    pub fade_out_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            double_submit: DoubleSubmitPolicy::default(),
            disable_submit_controls: true,
            request_timeout_ms: None,
            fade_out_ms: 400,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse `json`, falling back to defaults (with a warning) when it is
    /// malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid client configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Read `REPODASH_*` variables, loading a `.env` file first when present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let double_submit = lookup("REPODASH_DOUBLE_SUBMIT")
            .and_then(|v| match v.parse() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!("{e}; keeping default");
                    None
                }
            })
            .unwrap_or(defaults.double_submit);

        let disable_submit_controls = lookup("REPODASH_DISABLE_SUBMIT_CONTROLS")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.disable_submit_controls);

        let request_timeout_ms = lookup("REPODASH_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .or(defaults.request_timeout_ms);

        let fade_out_ms = lookup("REPODASH_FADE_OUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.fade_out_ms);

        Self {
            double_submit,
            disable_submit_controls,
            request_timeout_ms,
            fade_out_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ClientConfig::from_json("{}").expect("valid json");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.double_submit, DoubleSubmitPolicy::Ignore);
        assert!(config.disable_submit_controls);
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn json_overrides_individual_fields() {
        let config = ClientConfig::from_json(
            r#"{"double_submit": "allow", "request_timeout_ms": 5000}"#,
        )
        .expect("valid json");
        assert_eq!(config.double_submit, DoubleSubmitPolicy::Allow);
        assert_eq!(config.request_timeout_ms, Some(5000));
        assert_eq!(config.fade_out_ms, 400);
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let config = ClientConfig::from_json_or_default("{not json");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn lookup_reads_every_variable() {
        let vars: HashMap<&str, &str> = [
            ("REPODASH_DOUBLE_SUBMIT", "Allow"),
            ("REPODASH_DISABLE_SUBMIT_CONTROLS", "false"),
            ("REPODASH_REQUEST_TIMEOUT_MS", "2500"),
            ("REPODASH_FADE_OUT_MS", "100"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(
            config,
            ClientConfig {
                double_submit: DoubleSubmitPolicy::Allow,
                disable_submit_controls: false,
                request_timeout_ms: Some(2500),
                fade_out_ms: 100,
            }
        );
    }

    #[test]
    fn unknown_policy_keeps_default() {
        let config = ClientConfig::from_lookup(|k| {
            (k == "REPODASH_DOUBLE_SUBMIT").then(|| "sometimes".to_string())
        });
        assert_eq!(config.double_submit, DoubleSubmitPolicy::Ignore);
    }
}
