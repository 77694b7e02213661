// =============================================================================
// Runtime Configuration - Service settings with serde defaults
// =============================================================================
//
// Every tunable of the signal service lives here. Loaded once at startup from
// a JSON file; missing fields fall back to their defaults so that a partial
// (or empty) file is always valid. Environment variables are applied on top.
//
// =============================================================================

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::signals::store::DEFAULT_STORE_CAPACITY;
use crate::sources::price::default_base_prices;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbols() -> Vec<String> {
    vec!["EUR/USD".to_string(), "GBP/USD".to_string()]
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_store_capacity() -> usize {
    DEFAULT_STORE_CAPACITY
}

fn default_latest_limit() -> usize {
    20
}

// =============================================================================
// RuntimeConfig
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Symbols evaluated on every generate request, in tie-break order.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Base prices for the synthetic feed. Unknown symbols quote around 1.0.
    #[serde(default = "default_base_prices")]
    pub base_prices: HashMap<String, f64>,

    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Number of signals kept in memory.
    #[serde(default = "default_store_capacity")]
    pub store_capacity: usize,

    /// `limit` used by `GET /signals/latest` when the query omits it.
    #[serde(default = "default_latest_limit")]
    pub latest_default_limit: usize,

    /// Fixed RNG seed. `None` seeds from the OS.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            base_prices: default_base_prices(),
            bind_addr: default_bind_addr(),
            store_capacity: default_store_capacity(),
            latest_default_limit: default_latest_limit(),
            rng_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Apply process environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// - `ORACLE_SYMBOLS`: comma-separated symbol list
    /// - `ORACLE_BIND_ADDR`: full bind address
    /// - `PORT`: replaces only the port of the bind address
    /// - `ORACLE_RNG_SEED`: fixed RNG seed
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(syms) = lookup("ORACLE_SYMBOLS") {
            self.symbols = syms
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if self.symbols.is_empty() {
            warn!("empty symbol list, falling back to defaults");
            self.symbols = default_symbols();
        }

        if let Some(addr) = lookup("ORACLE_BIND_ADDR") {
            self.bind_addr = addr;
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => {
                    let host = self
                        .bind_addr
                        .rsplit_once(':')
                        .map(|(host, _)| host.to_string())
                        .unwrap_or_else(|| self.bind_addr.clone());
                    self.bind_addr = format!("{host}:{port}");
                }
                Err(e) => warn!(port = %port, error = %e, "ignoring invalid PORT"),
            }
        }

        if let Some(seed) = lookup("ORACLE_RNG_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.rng_seed = Some(seed),
                Err(e) => warn!(seed = %seed, error = %e, "ignoring invalid ORACLE_RNG_SEED"),
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.symbols, vec!["EUR/USD", "GBP/USD"]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000");
        assert_eq!(cfg.store_capacity, 200);
        assert_eq!(cfg.latest_default_limit, 20);
        assert!(cfg.rng_seed.is_none());
        assert!((cfg.base_prices["EUR/USD"] - 1.1).abs() < f64::EPSILON);
        assert!((cfg.base_prices["GBP/USD"] - 1.26).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.symbols.len(), 2);
        assert_eq!(cfg.store_capacity, 200);
        assert_eq!(cfg.base_prices.len(), 2);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "symbols": ["USD/JPY"], "rng_seed": 9 }"#;
        let cfg: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.symbols, vec!["USD/JPY"]);
        assert_eq!(cfg.rng_seed, Some(9));
        assert_eq!(cfg.latest_default_limit, 20);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "bind_addr": "127.0.0.1:9000", "store_capacity": 10 }}"#).unwrap();
        let cfg = RuntimeConfig::load(file.path()).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.store_capacity, 10);
        assert_eq!(cfg.symbols.len(), 2);
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RuntimeConfig::load(dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn load_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(RuntimeConfig::load(file.path()).is_err());
    }

    #[test]
    fn symbols_override_is_trimmed_and_uppercased() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("ORACLE_SYMBOLS", " eur/usd , ,usd/chf")]));
        assert_eq!(cfg.symbols, vec!["EUR/USD", "USD/CHF"]);
    }

    #[test]
    fn empty_symbols_fall_back_to_defaults() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("ORACLE_SYMBOLS", " , ")]));
        assert_eq!(cfg.symbols, vec!["EUR/USD", "GBP/USD"]);
    }

    #[test]
    fn port_replaces_only_the_port() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("PORT", "8080")]));
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");

        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("ORACLE_BIND_ADDR", "127.0.0.1:3000"), ("PORT", "4000")]));
        assert_eq!(cfg.bind_addr, "127.0.0.1:4000");
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("PORT", "http"), ("ORACLE_RNG_SEED", "-1")]));
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000");
        assert!(cfg.rng_seed.is_none());
    }

    #[test]
    fn seed_override() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_overrides(lookup(&[("ORACLE_RNG_SEED", "1234")]));
        assert_eq!(cfg.rng_seed, Some(1234));
    }
}
