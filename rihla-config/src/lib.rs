//! Typed settings for services embedding the Rihla ledger engine.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level settings, loaded from an optional TOML file with
/// `RIHLA_*` environment overrides (`RIHLA_API__BASE_URL` and friends).
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub rollup: RollupSettings,
    /// Legal name the agency books its own rows under; the affiliate
    /// ledger splits counterparties against this value.
    #[serde(default)]
    pub agency_name: String,
}

/// Back-office API connection settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Tuning for the pending-payments roll-up.
#[derive(Clone, Debug, Deserialize)]
pub struct RollupSettings {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_settle_epsilon")]
    pub settle_epsilon: Decimal,
}

impl Default for RollupSettings {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            settle_epsilon: default_settle_epsilon(),
        }
    }
}

fn default_concurrency() -> usize {
    8
}

fn default_settle_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

impl Settings {
    /// Load settings from a TOML file plus environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("RIHLA").separator("__"))
            .build()
            .with_context(|| format!("loading settings from {}", path.display()))?;
        config.try_deserialize().context("deserializing settings")
    }

    /// Load settings from environment variables only.
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RIHLA").separator("__"))
            .build()
            .context("loading settings from environment")?;
        config.try_deserialize().context("deserializing settings")
    }

    /// Parse settings from an in-memory TOML document.
    pub fn from_toml(document: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()
            .context("parsing settings document")?;
        config.try_deserialize().context("deserializing settings")
    }
}
