use anyhow::{Context, Result};
use serde::Deserialize;
use sol_helpers::config::{SolanaConfig, WalletDefaults};
use sol_helpers_logger::LogConfig;

/// Prefix for environment overrides, e.g. `SOL_HELPERS__SOLANA__CLUSTER=devnet`.
pub const ENV_PREFIX: &str = "SOL_HELPERS";

/// The top-level configuration for the `sol-helpers` binary.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct HelpersConfig {
    #[serde(default)]
    pub solana: SolanaConfig,
    #[serde(default)]
    pub wallet: WalletDefaults,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Loads the configuration from an optional TOML file, layered with environment overrides.
///
/// It uses the `config` crate to read the sources and deserialize them into
/// the `HelpersConfig` struct. Missing sections fall back to their defaults.
pub fn load_config(path: Option<&str>) -> Result<HelpersConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path));
    }
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

    let settings: HelpersConfig = builder
        .build()
        .context(match path {
            Some(path) => format!("Failed to build configuration from '{}'", path),
            None => "Failed to build configuration from the environment".to_string(),
        })?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    Ok(settings)
}
