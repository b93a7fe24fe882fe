#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::env_file::{DEFAULT_ENV_FILE, DEFAULT_ENV_VARIABLE};
use crate::explorer::Cluster;
use crate::Result;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

/// Defines the connection settings for the Solana cluster.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct SolanaConfig {
    /// `mainnet-beta`, `devnet`, `testnet`, `localnet` or a custom RPC URL.
    pub cluster: String,
    /// Overrides the cluster's default RPC endpoint when set.
    #[cfg_attr(feature = "serde", serde(alias = "rpc_url"))]
    pub rpc_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(with = "serde_commitment"))]
    pub commitment: CommitmentLevel,
}

/// The env file and variable a binary falls back to when a command names only one of
/// them, or neither.
///
/// Environment overrides arrive with snake_case keys (`SOL_HELPERS__WALLET__ENV_FILE`),
/// hence the aliases.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct WalletDefaults {
    #[cfg_attr(feature = "serde", serde(alias = "env_file"))]
    pub env_file: String,
    #[cfg_attr(feature = "serde", serde(alias = "env_variable"))]
    pub env_variable: String,
}

impl SolanaConfig {
    pub fn cluster(&self) -> Result<Cluster> {
        self.cluster.parse()
    }

    pub fn rpc_url(&self) -> Result<String> {
        match &self.rpc_url {
            Some(url) => Ok(url.clone()),
            None => Ok(self.cluster()?.default_rpc_url()),
        }
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment,
        }
    }
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            cluster: "localnet".to_string(),
            rpc_url: None,
            commitment: CommitmentLevel::Confirmed,
        }
    }
}

impl Default for WalletDefaults {
    fn default() -> Self {
        Self {
            env_file: DEFAULT_ENV_FILE.to_string(),
            env_variable: DEFAULT_ENV_VARIABLE.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_commitment {

    use super::*;
    use serde::{Deserializer, Serializer};
    use std::result::Result;

    pub fn serialize<S>(c: &CommitmentLevel, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match c {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CommitmentLevel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "processed" => Ok(CommitmentLevel::Processed),
            "confirmed" => Ok(CommitmentLevel::Confirmed),
            "finalized" => Ok(CommitmentLevel::Finalized),
            other => Err(serde::de::Error::custom(format!(
                "unknown commitment level '{}'",
                other
            ))),
        }
    }
}
