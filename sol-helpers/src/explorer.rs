//! Cluster names and Solana Explorer links.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use url::{form_urlencoded, Url};

const EXPLORER_BASE: &str = "https://explorer.solana.com";
const LOCALNET_RPC: &str = "http://localhost:8899";

/// A Solana cluster, either a well-known one or a custom RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
    #[default]
    Localnet,
    Custom(Url),
}

impl Cluster {
    pub fn default_rpc_url(&self) -> String {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::Localnet => LOCALNET_RPC.to_string(),
            Cluster::Custom(url) => url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Airdrops are only served by faucets on non-mainnet clusters.
    pub fn supports_airdrop(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }

    fn query(&self) -> Option<String> {
        match self {
            Cluster::MainnetBeta => None,
            Cluster::Devnet => Some("cluster=devnet".to_string()),
            Cluster::Testnet => Some("cluster=testnet".to_string()),
            Cluster::Localnet | Cluster::Custom(_) => {
                let encoded: String =
                    form_urlencoded::byte_serialize(self.default_rpc_url().as_bytes()).collect();
                Some(format!("cluster=custom&customUrl={}", encoded))
            }
        }
    }
}

impl FromStr for Cluster {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            _ => Url::parse(s.trim())
                .map(Cluster::Custom)
                .map_err(|e| Error::InvalidArgument(format!("unknown cluster '{}': {}", s, e))),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::MainnetBeta => f.write_str("mainnet-beta"),
            Cluster::Devnet => f.write_str("devnet"),
            Cluster::Testnet => f.write_str("testnet"),
            Cluster::Localnet => f.write_str("localnet"),
            Cluster::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// What an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerItem {
    Address,
    Transaction,
    Block,
}

impl ExplorerItem {
    fn path(self) -> &'static str {
        match self {
            ExplorerItem::Address => "address",
            ExplorerItem::Transaction => "tx",
            ExplorerItem::Block => "block",
        }
    }
}

/// Builds a Solana Explorer URL for `id` on `cluster`.
pub fn explorer_link(item: ExplorerItem, id: &str, cluster: &Cluster) -> String {
    let base = format!("{}/{}/{}", EXPLORER_BASE, item.path(), id);
    match cluster.query() {
        Some(query) => format!("{}?{}", base, query),
        None => base,
    }
}
