//! # Wallet Factory
//!
//! [`create_wallet`] produces a ready-to-use signer, optionally with a vanity address,
//! persisted to an env file, and funded.

use crate::airdrop::airdrop_if_required;
use crate::env_file::{
    append_keypair_to_env_file, load_keypair_from_environment, Environment, DEFAULT_ENV_FILE,
    DEFAULT_ENV_VARIABLE,
};
use crate::grind::{grind_keypair, AddressPattern, GrindOptions, EXTRACTABLE_ACKNOWLEDGEMENT};
use crate::keys::SealedKeypair;
use crate::rpc::AsyncRpcClient;
use crate::{Error, Result};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Signer;
use std::path::PathBuf;
use tracing::info;

/// Options for [`create_wallet`].
///
/// Setting either `env_file` or `env_variable` turns on persistence; the other falls back
/// to `.env` / `PRIVATE_KEY`.
#[derive(Debug, Clone, Default)]
pub struct WalletOptions {
    pub pattern: AddressPattern,
    pub env_file: Option<PathBuf>,
    pub env_variable: Option<String>,
    /// Lamports to fund the new wallet with.
    pub airdrop_amount: Option<u64>,
    pub commitment: CommitmentConfig,
    pub report_progress: bool,
}

impl WalletOptions {
    /// The `(file, variable)` to persist to, if persistence was requested.
    pub fn persistence_target(&self) -> Option<(PathBuf, String)> {
        if self.env_file.is_none() && self.env_variable.is_none() {
            return None;
        }
        Some((
            self.env_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
            self.env_variable
                .clone()
                .unwrap_or_else(|| DEFAULT_ENV_VARIABLE.to_string()),
        ))
    }
}

/// Creates a new signer according to `options`.
///
/// With persistence, an extractable keypair is ground, appended to the env file, and
/// reloaded from that file as a [`SealedKeypair`]; the in-memory extractable copy is
/// dropped. Without persistence the keypair is sealed from the start.
///
/// If `airdrop_amount` is set the wallet is funded with exactly that amount. A duplicate
/// variable name fails before any funding request is made.
pub async fn create_wallet<C>(client: &C, options: WalletOptions) -> Result<SealedKeypair>
where
    C: AsyncRpcClient + ?Sized,
{
    let signer = match options.persistence_target() {
        Some((path, variable)) => {
            let ground = grind_keypair(&GrindOptions {
                pattern: options.pattern.clone(),
                private_key_extractable: Some(EXTRACTABLE_ACKNOWLEDGEMENT.to_string()),
                report_progress: options.report_progress,
            })?;
            let temporary = ground.into_extractable().ok_or_else(|| {
                Error::InvalidArgument("grinder did not return an extractable keypair".into())
            })?;

            append_keypair_to_env_file(&temporary, &variable, &path)?;
            drop(temporary);

            let env = Environment::from_file(&path)?;
            load_keypair_from_environment(&env, &variable)?.seal()
        }
        None => grind_keypair(&GrindOptions {
            pattern: options.pattern.clone(),
            private_key_extractable: None,
            report_progress: options.report_progress,
        })?
        .into_sealed(),
    };

    info!(pubkey = %signer.pubkey(), "Created wallet");

    // A fresh address starts at zero, so minimum == amount funds it exactly once.
    if let Some(amount) = options.airdrop_amount {
        airdrop_if_required(client, &signer.pubkey(), amount, amount, options.commitment).await?;
    }

    Ok(signer)
}
