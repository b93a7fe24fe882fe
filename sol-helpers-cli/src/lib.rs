pub mod cli;
pub mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crate::cli::{Cli, Commands, ExplorerKind, PatternArgs};
use crate::config::{load_config, HelpersConfig};
use sol_helpers::airdrop::airdrop_if_required;
use sol_helpers::amount::{format_sol, parse_sol};
use sol_helpers::env_file::{
    append_keypair_to_env_file, load_keypair_from_environment, Environment,
};
use sol_helpers::explorer::{explorer_link, ExplorerItem};
use sol_helpers::grind::{grind_keypair, AddressPattern, GrindOptions, EXTRACTABLE_ACKNOWLEDGEMENT};
use sol_helpers::rpc::AsyncRpcClient;
use sol_helpers::transfer::transfer_lamports;
use sol_helpers::wallet::{create_wallet, WalletOptions};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use std::path::PathBuf;
use std::str::FromStr;

/// The main entry point for the `sol-helpers` binary.
/// This function handles CLI parsing, configuration, and dispatch.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    sol_helpers_logger::init(&config.log)?;
    tracing::debug!("Configuration loaded: {:#?}", &config);

    let client = rpc_client(&config)?;
    execute(cli.command, &config, &client).await
}

/// Runs a single parsed command against `config`, sending every RPC round trip through `client`.
pub async fn execute<C>(command: Commands, config: &HelpersConfig, client: &C) -> Result<()>
where
    C: AsyncRpcClient + ?Sized,
{
    match command {
        Commands::Grind(cmd) => {
            let path = cmd
                .env_file
                .unwrap_or_else(|| config.wallet.env_file.clone());
            let variable = cmd
                .env_variable
                .unwrap_or_else(|| config.wallet.env_variable.clone());

            let keypair = grind_keypair(&GrindOptions {
                pattern: to_pattern(cmd.pattern),
                private_key_extractable: Some(EXTRACTABLE_ACKNOWLEDGEMENT.to_string()),
                report_progress: true,
            })?
            .into_extractable()
            .context("Grinder returned a sealed keypair")?;

            append_keypair_to_env_file(&keypair, &variable, &path)?;
            println!("{} saved to {} as {}", keypair.pubkey(), path, variable);
        }
        Commands::CreateWallet(cmd) => {
            let airdrop_amount = cmd.airdrop.as_deref().map(parse_sol).transpose()?;
            if airdrop_amount.is_some() {
                ensure_airdrop_supported(config)?;
            }

            // Naming one side turns persistence on; the other comes from the configuration.
            let (env_file, env_variable) = match (cmd.env_file, cmd.env_variable) {
                (None, None) => (None, None),
                (file, variable) => (
                    Some(file.unwrap_or_else(|| config.wallet.env_file.clone())),
                    Some(variable.unwrap_or_else(|| config.wallet.env_variable.clone())),
                ),
            };

            let wallet = create_wallet(
                client,
                WalletOptions {
                    pattern: to_pattern(cmd.pattern),
                    env_file: env_file.map(PathBuf::from),
                    env_variable,
                    airdrop_amount,
                    commitment: config.solana.commitment_config(),
                    report_progress: true,
                },
            )
            .await?;
            println!("{}", wallet.pubkey());
        }
        Commands::Airdrop(cmd) => {
            ensure_airdrop_supported(config)?;
            let pubkey = parse_address(&cmd.address)?;
            let amount = parse_sol(&cmd.amount)?;
            let minimum = match cmd.minimum.as_deref() {
                Some(minimum) => parse_sol(minimum)?,
                None => amount,
            };

            let balance = airdrop_if_required(
                client,
                &pubkey,
                amount,
                minimum,
                config.solana.commitment_config(),
            )
            .await?;
            println!("{} SOL", format_sol(balance));
        }
        Commands::Balance(cmd) => {
            let pubkey = parse_address(&cmd.address)?;
            let balance = client
                .get_balance(&pubkey, config.solana.commitment_config())
                .await?;
            println!("{} SOL", format_sol(balance));
        }
        Commands::Transfer(cmd) => {
            let to = parse_address(&cmd.to)?;
            let lamports = parse_sol(&cmd.amount)?;
            let path = cmd
                .env_file
                .unwrap_or_else(|| config.wallet.env_file.clone());
            let variable = cmd
                .env_variable
                .unwrap_or_else(|| config.wallet.env_variable.clone());

            let env = Environment::from_file(&path)
                .with_context(|| format!("Failed to read env file '{}'", path))?;
            let sender = load_keypair_from_environment(&env, &variable)?.seal();

            let signature = transfer_lamports(client, &sender, &to, lamports).await?;
            println!(
                "{}",
                explorer_link(
                    ExplorerItem::Transaction,
                    &signature.to_string(),
                    &config.solana.cluster()?
                )
            );
        }
        Commands::Explorer(cmd) => {
            let item = match cmd.kind {
                ExplorerKind::Address => ExplorerItem::Address,
                ExplorerKind::Tx => ExplorerItem::Transaction,
                ExplorerKind::Block => ExplorerItem::Block,
            };
            println!("{}", explorer_link(item, &cmd.id, &config.solana.cluster()?));
        }
    }

    Ok(())
}

fn to_pattern(args: PatternArgs) -> AddressPattern {
    AddressPattern::new(args.prefix, args.suffix)
}

fn parse_address(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).with_context(|| format!("Invalid address '{}'", address))
}

fn rpc_client(config: &HelpersConfig) -> Result<RpcClient> {
    let url = config.solana.rpc_url()?;
    tracing::debug!(%url, "Connecting to RPC");
    Ok(RpcClient::new_with_commitment(
        url,
        config.solana.commitment_config(),
    ))
}

fn ensure_airdrop_supported(config: &HelpersConfig) -> Result<()> {
    let cluster = config.solana.cluster()?;
    if !cluster.supports_airdrop() {
        bail!("Airdrops are not available on {}", cluster);
    }
    Ok(())
}
