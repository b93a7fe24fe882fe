mod common;

use clap::Parser;
use common::TestLedger;
use serial_test::serial;
use sol_helpers::env_file::{addresses_in_env_file, append_keypair_to_env_file, Environment};
use sol_helpers::keys::ExtractableKeypair;
use sol_helpers_cli::cli::{Cli, Commands, ExplorerKind};
use sol_helpers_cli::config::{load_config, HelpersConfig};
use sol_helpers_cli::execute;
use sol_helpers_logger::{LogFormat, LogOutput};
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parses_create_wallet_arguments() {
    let cli = Cli::try_parse_from([
        "sol-helpers",
        "--config",
        "helpers.toml",
        "create-wallet",
        "--prefix",
        "ab",
        "--env-variable",
        "DEPLOYER",
        "--airdrop",
        "1.5",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some("helpers.toml"));
    let Commands::CreateWallet(cmd) = cli.command else {
        panic!("expected create-wallet");
    };
    assert_eq!(cmd.pattern.prefix.as_deref(), Some("ab"));
    assert_eq!(cmd.pattern.suffix, None);
    assert_eq!(cmd.env_variable.as_deref(), Some("DEPLOYER"));
    assert_eq!(cmd.airdrop.as_deref(), Some("1.5"));
}

#[test]
fn test_parses_explorer_kind() {
    let cli = Cli::try_parse_from(["sol-helpers", "explorer", "tx", "abc"]).unwrap();
    let Commands::Explorer(cmd) = cli.command else {
        panic!("expected explorer");
    };
    assert_eq!(cmd.kind, ExplorerKind::Tx);
    assert_eq!(cmd.id, "abc");

    assert!(Cli::try_parse_from(["sol-helpers", "explorer", "account", "abc"]).is_err());
}

#[test]
#[serial]
fn test_defaults_without_a_file() {
    let config = load_config(None).unwrap();
    assert_eq!(config.solana.cluster, "localnet");
    assert_eq!(config.solana.commitment, CommitmentLevel::Confirmed);
    assert_eq!(config.wallet.env_file, ".env");
    assert_eq!(config.wallet.env_variable, "PRIVATE_KEY");
    assert_eq!(config.log.level, "info");
}

#[test]
#[serial]
fn test_loads_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("helpers.toml");
    fs::write(
        &path,
        r#"
[solana]
cluster = "devnet"
commitment = "Finalized"

[wallet]
env-variable = "DEPLOYER"

[log]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.solana.cluster, "devnet");
    assert_eq!(config.solana.commitment, CommitmentLevel::Finalized);
    assert_eq!(
        config.solana.rpc_url().unwrap(),
        "https://api.devnet.solana.com"
    );
    assert_eq!(config.wallet.env_file, ".env");
    assert_eq!(config.wallet.env_variable, "DEPLOYER");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.format, LogFormat::Json);
    assert_eq!(config.log.output, LogOutput::Stderr);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    std::env::set_var("SOL_HELPERS__SOLANA__CLUSTER", "testnet");
    let config = load_config(None);
    std::env::remove_var("SOL_HELPERS__SOLANA__CLUSTER");

    assert_eq!(config.unwrap().solana.cluster, "testnet");
}

#[test]
#[serial]
fn test_environment_overrides_multi_word_keys() {
    let overrides = [
        ("SOL_HELPERS__SOLANA__RPC_URL", "http://validator:8899"),
        ("SOL_HELPERS__WALLET__ENV_FILE", "deploy.env"),
        ("SOL_HELPERS__WALLET__ENV_VARIABLE", "DEPLOYER"),
        ("SOL_HELPERS__LOG__FILE_PATH", "helpers.log"),
    ];
    for (name, value) in overrides {
        std::env::set_var(name, value);
    }
    let config = load_config(None);
    for (name, _) in overrides {
        std::env::remove_var(name);
    }

    let config = config.unwrap();
    assert_eq!(config.solana.rpc_url.as_deref(), Some("http://validator:8899"));
    assert_eq!(config.wallet.env_file, "deploy.env");
    assert_eq!(config.wallet.env_variable, "DEPLOYER");
    assert_eq!(config.log.file_path.as_deref(), Some("helpers.log"));
}

#[test]
#[serial]
fn test_unknown_commitment_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("helpers.toml");
    fs::write(&path, "[solana]\ncommitment = \"eventually\"\n").unwrap();

    assert!(load_config(path.to_str()).is_err());
}

#[tokio::test]
async fn test_grind_command_appends_to_env_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grind.env");
    let cli = Cli::try_parse_from([
        "sol-helpers",
        "grind",
        "--env-file",
        path.to_str().unwrap(),
        "--env-variable",
        "VANITY",
    ])
    .unwrap();

    execute(cli.command, &HelpersConfig::default(), &TestLedger::new())
        .await
        .unwrap();

    let recorded = addresses_in_env_file(&path).unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "VANITY");
    assert!(Environment::from_file(&path).unwrap().contains("VANITY"));
}

#[tokio::test]
async fn test_airdrop_is_refused_on_mainnet() {
    let mut config = HelpersConfig::default();
    config.solana.cluster = "mainnet-beta".to_string();
    let cli = Cli::try_parse_from([
        "sol-helpers",
        "airdrop",
        "11111111111111111111111111111111",
    ])
    .unwrap();

    let ledger = TestLedger::new();
    let err = execute(cli.command, &config, &ledger).await.unwrap_err();
    assert!(err.to_string().contains("not available"));
    assert_eq!(ledger.airdrop_requests(), 0);
}

#[tokio::test]
async fn test_create_wallet_uses_configured_file_when_only_variable_given() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("configured.env");
    let mut config = HelpersConfig::default();
    config.wallet.env_file = path.to_str().unwrap().to_string();

    let cli = Cli::try_parse_from(["sol-helpers", "create-wallet", "--env-variable", "DEPLOYER"])
        .unwrap();
    execute(cli.command, &config, &TestLedger::new()).await.unwrap();

    let recorded = addresses_in_env_file(&path).unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "DEPLOYER");
}

#[tokio::test]
async fn test_create_wallet_uses_configured_variable_when_only_file_given() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wallet.env");
    let mut config = HelpersConfig::default();
    config.wallet.env_variable = "TREASURY".to_string();

    let cli = Cli::try_parse_from([
        "sol-helpers",
        "create-wallet",
        "--env-file",
        path.to_str().unwrap(),
    ])
    .unwrap();
    execute(cli.command, &config, &TestLedger::new()).await.unwrap();

    assert!(Environment::from_file(&path).unwrap().contains("TREASURY"));
}

#[tokio::test]
async fn test_create_wallet_funds_the_persisted_wallet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("funded.env");
    let ledger = TestLedger::new();

    let cli = Cli::try_parse_from([
        "sol-helpers",
        "create-wallet",
        "--env-file",
        path.to_str().unwrap(),
        "--airdrop",
        "1.5",
    ])
    .unwrap();
    execute(cli.command, &HelpersConfig::default(), &ledger)
        .await
        .unwrap();

    let recorded = addresses_in_env_file(&path).unwrap();
    assert_eq!(recorded[0].0, "PRIVATE_KEY");
    assert_eq!(ledger.balance_of(&recorded[0].1), 1_500_000_000);
    assert_eq!(ledger.airdrop_requests(), 1);
}

#[tokio::test]
async fn test_airdrop_command_only_requests_below_minimum() {
    let ledger = TestLedger::new();
    let address = Pubkey::new_unique();
    let args = [
        "sol-helpers".to_string(),
        "airdrop".to_string(),
        address.to_string(),
        "--amount".to_string(),
        "2".to_string(),
    ];
    let config = HelpersConfig::default();

    execute(Cli::try_parse_from(&args).unwrap().command, &config, &ledger)
        .await
        .unwrap();
    execute(Cli::try_parse_from(&args).unwrap().command, &config, &ledger)
        .await
        .unwrap();

    assert_eq!(ledger.balance_of(&address), 2 * LAMPORTS_PER_SOL);
    assert_eq!(ledger.airdrop_requests(), 1);
}

#[tokio::test]
async fn test_balance_command_reads_through_the_client() {
    let ledger = TestLedger::new();
    let address = Pubkey::new_unique();
    ledger.credit(&address, LAMPORTS_PER_SOL);

    let cli = Cli::try_parse_from([
        "sol-helpers".to_string(),
        "balance".to_string(),
        address.to_string(),
    ])
    .unwrap();
    execute(cli.command, &HelpersConfig::default(), &ledger)
        .await
        .unwrap();

    assert_eq!(ledger.airdrop_requests(), 0);

    let bad = Cli::try_parse_from(["sol-helpers", "balance", "not-an-address"]).unwrap();
    assert!(execute(bad.command, &HelpersConfig::default(), &ledger)
        .await
        .is_err());
}

#[tokio::test]
async fn test_transfer_command_signs_with_the_stored_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sender.env");
    let sender = ExtractableKeypair::generate();
    append_keypair_to_env_file(&sender, "SENDER", &path).unwrap();
    let recipient = Pubkey::new_unique();
    let ledger = TestLedger::new();

    let cli = Cli::try_parse_from([
        "sol-helpers".to_string(),
        "transfer".to_string(),
        recipient.to_string(),
        "0.25".to_string(),
        "--env-file".to_string(),
        path.to_str().unwrap().to_string(),
        "--env-variable".to_string(),
        "SENDER".to_string(),
    ])
    .unwrap();
    execute(cli.command, &HelpersConfig::default(), &ledger)
        .await
        .unwrap();

    let submitted = ledger.submitted();
    assert_eq!(submitted.len(), 1);
    let tx = &submitted[0];
    assert_eq!(tx.message.account_keys[0], sender.pubkey());
    assert!(tx.message.account_keys.contains(&recipient));
    assert!(tx.verify().is_ok());
}
