use clap::{Args, Parser, Subcommand, ValueEnum};

/// Wallet, airdrop and env-file helpers for Solana test networks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Defines the available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grind a vanity keypair and append it to an env file.
    Grind(GrindCmd),
    /// Create a wallet, optionally persisted and funded.
    CreateWallet(CreateWalletCmd),
    /// Request an airdrop if the balance is below a minimum.
    Airdrop(AirdropCmd),
    /// Print the balance of an address.
    Balance(BalanceCmd),
    /// Send SOL from a keypair stored in an env file.
    Transfer(TransferCmd),
    /// Print a Solana Explorer link.
    Explorer(ExplorerCmd),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatternArgs {
    /// Case-sensitive address prefix.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Case-sensitive address suffix.
    #[arg(long)]
    pub suffix: Option<String>,
}

#[derive(Args, Debug)]
pub struct GrindCmd {
    #[command(flatten)]
    pub pattern: PatternArgs,
    /// Env file to append to. Defaults to the configured wallet file.
    #[arg(long)]
    pub env_file: Option<String>,
    /// Variable name to store the key under. Defaults to the configured wallet variable.
    #[arg(long)]
    pub env_variable: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateWalletCmd {
    #[command(flatten)]
    pub pattern: PatternArgs,
    /// Persist to this env file.
    #[arg(long)]
    pub env_file: Option<String>,
    /// Persist under this variable name.
    #[arg(long)]
    pub env_variable: Option<String>,
    /// SOL to airdrop to the new wallet, e.g. "1.5".
    #[arg(long)]
    pub airdrop: Option<String>,
}

#[derive(Args, Debug)]
pub struct AirdropCmd {
    pub address: String,
    /// SOL to request.
    #[arg(long, default_value = "1")]
    pub amount: String,
    /// Only request when the balance is below this many SOL. Defaults to `amount`.
    #[arg(long)]
    pub minimum: Option<String>,
}

#[derive(Args, Debug)]
pub struct BalanceCmd {
    pub address: String,
}

#[derive(Args, Debug)]
pub struct TransferCmd {
    /// Recipient address.
    pub to: String,
    /// SOL to send.
    pub amount: String,
    /// Env file holding the sender's key. Defaults to the configured wallet file.
    #[arg(long)]
    pub env_file: Option<String>,
    /// Variable holding the sender's key. Defaults to the configured wallet variable.
    #[arg(long)]
    pub env_variable: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerKind {
    Address,
    Tx,
    Block,
}

#[derive(Args, Debug)]
pub struct ExplorerCmd {
    #[arg(value_enum)]
    pub kind: ExplorerKind,
    pub id: String,
}
