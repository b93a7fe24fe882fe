use solana_client::client_error::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for helper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the error types surfaced by the helpers.
///
/// Nothing here is retried internally: every error reaches the immediate caller.
#[derive(Error, Debug)]
pub enum Error {
    /// A required variable is absent from the environment it was looked up in.
    #[error("Missing variable: '{0}' is not set")]
    MissingVariable(String),

    /// The variable is present but holds neither a base58 nor a JSON byte-array keypair.
    #[error("Malformed secret in '{name}': {reason}")]
    MalformedSecret { name: String, reason: String },

    /// Persisting would overwrite an existing variable.
    #[error("Duplicate variable: '{name}' already exists in {}", .path.display())]
    DuplicateVariable { name: String, path: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Balance, airdrop, confirmation or submission failure, passed through unmodified.
    #[error("RPC error: {0}")]
    Rpc(#[from] ClientError),

    #[error("Failed to parse env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for configuration problems (missing or malformed secrets).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingVariable(_) | Error::MalformedSecret { .. }
        )
    }
}
