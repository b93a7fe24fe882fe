//! # Environment Files
//!
//! Secrets are stored as `NAME=VALUE` lines. A value is either a base58 string or a JSON
//! array of the 64 keypair bytes. [`append_keypair_to_env_file`] always writes the JSON
//! form, preceded by a comment with the address:
//!
//! ```text
//! # Solana Address: 9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin
//! PRIVATE_KEY=[12,250,...]
//! ```
//!
//! Lookups go through an explicit [`Environment`] snapshot rather than the process-wide
//! environment. Files are not locked; concurrent writers to the same file can race.

use crate::keys::ExtractableKeypair;
use crate::{Error, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::signer::keypair::keypair_from_seed;
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use zeroize::Zeroizing;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_ENV_VARIABLE: &str = "PRIVATE_KEY";

const ADDRESS_COMMENT: &str = "# Solana Address: ";
const KEYPAIR_LENGTH: usize = 64;

/// An immutable snapshot of variables, taken from the process or from a file.
#[derive(Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshots the process environment. Variables that are not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Parses a dotenv-style file. The process environment is not modified.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let vars = dotenvy::from_path_iter(path.as_ref())?
            .collect::<std::result::Result<HashMap<_, _>, _>>()?;
        Ok(Self { vars })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

// Values are secrets; only names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.vars.keys().collect();
        names.sort();
        f.debug_struct("Environment").field("names", &names).finish()
    }
}

/// Decodes a secret value in either base58 or JSON byte-array form.
pub fn parse_secret(value: &str) -> std::result::Result<Keypair, String> {
    let value = value.trim();
    let bytes: Zeroizing<Vec<u8>> = if value.starts_with('[') {
        Zeroizing::new(
            serde_json::from_str::<Vec<u8>>(value)
                .map_err(|e| format!("invalid JSON byte array: {}", e))?,
        )
    } else {
        Zeroizing::new(
            bs58::decode(value)
                .into_vec()
                .map_err(|e| format!("invalid base58: {}", e))?,
        )
    };

    if bytes.len() != KEYPAIR_LENGTH {
        return Err(format!(
            "expected {} bytes, got {}",
            KEYPAIR_LENGTH,
            bytes.len()
        ));
    }

    // The public half must be the one derived from the secret half.
    let derived = keypair_from_seed(&bytes[..32]).map_err(|e| e.to_string())?;
    if derived.pubkey().to_bytes()[..] != bytes[32..] {
        return Err("public key does not match secret key".to_string());
    }
    Ok(derived)
}

/// Loads the keypair stored under `name`.
///
/// The result is extractable because the bytes were already readable in the environment;
/// seal it with [`ExtractableKeypair::seal`] once nothing else needs them.
pub fn load_keypair_from_environment(env: &Environment, name: &str) -> Result<ExtractableKeypair> {
    let value = env
        .get(name)
        .ok_or_else(|| Error::MissingVariable(name.to_string()))?;
    let keypair = parse_secret(value).map_err(|reason| Error::MalformedSecret {
        name: name.to_string(),
        reason,
    })?;
    debug!(name, pubkey = %keypair.pubkey(), "Loaded keypair from environment");
    Ok(ExtractableKeypair::from_keypair(keypair))
}

fn validate_variable_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "'{}' is not a valid environment variable name",
            name
        )))
    }
}

/// Appends `keypair` to the file at `path` under `name`, creating the file if needed.
///
/// Fails with [`Error::DuplicateVariable`] without touching the file if `name` is
/// already defined there.
pub fn append_keypair_to_env_file(
    keypair: &ExtractableKeypair,
    name: &str,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    validate_variable_name(name)?;

    let mut needs_newline = false;
    if path.exists() {
        if Environment::from_file(path)?.contains(name) {
            return Err(Error::DuplicateVariable {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }
        let existing = fs::read(path)?;
        needs_newline = existing.last().is_some_and(|b| *b != b'\n');
    }

    let secret = keypair.to_json_array();
    let mut record = Zeroizing::new(String::new());
    if needs_newline {
        record.push('\n');
    }
    record.push_str(&format!(
        "{}{}\n{}={}\n",
        ADDRESS_COMMENT,
        keypair.pubkey(),
        name,
        secret.as_str()
    ));

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(record.as_bytes())?;
    file.flush()?;

    info!(name, pubkey = %keypair.pubkey(), path = %path.display(), "Appended keypair to env file");
    Ok(())
}

/// Lists the `(variable, address)` pairs recorded by [`append_keypair_to_env_file`].
pub fn addresses_in_env_file(path: impl AsRef<Path>) -> Result<Vec<(String, Pubkey)>> {
    let contents = fs::read_to_string(path)?;
    let mut found = Vec::new();
    let mut pending: Option<Pubkey> = None;

    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(address) = line.strip_prefix(ADDRESS_COMMENT) {
            pending = Pubkey::from_str(address.trim()).ok();
            continue;
        }
        if let (Some(pubkey), Some((name, _))) = (pending.take(), line.split_once('=')) {
            found.push((name.trim().to_string(), pubkey));
        }
    }
    Ok(found)
}
