//! # Vanity Keypair Grinder
//!
//! Grinding is split into two pieces so the search can be bounded independently of how
//! candidates are produced:
//!
//! - [`KeypairCandidates`]: an endless, lazy stream of fresh random keypairs.
//! - [`find_matching`]: walks any keypair iterator until a predicate accepts one.
//!
//! [`grind_keypair`] glues them together with an [`AddressPattern`] and no iteration cap.
//!
//! ## Extractable keys
//!
//! Passing [`EXTRACTABLE_ACKNOWLEDGEMENT`] verbatim in
//! [`GrindOptions::private_key_extractable`] makes the result an
//! [`ExtractableKeypair`]. The phrase is friction, not a security control: the caller
//! still has to delete extractable material promptly after saving it.

use crate::keys::{ExtractableKeypair, SealedKeypair};
use crate::{Error, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tracing::info;

/// The exact phrase that opts a ground keypair into [`GroundKeypair::Extractable`].
pub const EXTRACTABLE_ACKNOWLEDGEMENT: &str = "yes I understand the risk of extractable private keys and will delete this keypair shortly after saving it to a file";

/// Attempts between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 100_000;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A case-sensitive prefix/suffix constraint on an address's base58 text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPattern {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl AddressPattern {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.as_deref().unwrap_or_default().is_empty()
            && self.suffix.as_deref().unwrap_or_default().is_empty()
    }

    /// Absent or empty parts match anything.
    pub fn matches(&self, address: &str) -> bool {
        self.prefix
            .as_deref()
            .map_or(true, |prefix| address.starts_with(prefix))
            && self
                .suffix
                .as_deref()
                .map_or(true, |suffix| address.ends_with(suffix))
    }

    pub fn matches_pubkey(&self, pubkey: &Pubkey) -> bool {
        self.is_empty() || self.matches(&pubkey.to_string())
    }

    /// Rejects patterns containing characters that never appear in a base58 address.
    pub fn validate(&self) -> Result<()> {
        for part in [&self.prefix, &self.suffix].into_iter().flatten() {
            if let Some(c) = part.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
                return Err(Error::InvalidArgument(format!(
                    "'{}' contains '{}', which is not a base58 character",
                    part, c
                )));
            }
            if part.len() > 44 {
                return Err(Error::InvalidArgument(format!(
                    "'{}' is longer than any base58 address",
                    part
                )));
            }
        }
        Ok(())
    }
}

/// An endless, lazy sequence of freshly generated keypairs.
///
/// The iterator holds no state, so a new one can be created at any time to restart.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeypairCandidates;

impl Iterator for KeypairCandidates {
    type Item = Keypair;

    fn next(&mut self) -> Option<Keypair> {
        Some(Keypair::new())
    }
}

/// Returns the first candidate accepted by `predicate`, or `None` if the iterator ends.
pub fn find_matching<I, P>(candidates: I, mut predicate: P) -> Option<Keypair>
where
    I: IntoIterator<Item = Keypair>,
    P: FnMut(&Keypair) -> bool,
{
    candidates.into_iter().find(|kp| predicate(kp))
}

/// Options for [`grind_keypair`].
#[derive(Debug, Clone, Default)]
pub struct GrindOptions {
    pub pattern: AddressPattern,
    /// Must equal [`EXTRACTABLE_ACKNOWLEDGEMENT`] to get an extractable keypair.
    pub private_key_extractable: Option<String>,
    /// Log the attempt count every [`PROGRESS_INTERVAL`] attempts.
    pub report_progress: bool,
}

impl GrindOptions {
    pub fn wants_extractable(&self) -> bool {
        self.private_key_extractable.as_deref() == Some(EXTRACTABLE_ACKNOWLEDGEMENT)
    }
}

/// The result of a grind, tagged with the capability the caller opted into.
#[derive(Debug)]
pub enum GroundKeypair {
    Extractable(ExtractableKeypair),
    Sealed(SealedKeypair),
}

impl GroundKeypair {
    pub fn pubkey(&self) -> Pubkey {
        match self {
            GroundKeypair::Extractable(kp) => kp.pubkey(),
            GroundKeypair::Sealed(kp) => kp.pubkey(),
        }
    }

    pub fn into_sealed(self) -> SealedKeypair {
        match self {
            GroundKeypair::Extractable(kp) => kp.seal(),
            GroundKeypair::Sealed(kp) => kp,
        }
    }

    pub fn into_extractable(self) -> Option<ExtractableKeypair> {
        match self {
            GroundKeypair::Extractable(kp) => Some(kp),
            GroundKeypair::Sealed(_) => None,
        }
    }
}

/// Generates keypairs until one's address matches `options.pattern`.
///
/// There is no iteration cap: a long pattern can run for a very long time. An empty
/// pattern accepts the first keypair generated.
pub fn grind_keypair(options: &GrindOptions) -> Result<GroundKeypair> {
    options.pattern.validate()?;

    let mut attempts: u64 = 0;
    let found = find_matching(KeypairCandidates, |kp| {
        attempts += 1;
        if options.report_progress && attempts % PROGRESS_INTERVAL == 0 {
            info!(attempts, pattern = ?options.pattern, "Still grinding");
        }
        options.pattern.matches_pubkey(&kp.pubkey())
    })
    .ok_or_else(|| Error::InvalidArgument("keypair candidates exhausted".to_string()))?;

    if options.report_progress {
        info!(attempts, pubkey = %found.pubkey(), "Found matching keypair");
    }

    Ok(if options.wants_extractable() {
        GroundKeypair::Extractable(ExtractableKeypair::from_keypair(found))
    } else {
        GroundKeypair::Sealed(SealedKeypair::from_keypair(found))
    })
}
