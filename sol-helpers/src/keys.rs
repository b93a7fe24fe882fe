//! # Key Material Capabilities
//!
//! A [`Keypair`] can be held in one of two wrappers:
//!
//! - [`ExtractableKeypair`]: full access. The secret can be read out, which is what
//!   persisting it to a file requires.
//! - [`SealedKeypair`]: signing only. It implements [`Signer`] and nothing else.
//!
//! Conversion goes one way, via [`ExtractableKeypair::seal`]. Both wrappers print only
//! the public key in their `Debug` output.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::{Signer, SignerError};
use std::fmt;
use zeroize::Zeroizing;

/// A keypair whose raw secret bytes are readable.
pub struct ExtractableKeypair(Keypair);

/// A keypair usable only for signing.
pub struct SealedKeypair(Keypair);

impl ExtractableKeypair {
    pub fn generate() -> Self {
        Self(Keypair::new())
    }

    pub(crate) fn from_keypair(keypair: Keypair) -> Self {
        Self(keypair)
    }

    /// The 64-byte `[secret || public]` encoding. Wiped from memory when dropped.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// The secret as a JSON array, e.g. `[12,250,...]`, the same layout `solana-keygen` writes.
    pub fn to_json_array(&self) -> Zeroizing<String> {
        let bytes = self.secret_bytes();
        let joined = bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Zeroizing::new(format!("[{}]", joined))
    }

    pub fn to_base58_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.0.to_base58_string())
    }

    /// Drops read access to the secret. There is no way back.
    pub fn seal(self) -> SealedKeypair {
        SealedKeypair(self.0)
    }
}

impl SealedKeypair {
    pub fn generate() -> Self {
        Self(Keypair::new())
    }

    pub(crate) fn from_keypair(keypair: Keypair) -> Self {
        Self(keypair)
    }
}

impl From<ExtractableKeypair> for SealedKeypair {
    fn from(keypair: ExtractableKeypair) -> Self {
        keypair.seal()
    }
}

macro_rules! delegate_signer {
    ($ty:ty) => {
        impl Signer for $ty {
            fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
                self.0.try_pubkey()
            }

            fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
                self.0.try_sign_message(message)
            }

            fn is_interactive(&self) -> bool {
                false
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($ty))
                    .field(&self.0.pubkey())
                    .finish()
            }
        }
    };
}

delegate_signer!(ExtractableKeypair);
delegate_signer!(SealedKeypair);

/// Generates `count` fresh in-memory signers.
pub fn make_keypairs(count: usize) -> Vec<SealedKeypair> {
    (0..count).map(|_| SealedKeypair::generate()).collect()
}
