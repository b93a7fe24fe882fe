//! A convenience layer over the Solana Rust SDK for wallets, test funds and secrets.
//!
//! Everything hard (signing, transaction encoding, RPC transport) is delegated to
//! `solana-sdk` and `solana-client`. This crate only orchestrates those primitives.
//!
//! # Key Components
//!
//! *   [`airdrop`]: Fund an address only when its balance is below a threshold.
//! *   [`grind`]: Search for a keypair whose address has a given prefix and/or suffix.
//! *   [`env_file`]: Persist keypairs to `KEY=VALUE` files and load them back.
//! *   [`wallet`]: Combine the three above into a single "give me a ready wallet" call.
//! *   [`keys`]: The [`keys::ExtractableKeypair`] / [`keys::SealedKeypair`] capability types.
//! *   [`rpc`]: The [`rpc::AsyncRpcClient`] seam, implemented for the nonblocking `RpcClient`.

pub mod airdrop;
pub mod amount;
/// Defines configuration structures for the helpers.
pub mod config;
pub mod env_file;
mod error;
pub mod explorer;
pub mod grind;
pub mod keys;
pub mod rpc;
/// Native SOL transfers.
pub mod transfer;
pub mod wallet;

pub use error::{Error, Result};
