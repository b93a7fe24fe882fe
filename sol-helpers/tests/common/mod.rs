#![allow(dead_code)]

use async_trait::async_trait;
use sol_helpers::rpc::AsyncRpcClient;
use solana_client::client_error::ClientError;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::transport::TransportError;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub const LAMPORTS_PER_SOL: u64 = solana_sdk::native_token::LAMPORTS_PER_SOL;

/// An in-memory stand-in for a test validator with a faucet.
///
/// Airdrops credit the balance immediately; confirmation always succeeds unless
/// `fail_confirmations` is set.
#[derive(Default)]
pub struct MockLedger {
    balances: Mutex<HashMap<Pubkey, u64>>,
    submitted: Mutex<Vec<Transaction>>,
    airdrop_requests: AtomicUsize,
    fail_airdrops: AtomicBool,
    fail_confirmations: AtomicBool,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, pubkey: &Pubkey) -> u64 {
        self.balances.lock().unwrap().get(pubkey).copied().unwrap_or(0)
    }

    pub fn airdrop_requests(&self) -> usize {
        self.airdrop_requests.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn fail_airdrops(&self) {
        self.fail_airdrops.store(true, Ordering::SeqCst);
    }

    pub fn fail_confirmations(&self) {
        self.fail_confirmations.store(true, Ordering::SeqCst);
    }
}

fn custom_error(msg: &str) -> ClientError {
    ClientError::from(TransportError::Custom(msg.to_string()))
}

#[async_trait]
impl AsyncRpcClient for MockLedger {
    async fn get_balance(
        &self,
        pubkey: &Pubkey,
        _commitment: CommitmentConfig,
    ) -> Result<u64, ClientError> {
        Ok(self.balance_of(pubkey))
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, ClientError> {
        self.airdrop_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_airdrops.load(Ordering::SeqCst) {
            return Err(custom_error("airdrop request failed"));
        }
        *self.balances.lock().unwrap().entry(*pubkey).or_default() += lamports;
        Ok(Signature::new_unique())
    }

    async fn confirm_signature(
        &self,
        _signature: &Signature,
        _commitment: CommitmentConfig,
    ) -> Result<(), ClientError> {
        if self.fail_confirmations.load(Ordering::SeqCst) {
            return Err(custom_error("confirmation timed out"));
        }
        Ok(())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        Ok(Hash::new_unique())
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ClientError> {
        self.submitted.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
