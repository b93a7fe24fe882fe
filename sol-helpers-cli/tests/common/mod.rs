#![allow(dead_code)]

use async_trait::async_trait;
use sol_helpers::rpc::AsyncRpcClient;
use solana_client::client_error::ClientError;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A faucet-backed ledger held in memory, standing in for a local validator.
#[derive(Default)]
pub struct TestLedger {
    balances: Mutex<HashMap<Pubkey, u64>>,
    submitted: Mutex<Vec<Transaction>>,
    airdrop_requests: AtomicUsize,
}

impl TestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&self, pubkey: &Pubkey, lamports: u64) {
        *self.balances.lock().unwrap().entry(*pubkey).or_default() += lamports;
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
}

#[async_trait]
impl AsyncRpcClient for TestLedger {
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
        self.credit(pubkey, lamports);
        Ok(Signature::new_unique())
    }

    async fn confirm_signature(
        &self,
        _signature: &Signature,
        _commitment: CommitmentConfig,
    ) -> Result<(), ClientError> {
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
