//! # RPC Seam
//!
//! The helpers never talk to the network directly. Every round trip goes through
//! [`AsyncRpcClient`], which is implemented for the SDK's nonblocking [`RpcClient`].
//! Tests substitute an in-memory ledger by implementing the same trait.

use async_trait::async_trait;
use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use solana_sdk::{hash::Hash, signature::Signature};

/// A trait abstracting over the asynchronous RPC client functionality.
///
/// This allows the helpers to be generic over the RPC client, making it easy to use
/// them with both the live `RpcClient` and a mock ledger in integration tests.
#[async_trait]
pub trait AsyncRpcClient: Send + Sync {
    /// Fetches the balance of `pubkey` in lamports at the given commitment.
    async fn get_balance(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<u64, ClientError>;

    /// Asks the cluster's faucet for `lamports`. Only meaningful on test networks.
    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64)
        -> Result<Signature, ClientError>;

    /// Waits until `signature` reaches `commitment`, or fails once the SDK's poll times out.
    async fn confirm_signature(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<(), ClientError>;

    /// Fetches the latest blockhash from the RPC endpoint.
    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError>;

    /// Sends and confirms a transaction.
    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ClientError>;
}

#[async_trait]
impl AsyncRpcClient for RpcClient {
    async fn get_balance(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<u64, ClientError> {
        Ok(self
            .get_balance_with_commitment(pubkey, commitment)
            .await?
            .value)
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, ClientError> {
        self.request_airdrop(pubkey, lamports).await
    }

    async fn confirm_signature(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<(), ClientError> {
        self.poll_for_signature_with_commitment(signature, commitment)
            .await
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        self.get_latest_blockhash().await
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ClientError> {
        self.send_and_confirm_transaction(transaction).await
    }
}
