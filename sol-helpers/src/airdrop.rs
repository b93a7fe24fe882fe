//! Conditional test-network funding.

use crate::{rpc::AsyncRpcClient, Result};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

/// Requests an airdrop for `pubkey` only if its balance is below `minimum_balance`.
///
/// Returns the balance after the call. When the balance already meets the minimum,
/// it is returned unchanged and no request is sent. Otherwise exactly one request for
/// `airdrop_amount` lamports is sent and confirmed at `commitment` before the balance is
/// read again.
///
/// A failed request or a confirmation timeout propagates as [`crate::Error::Rpc`].
/// There is no retry.
pub async fn airdrop_if_required<C>(
    client: &C,
    pubkey: &Pubkey,
    airdrop_amount: u64,
    minimum_balance: u64,
    commitment: CommitmentConfig,
) -> Result<u64>
where
    C: AsyncRpcClient + ?Sized,
{
    let balance = client.get_balance(pubkey, commitment).await?;
    if balance >= minimum_balance {
        debug!(%pubkey, balance, minimum_balance, "Balance sufficient, skipping airdrop");
        return Ok(balance);
    }

    info!(%pubkey, balance, airdrop_amount, "Requesting airdrop");
    let signature = client.request_airdrop(pubkey, airdrop_amount).await?;
    client.confirm_signature(&signature, commitment).await?;
    debug!(%signature, "Airdrop confirmed");

    Ok(client.get_balance(pubkey, commitment).await?)
}
