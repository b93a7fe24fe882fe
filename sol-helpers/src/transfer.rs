use crate::rpc::AsyncRpcClient;
use crate::{Error, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::transaction::Transaction;
use solana_system_interface::instruction as system_instruction;
use tracing::info;

/// Sends `lamports` from `from` to `to` in a single system transfer and waits for confirmation.
///
/// `from` pays the fee.
pub async fn transfer_lamports<C>(
    client: &C,
    from: &dyn Signer,
    to: &Pubkey,
    lamports: u64,
) -> Result<Signature>
where
    C: AsyncRpcClient + ?Sized,
{
    if lamports == 0 {
        return Err(Error::InvalidArgument(
            "transfer amount must be greater than zero".to_string(),
        ));
    }

    let payer = from.pubkey();
    let ix = system_instruction::transfer(&payer, to, lamports);
    let blockhash = client.get_latest_blockhash().await?;
    let signers: &[&dyn Signer] = &[from];
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer), signers, blockhash);

    let signature = client.send_and_confirm_transaction(&tx).await?;
    info!(from = %payer, %to, lamports, %signature, "Transfer confirmed");
    Ok(signature)
}
