use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// One payout leg: moves `amount` out of the holder's source account
/// with the transfer authority PDA signing as SPL delegate. The token
/// program decrements the delegated allowance on every leg and rejects
/// the transfer once the allowance or balance runs out, which aborts
/// the whole transaction. Supports both SPL Token and Token 2022.
pub fn delegate_transfer<'a>(
    transfer_authority: AccountInfo<'a>,
    source: AccountInfo<'a>,
    recipient: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: source,
        mint,
        to: recipient,
        authority: transfer_authority,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}
