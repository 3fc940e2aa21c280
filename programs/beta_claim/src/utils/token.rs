use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Transfer out of the pool vault, signed by the beta claim state PDA.
/// Supports both SPL Token and Token 2022 via transfer_checked.
pub fn transfer_from_vault<'a>(
    vault_authority: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: vault,
        mint,
        to,
        authority: vault_authority,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}
