use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::utils::{delegate_transfer, uniform_total};

/**
 * Account context for a uniform-amount batch payout
 *
 * The recipient token accounts are passed as remaining accounts; each
 * one is validated by the token program itself during transfer_checked
 * (wrong mint or a non-token account fails the transfer and therefore
 * the whole transaction).
 *
 * Access Control: Any holder. The only authorization is the delegate
 * allowance the holder granted to the transfer authority PDA.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferTokenAmount<'info> {
    /// Delegate authority PDA that signs every payout leg
    /// - Derived from: ["transfer_authority"]
    /// CHECK: Never read or written, only used as a CPI signer
    #[account(
        seeds = [TRANSFER_AUTHORITY_SEED.as_bytes()],
        bump
    )]
    pub transfer_authority: UncheckedAccount<'info>,

    /// Holder's token account funding the payout
    /// - Must be owned by the holder
    /// - Must have the transfer authority PDA approved as delegate
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = holder,
        token::token_program = token_program,
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    /// The mint of the dispersed asset
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The holder paying out from its own balance
    pub holder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays `amount` to every recipient token account in remaining accounts
 *
 * Validation Process:
 * 1. Batch size within MAX_BATCH_RECIPIENTS
 * 2. The transfer authority PDA is the source account's delegate and
 *    the delegated allowance covers amount x recipients
 * 3. Each leg is a delegate-signed transfer; one failing leg aborts
 *    the whole transaction, so no partial payout survives
 */
pub fn handle_transfer_token_amount<'a>(
    ctx: Context<'_, '_, '_, 'a, TransferTokenAmount<'a>>,
    amount: u64,
) -> Result<()> {
    let recipients = ctx.remaining_accounts;

    // ===== VALIDATION PHASE =====

    require!(
        recipients.len() <= MAX_BATCH_RECIPIENTS,
        BatchTransferError::BatchTooLarge
    );

    let total = uniform_total(amount, recipients.len())?;
    check_allowance(
        &ctx.accounts.source,
        &ctx.accounts.transfer_authority.key(),
        total,
    )?;

    // ===== INTERACTIONS PHASE =====

    let bump = ctx.bumps.transfer_authority;
    let seeds = &[TRANSFER_AUTHORITY_SEED.as_bytes(), &[bump]];
    let signer = &[&seeds[..]];

    for recipient in recipients.iter() {
        delegate_transfer(
            ctx.accounts.transfer_authority.to_account_info(),
            ctx.accounts.source.to_account_info(),
            recipient.clone(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.token_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(TokenAmountTransferred {
        token_mint: ctx.accounts.token_mint.key(),
        holder: ctx.accounts.holder.key(),
        recipient_count: recipients.len() as u64,
        amount,
        total,
    });

    Ok(())
}

/// The committed total must be covered by the allowance the holder
/// granted to the transfer authority. The token program enforces this
/// again on every leg; checking up front turns a mid-batch abort into
/// a clean accounting error.
pub(crate) fn check_allowance(
    source: &TokenAccount,
    transfer_authority: &Pubkey,
    total: u64,
) -> Result<()> {
    match source.delegate {
        COption::Some(delegate) if delegate == *transfer_authority => {}
        _ => return err!(BatchTransferError::NotDelegated),
    }
    require!(
        source.delegated_amount >= total,
        BatchTransferError::InsufficientAllowance
    );
    Ok(())
}
