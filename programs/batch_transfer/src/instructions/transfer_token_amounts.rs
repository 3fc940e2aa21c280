use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::instructions::transfer_token_amount::check_allowance;
use crate::utils::{batch_total, delegate_transfer};

/// Account context for a per-recipient-amount batch payout. Identical
/// custody model to the uniform payout; the amounts array pairs with
/// the remaining accounts by position.
#[event_cpi]
#[derive(Accounts)]
pub struct TransferTokenAmounts<'info> {
    /// Delegate authority PDA that signs every payout leg
    /// - Derived from: ["transfer_authority"]
    /// CHECK: Never read or written, only used as a CPI signer
    #[account(
        seeds = [TRANSFER_AUTHORITY_SEED.as_bytes()],
        bump
    )]
    pub transfer_authority: UncheckedAccount<'info>,

    /// Holder's token account funding the payout
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

pub fn handle_transfer_token_amounts<'a>(
    ctx: Context<'_, '_, '_, 'a, TransferTokenAmounts<'a>>,
    amounts: Vec<u64>,
) -> Result<()> {
    let recipients = ctx.remaining_accounts;

    // ===== VALIDATION PHASE =====

    require!(
        recipients.len() <= MAX_BATCH_RECIPIENTS,
        BatchTransferError::BatchTooLarge
    );
    require!(
        amounts.len() == recipients.len(),
        BatchTransferError::LengthMismatch
    );

    let total = batch_total(&amounts)?;
    check_allowance(
        &ctx.accounts.source,
        &ctx.accounts.transfer_authority.key(),
        total,
    )?;

    // ===== INTERACTIONS PHASE =====

    let bump = ctx.bumps.transfer_authority;
    let seeds = &[TRANSFER_AUTHORITY_SEED.as_bytes(), &[bump]];
    let signer = &[&seeds[..]];

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        delegate_transfer(
            ctx.accounts.transfer_authority.to_account_info(),
            ctx.accounts.source.to_account_info(),
            recipient.clone(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            *amount,
            ctx.accounts.token_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(TokenAmountsTransferred {
        token_mint: ctx.accounts.token_mint.key(),
        holder: ctx.accounts.holder.key(),
        recipient_count: recipients.len() as u64,
        total,
    });

    Ok(())
}
