use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_vault;

/**
 * Account context for closing the beta claim
 *
 * Terminal operation: sweeps whatever the vault still holds (unclaimed
 * shares plus division dust) to the owner and freezes the round.
 *
 * Access Control: Only the owner
 *
 * Business Logic:
 * - Requires a configured window whose end has passed
 * - A second close always fails; the state account stays alive so the
 *   closed flag remains readable
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Close<'info> {
    /// The beta claim state account
    /// - Will be modified to set the closed flag
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// Token vault containing the residual pool balance
    /// - Derived from: ["vault", beta_claim_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), beta_claim.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the sweep
    #[account(
        mut,
        token::mint = beta_claim.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == beta_claim.token_mint @ BetaClaimError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the claim round
    #[account(constraint = owner.key() == beta_claim.owner @ BetaClaimError::OnlyOwner)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_close(ctx: Context<Close>) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    // ===== VALIDATION PHASE =====

    require!(!beta_claim.closed, BetaClaimError::AlreadyClosed);
    require!(beta_claim.start_is_set(), BetaClaimError::ClaimStartNotSet);

    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= beta_claim.claim_end,
        BetaClaimError::ClaimPeriodNotEnded
    );

    let token_mint_key = beta_claim.token_mint;
    let owner_key = beta_claim.owner;
    let bump = beta_claim.bump;
    let beta_claim_key = beta_claim.key();

    // ===== EFFECTS PHASE =====

    beta_claim.closed = true;

    // ===== INTERACTIONS PHASE =====

    let remaining_balance = ctx.accounts.token_vault.amount;

    if remaining_balance > 0 {
        let seeds = &[
            BETA_CLAIM_SEED.as_bytes(),
            token_mint_key.as_ref(),
            owner_key.as_ref(),
            &[bump],
        ];
        let signer = &[&seeds[..]];

        transfer_from_vault(
            ctx.accounts.beta_claim.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.token_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(BetaClaimClosed {
        beta_claim: beta_claim_key,
        owner: owner_key,
        amount_swept: remaining_balance,
    });

    Ok(())
}
