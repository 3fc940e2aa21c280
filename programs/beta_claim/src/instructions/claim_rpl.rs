use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_from_vault;

/**
 * Account context for claiming a participant share
 *
 * Any registered participant may claim exactly once while the window is
 * open. The share is rpl_total divided by the registry size at claim
 * time, truncating; the division remainder stays in the vault for the
 * final sweep.
 *
 * Access Control: Any signer; eligibility is decided by the registry
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimRpl<'info> {
    /// The beta claim state account
    /// - Will be modified to mark the claimant as claimed
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", beta_claim_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), beta_claim.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the share
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = beta_claim.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == beta_claim.token_mint @ BetaClaimError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The participant claiming its share
    pub claimant: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * Validation Process:
 * 1. The round is not closed and the window is currently open
 * 2. The caller is a registered participant that has not claimed
 * 3. The vault can fund the share
 *
 * The claimed flag is committed before the outbound token transfer, so
 * a re-entrant call from the transfer cannot claim twice.
 */
pub fn handle_claim_rpl(ctx: Context<ClaimRpl>) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    // ===== VALIDATION PHASE =====

    require!(!beta_claim.closed, BetaClaimError::AlreadyClosed);

    let now = Clock::get()?.unix_timestamp;
    require!(
        beta_claim.start_is_set() && now >= beta_claim.claim_start,
        BetaClaimError::ClaimNotStarted
    );
    require!(now < beta_claim.claim_end, BetaClaimError::ClaimPeriodEnded);

    let claimant_key = ctx.accounts.claimant.key();
    require!(
        beta_claim.participant_exists(&claimant_key),
        BetaClaimError::NotParticipant
    );

    let claim_amount = beta_claim.claim_amount();
    require!(
        ctx.accounts.token_vault.amount >= claim_amount,
        BetaClaimError::InsufficientVaultBalance
    );

    // Copies needed for PDA signing after the mutable borrow ends
    let token_mint_key = beta_claim.token_mint;
    let owner_key = beta_claim.owner;
    let bump = beta_claim.bump;
    let beta_claim_key = beta_claim.key();

    // ===== EFFECTS PHASE =====

    // Errors here when the participant has already claimed
    beta_claim.mark_claimed(&claimant_key)?;

    // ===== INTERACTIONS PHASE =====

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
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claim_amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    emit_cpi!(RplClaimed {
        beta_claim: beta_claim_key,
        claimant: claimant_key,
        amount: claim_amount,
    });

    Ok(())
}
