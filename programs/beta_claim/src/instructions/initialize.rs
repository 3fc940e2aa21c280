use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing a beta claim round
 *
 * Creates the beta claim state PDA and the token vault PDA that will
 * hold the pool. The vault starts empty; the owner funds it with a
 * plain token transfer afterwards, and set_rpl_total then bounds the
 * claimable total by whatever the vault actually holds.
 *
 * Access Control: the signer becomes the owner of the round
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The beta claim state account (PDA)
    /// - Stores the window, the claimable total, and the registry
    /// - Derived from: ["beta_claim", token_mint, owner]
    #[account(
        init,
        payer = owner,
        space = BetaClaim::LEN,
        seeds = [
            BETA_CLAIM_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump
    )]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// Token vault account (PDA) holding the pool
    /// - Controlled by the beta claim state PDA as token authority
    /// - Derived from: ["vault", beta_claim_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = beta_claim,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), beta_claim.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The mint of the distributed asset
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the claim round
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    beta_claim.bump = ctx.bumps.beta_claim;
    beta_claim.owner = ctx.accounts.owner.key();
    beta_claim.token_mint = ctx.accounts.token_mint.key();
    beta_claim.token_vault = ctx.accounts.token_vault.key();
    // rpl_total, claim_start, claim_end, closed and the registry start
    // at their default (unset) values

    emit_cpi!(BetaClaimInitialized {
        beta_claim: beta_claim.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}
