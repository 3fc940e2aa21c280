use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the total claimable amount
 *
 * Access Control: Only the owner can set the total
 *
 * Business Logic:
 * - Only while the window is pending
 * - The total may never exceed what the vault currently holds, so every
 *   participant share is always funded
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRplTotal<'info> {
    /// The beta claim state account to update
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// Token vault holding the pool; its balance bounds the total
    #[account(
        seeds = [VAULT_SEED.as_bytes(), beta_claim.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the claim round
    #[account(constraint = owner.key() == beta_claim.owner @ BetaClaimError::OnlyOwner)]
    pub owner: Signer<'info>,
}

pub fn handle_set_rpl_total(ctx: Context<SetRplTotal>, amount: u64) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    let now = Clock::get()?.unix_timestamp;
    require!(beta_claim.is_pending(now), BetaClaimError::ClaimStartPassed);
    require!(
        amount <= ctx.accounts.token_vault.amount,
        BetaClaimError::ExceedsPoolBalance
    );

    beta_claim.rpl_total = amount;

    emit_cpi!(RplTotalSet {
        beta_claim: beta_claim.key(),
        rpl_total: amount,
    });

    Ok(())
}
