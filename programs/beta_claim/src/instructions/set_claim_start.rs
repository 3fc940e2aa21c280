use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the claim window start
 *
 * Access Control: Only the owner can set the start time
 *
 * Business Logic:
 * - The start can be moved any number of times while the window is
 *   still pending
 * - Once the configured start passes, the window is immutable
 * - The end is always derived as start + CLAIM_PERIOD
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimStart<'info> {
    /// The beta claim state account to update
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// The owner of the claim round
    /// - Must match the owner stored in the beta claim state
    #[account(constraint = owner.key() == beta_claim.owner @ BetaClaimError::OnlyOwner)]
    pub owner: Signer<'info>,
}

pub fn handle_set_claim_start(ctx: Context<SetClaimStart>, start_time: i64) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    let now = Clock::get()?.unix_timestamp;
    beta_claim.set_claim_start(start_time, now)?;

    emit_cpi!(ClaimStartSet {
        beta_claim: beta_claim.key(),
        claim_start: beta_claim.claim_start,
        claim_end: beta_claim.claim_end,
    });

    Ok(())
}
