use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for registering a batch of wallets
 *
 * Access Control: Only the owner, and only while the window is pending
 *
 * Business Logic:
 * - The whole batch is validated before anything is inserted; a null
 *   key, a duplicate within the batch, or an already-registered wallet
 *   rejects the entire call with no partial insertion
 * - At most MAX_ADD_BATCH wallets per call; the operator chunks larger
 *   lists into multiple calls
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddParticipants<'info> {
    /// The beta claim state account holding the registry
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// The owner of the claim round
    #[account(constraint = owner.key() == beta_claim.owner @ BetaClaimError::OnlyOwner)]
    pub owner: Signer<'info>,
}

pub fn handle_add_participants(
    ctx: Context<AddParticipants>,
    participants: Vec<Pubkey>,
) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    let now = Clock::get()?.unix_timestamp;
    require!(beta_claim.is_pending(now), BetaClaimError::ClaimStartPassed);

    beta_claim.add_participants(&participants)?;

    emit_cpi!(ParticipantsAdded {
        beta_claim: beta_claim.key(),
        count_added: participants.len() as u64,
        participant_count: beta_claim.participant_count() as u64,
    });

    Ok(())
}
