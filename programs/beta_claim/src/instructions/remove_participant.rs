use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/// Removes a registered wallet. Owner-only, and only while the window is
/// pending. The last registry entry is swapped into the freed slot, so
/// index order changes; readers re-read the list after a removal.
#[event_cpi]
#[derive(Accounts)]
pub struct RemoveParticipant<'info> {
    /// The beta claim state account holding the registry
    #[account(mut)]
    pub beta_claim: Box<Account<'info, BetaClaim>>,

    /// The owner of the claim round
    #[account(constraint = owner.key() == beta_claim.owner @ BetaClaimError::OnlyOwner)]
    pub owner: Signer<'info>,
}

pub fn handle_remove_participant(
    ctx: Context<RemoveParticipant>,
    participant: Pubkey,
) -> Result<()> {
    let beta_claim = &mut ctx.accounts.beta_claim;

    let now = Clock::get()?.unix_timestamp;
    require!(beta_claim.is_pending(now), BetaClaimError::ClaimStartPassed);

    beta_claim.remove_participant(&participant)?;

    emit_cpi!(ParticipantRemoved {
        beta_claim: beta_claim.key(),
        participant,
        participant_count: beta_claim.participant_count() as u64,
    });

    Ok(())
}
