use anchor_lang::prelude::*;

declare_id!("HMWVBcEwcPGxNvMnRiWsAhLs9nVTrxCDuomTzMSstRSr");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Beta Claim Program
 *
 * Distributes a fixed pool of tokens to a whitelisted set of beta
 * participants over a bounded time window.
 *
 * Key Features:
 * - Owner-managed participant registry (single adds, batched adds,
 *   swap-remove deletion)
 * - Fixed-length claim window derived from a configurable start time
 * - Equal pro-rata shares computed from the registry size at claim time
 * - One claim per participant, enforced before the outbound transfer
 * - Terminal close that sweeps the residual pool balance to the owner
 *
 * Architecture:
 * - Beta Claim PDA: owner, window, claimable total, and the registry
 * - Token Vault PDA: holds the pool, authority is the beta claim PDA
 *
 * Workflow:
 * 1. Owner initializes the round and funds the vault
 * 2. Owner registers participants and sets the claimable total and the
 *    window start (all only until the window opens)
 * 3. Participants claim their share while the window is open
 * 4. Owner closes after the window ends; leftovers are swept back
 */
#[program]
pub mod beta_claim {
    use super::*;

    /**
     * Creates the beta claim state and the pool vault
     *
     * The vault starts empty; fund it with a token transfer before
     * setting the claimable total.
     *
     * Access Control: the signer becomes the owner
     */
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    /**
     * Registers one wallet as a participant
     *
     * @param participant - Wallet to whitelist
     *
     * Access Control: Owner only, while the window is pending
     */
    pub fn add_participant(ctx: Context<AddParticipant>, participant: Pubkey) -> Result<()> {
        handle_add_participant(ctx, participant)
    }

    /**
     * Registers a batch of wallets, all or nothing
     *
     * @param participants - Wallets to whitelist (at most MAX_ADD_BATCH)
     *
     * Access Control: Owner only, while the window is pending
     */
    pub fn add_participants(
        ctx: Context<AddParticipants>,
        participants: Vec<Pubkey>,
    ) -> Result<()> {
        handle_add_participants(ctx, participants)
    }

    /**
     * Removes a registered wallet from the registry
     *
     * @param participant - Wallet to remove
     *
     * Access Control: Owner only, while the window is pending
     */
    pub fn remove_participant(ctx: Context<RemoveParticipant>, participant: Pubkey) -> Result<()> {
        handle_remove_participant(ctx, participant)
    }

    /**
     * Sets the claim window start time
     *
     * The end time is derived automatically (start + CLAIM_PERIOD).
     * Re-callable until the configured start passes.
     *
     * @param start_time - Unix timestamp when claiming should begin
     *
     * Access Control: Owner only
     */
    pub fn set_claim_start(ctx: Context<SetClaimStart>, start_time: i64) -> Result<()> {
        handle_set_claim_start(ctx, start_time)
    }

    /**
     * Sets the total claimable amount
     *
     * Bounded by the vault's current balance.
     *
     * @param amount - Total claimable, in the mint's base units
     *
     * Access Control: Owner only, while the window is pending
     */
    pub fn set_rpl_total(ctx: Context<SetRplTotal>, amount: u64) -> Result<()> {
        handle_set_rpl_total(ctx, amount)
    }

    /**
     * Claims the caller's pro-rata share of the pool
     *
     * Access Control: Any registered participant, once, while the
     * window is open
     */
    pub fn claim_rpl(ctx: Context<ClaimRpl>) -> Result<()> {
        handle_claim_rpl(ctx)
    }

    /**
     * Closes the round after the window ends
     *
     * Sweeps the remaining pool balance to the owner and freezes the
     * contract permanently.
     *
     * Access Control: Owner only
     */
    pub fn close(ctx: Context<Close>) -> Result<()> {
        handle_close(ctx)
    }
}
