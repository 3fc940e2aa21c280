use anchor_lang::prelude::*;

use crate::constants::{CLAIM_PERIOD, MAX_ADD_BATCH, MAX_PARTICIPANTS};
use crate::error::BetaClaimError;

/// A single registry entry. An address appears at most once in the
/// registry; `claimed` transitions false -> true exactly once and never
/// resets, even if the participant is later read through any projection.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    /// Wallet eligible to claim a share of the pool
    pub address: Pubkey,
    /// Whether this wallet has already claimed
    pub claimed: bool,
}

impl Participant {
    pub const LEN: usize = 32 + 1;
}

/**
 * Beta claim state account
 *
 * Core state of one claim round: the owner, the pool vault, the claim
 * window, and the participant registry. One account exists per
 * (token_mint, owner) pair.
 *
 * Derivation: ["beta_claim", token_mint, owner]
 *
 * Lifecycle:
 * 1. Created during initialize; the owner then funds the vault
 * 2. Registry populated and window/total configured while pending
 * 3. Participants claim while the window is open
 * 4. Owner closes after the window ends; the residual balance is swept
 *    and `closed` is set permanently
 *
 * The account is never deallocated: the `closed` flag stays readable and
 * a second close attempt must fail rather than hit a missing account.
 */
#[account]
#[derive(Default, Debug)]
pub struct BetaClaim {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the claim round
    /// - Exclusively controls registry mutation, window/total
    ///   configuration, and closing
    pub owner: Pubkey,

    /// Token mint address of the distributed asset
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the pool, controlled by this account
    /// - Derived from: ["vault", beta_claim_key]
    pub token_vault: Pubkey,

    /// Total amount claimable across all participants
    /// - Settable only while pending and only up to the vault balance
    pub rpl_total: u64,

    /// Start of the claim window (unix timestamp, 0 = unset)
    /// - Immutable once the current time passes it
    pub claim_start: i64,

    /// End of the claim window (unix timestamp)
    /// - Always claim_start + CLAIM_PERIOD whenever claim_start is set
    pub claim_end: i64,

    /// Set permanently by close; no claims or balance-affecting
    /// operations are permitted afterwards
    pub closed: bool,

    /// Participant registry, ordered and deduplicated
    /// - Removal is swap-with-last-and-pop, so index order is not stable
    ///   across removals; readers must re-read the full list after a
    ///   mutation instead of caching indices
    pub participants: Vec<Participant>,
}

impl BetaClaim {
    pub const LEN: usize =
        8 + 1 + 32 + 32 + 32 + 8 + 8 + 8 + 1 + 4 + MAX_PARTICIPANTS * Participant::LEN;

    // ===== claim window =====

    /// Whether a claim start has been configured.
    pub fn start_is_set(&self) -> bool {
        self.claim_start > 0
    }

    /// Pending: the window has not opened yet (or was never configured).
    /// Registry and configuration mutations are only legal while pending.
    pub fn is_pending(&self, now: i64) -> bool {
        !self.start_is_set() || now < self.claim_start
    }

    /// Open: claims are permitted. The window is [claim_start, claim_end).
    pub fn is_open(&self, now: i64) -> bool {
        self.start_is_set() && now >= self.claim_start && now < self.claim_end && !self.closed
    }

    /// Set the window start and derive the end from the fixed period.
    /// Re-callable any number of times until the configured start passes.
    pub fn set_claim_start(&mut self, start_time: i64, now: i64) -> Result<()> {
        require!(self.is_pending(now), BetaClaimError::ClaimStartPassed);
        require!(start_time > 0, BetaClaimError::InvalidStartTime);
        let end = start_time
            .checked_add(CLAIM_PERIOD)
            .ok_or(BetaClaimError::ArithmeticOverflow)?;
        self.claim_start = start_time;
        self.claim_end = end;
        Ok(())
    }

    // ===== participant registry =====

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn participant_exists(&self, address: &Pubkey) -> bool {
        self.index_of(address).is_some()
    }

    /// Position of `address` in the backing sequence, if registered.
    pub fn index_of(&self, address: &Pubkey) -> Option<usize> {
        self.participants.iter().position(|p| p.address == *address)
    }

    /// Participant address at `index`; range error past the end.
    pub fn participant_address(&self, index: usize) -> Result<Pubkey> {
        self.participants
            .get(index)
            .map(|p| p.address)
            .ok_or_else(|| error!(BetaClaimError::IndexOutOfBounds))
    }

    /// Claimed flag of a registered participant.
    pub fn participant_claimed(&self, address: &Pubkey) -> Result<bool> {
        let index = self
            .index_of(address)
            .ok_or(BetaClaimError::ParticipantNotFound)?;
        Ok(self.participants[index].claimed)
    }

    pub fn add_participant(&mut self, address: Pubkey) -> Result<()> {
        require!(address != Pubkey::default(), BetaClaimError::NullAddress);
        require!(
            !self.participant_exists(&address),
            BetaClaimError::DuplicateParticipant
        );
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            BetaClaimError::RegistryFull
        );
        self.participants.push(Participant {
            address,
            claimed: false,
        });
        Ok(())
    }

    /// Add a whole batch or nothing. Every element is validated (null
    /// key, duplicate within the batch, already registered, capacity)
    /// before the first entry is appended.
    pub fn add_participants(&mut self, addresses: &[Pubkey]) -> Result<()> {
        require!(addresses.len() <= MAX_ADD_BATCH, BetaClaimError::BatchTooLarge);
        require!(
            self.participants.len() + addresses.len() <= MAX_PARTICIPANTS,
            BetaClaimError::RegistryFull
        );
        for (i, address) in addresses.iter().enumerate() {
            require!(*address != Pubkey::default(), BetaClaimError::NullAddress);
            require!(
                !self.participant_exists(address),
                BetaClaimError::DuplicateParticipant
            );
            require!(
                !addresses[..i].contains(address),
                BetaClaimError::DuplicateParticipant
            );
        }
        for address in addresses {
            self.participants.push(Participant {
                address: *address,
                claimed: false,
            });
        }
        Ok(())
    }

    /// Remove a registered participant. Swap-with-last-and-pop keeps the
    /// backing sequence dense; the last entry takes the removed slot.
    pub fn remove_participant(&mut self, address: &Pubkey) -> Result<()> {
        let index = self
            .index_of(address)
            .ok_or(BetaClaimError::ParticipantNotFound)?;
        self.participants.swap_remove(index);
        Ok(())
    }

    // ===== claim ledger =====

    /// Per-participant share: rpl_total divided by the current registry
    /// size, truncating. The remainder stays in the vault and is swept
    /// on close. Zero when the registry is empty.
    pub fn claim_amount(&self) -> u64 {
        let count = self.participants.len() as u64;
        if count == 0 {
            0
        } else {
            self.rpl_total / count
        }
    }

    /// Record a claim. Errors when the address is not registered or has
    /// already claimed; the flag transition is one-way.
    pub fn mark_claimed(&mut self, address: &Pubkey) -> Result<()> {
        let index = self
            .index_of(address)
            .ok_or(BetaClaimError::NotParticipant)?;
        let entry = &mut self.participants[index];
        require!(!entry.claimed, BetaClaimError::AlreadyClaimed);
        entry.claimed = true;
        Ok(())
    }
}
