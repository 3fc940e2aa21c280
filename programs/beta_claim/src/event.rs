use anchor_lang::prelude::*;

/// Event emitted when a new beta claim is initialized
#[event]
pub struct BetaClaimInitialized {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Owner of the beta claim
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
}

/// Event emitted when the claim start time is set
#[event]
pub struct ClaimStartSet {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Start of the claim window
    pub claim_start: i64,
    /// End of the claim window
    pub claim_end: i64,
}

/// Event emitted when the claimable total is set
#[event]
pub struct RplTotalSet {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Total amount claimable across all participants
    pub rpl_total: u64,
}

/// Event emitted when a participant is added to the registry
#[event]
pub struct ParticipantAdded {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Address of the added participant
    pub participant: Pubkey,
    /// Registry size after the addition
    pub participant_count: u64,
}

/// Event emitted when a batch of participants is added to the registry
#[event]
pub struct ParticipantsAdded {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Number of participants added in this call
    pub count_added: u64,
    /// Registry size after the addition
    pub participant_count: u64,
}

/// Event emitted when a participant is removed from the registry
#[event]
pub struct ParticipantRemoved {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Address of the removed participant
    pub participant: Pubkey,
    /// Registry size after the removal
    pub participant_count: u64,
}

/// Event emitted when a participant claims its share
#[event]
pub struct RplClaimed {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Participant that claimed
    pub claimant: Pubkey,
    /// Amount transferred to the claimant
    pub amount: u64,
}

/// Event emitted when the beta claim is closed and the pool swept
#[event]
pub struct BetaClaimClosed {
    /// The beta claim state account public key
    pub beta_claim: Pubkey,
    /// Owner that received the sweep
    pub owner: Pubkey,
    /// Residual balance transferred to the owner
    pub amount_swept: u64,
}
