use anchor_lang::prelude::*;

#[error_code]
pub enum BetaClaimError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Caller is not a registered participant")]
    NotParticipant,

    // Claim window errors
    #[msg("Claim period has already started")]
    ClaimStartPassed,
    #[msg("Invalid claim start time")]
    InvalidStartTime,
    #[msg("Claim start time not set")]
    ClaimStartNotSet,
    #[msg("Claim period has not started")]
    ClaimNotStarted,
    #[msg("Claim period has ended")]
    ClaimPeriodEnded,
    #[msg("Claim period has not ended yet")]
    ClaimPeriodNotEnded,
    #[msg("Beta claim has already been closed")]
    AlreadyClosed,

    // Registry validation errors
    #[msg("Participant address cannot be the zero address")]
    NullAddress,
    #[msg("Participant already exists")]
    DuplicateParticipant,
    #[msg("Participant does not exist")]
    ParticipantNotFound,
    #[msg("Participant registry is full")]
    RegistryFull,
    #[msg("Batch exceeds the maximum size per call")]
    BatchTooLarge,
    #[msg("Participant index out of range")]
    IndexOutOfBounds,

    // Accounting errors
    #[msg("Claimable total exceeds the pool balance")]
    ExceedsPoolBalance,
    #[msg("Participant has already claimed")]
    AlreadyClaimed,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the beta claim token mint")]
    TokenMintMismatch,
}
