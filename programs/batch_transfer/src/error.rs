use anchor_lang::prelude::*;

#[error_code]
pub enum BatchTransferError {
    // Validation errors
    #[msg("Recipient batch exceeds the maximum size per call")]
    BatchTooLarge,
    #[msg("Recipients and amounts must have the same length")]
    LengthMismatch,

    // Accounting errors
    #[msg("Transfer authority is not approved as delegate for the source account")]
    NotDelegated,
    #[msg("Delegated allowance is less than the total transfer amount")]
    InsufficientAllowance,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
