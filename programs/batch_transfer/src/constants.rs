/// Maximum recipients accepted per call
/// - Oversized batches are rejected with BatchTooLarge before any
///   transfer runs
/// - Larger payout lists are chunked into multiple calls by the caller
pub const MAX_BATCH_RECIPIENTS: usize = 375;

/// Seed for the delegate authority PDA
/// - Used in: ["transfer_authority"]
/// - Holders approve this PDA as SPL delegate; it only ever signs
///   transfers out of the calling holder's own account
pub const TRANSFER_AUTHORITY_SEED: &str = "transfer_authority";
