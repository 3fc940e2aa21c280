use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Constant values used throughout the beta claim program. These control
 * the claim window length, registry bounds, and PDA derivation.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Length of the claim window (4 weeks)
/// - Applied when setting claim_start to calculate claim_end
/// - Value: 4 weeks * 7 days * 24 hours * 60 minutes * 60 seconds = 2,419,200 seconds
pub const CLAIM_PERIOD: i64 = 4 * 7 * 24 * 60 * 60; // 4 weeks in seconds

/// ===== REGISTRY BOUNDS =====

/// Maximum number of participants the registry can hold
/// - Bounds the size of the beta claim state account
pub const MAX_PARTICIPANTS: usize = 256;

/// Maximum participants accepted by a single add_participants call
/// - Larger lists must be chunked into multiple calls by the operator
pub const MAX_ADD_BATCH: usize = 130;

/// ===== PDA SEED CONSTANTS =====

/// Seed for beta claim state PDA derivation
/// - Used in: ["beta_claim", token_mint, owner]
/// - One claim round exists per (token_mint, owner) pair
pub const BETA_CLAIM_SEED: &str = "beta_claim";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", beta_claim_key]
/// - The vault is controlled by the beta claim state PDA
pub const VAULT_SEED: &str = "vault";
