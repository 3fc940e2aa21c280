use anchor_lang::prelude::*;

/// Event emitted after a uniform-amount batch payout
#[event]
pub struct TokenAmountTransferred {
    /// Token mint of the dispersed asset
    pub token_mint: Pubkey,
    /// Holder whose balance funded the payout
    pub holder: Pubkey,
    /// Number of recipients paid
    pub recipient_count: u64,
    /// Amount credited to each recipient
    pub amount: u64,
    /// Total moved out of the holder's account
    pub total: u64,
}

/// Event emitted after a per-recipient-amount batch payout
#[event]
pub struct TokenAmountsTransferred {
    /// Token mint of the dispersed asset
    pub token_mint: Pubkey,
    /// Holder whose balance funded the payout
    pub holder: Pubkey,
    /// Number of recipients paid
    pub recipient_count: u64,
    /// Total moved out of the holder's account
    pub total: u64,
}
