use anchor_lang::prelude::*;

use crate::error::BatchTransferError;

/// Total allowance a uniform payout commits: amount x recipient count.
pub fn uniform_total(amount: u64, recipient_count: usize) -> Result<u64> {
    amount
        .checked_mul(recipient_count as u64)
        .ok_or_else(|| error!(BatchTransferError::ArithmeticOverflow))
}

/// Total allowance a per-recipient payout commits: the sum of all
/// amounts.
pub fn batch_total(amounts: &[u64]) -> Result<u64> {
    amounts.iter().try_fold(0u64, |total, amount| {
        total
            .checked_add(*amount)
            .ok_or_else(|| error!(BatchTransferError::ArithmeticOverflow))
    })
}
