use anchor_lang::prelude::*;

declare_id!("HkLMqmuNfjqgBm9j8AqdzKnXooQwHCAuRP6MFNLx7ok8");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Batch Transfer Program
 *
 * Pays out many recipients from one holder's balance in a single atomic
 * transaction. The program keeps no state of its own: every call is a
 * self-contained payout funded by a delegate allowance the holder has
 * granted to the program's transfer authority PDA beforehand.
 *
 * Key Features:
 * - Uniform payouts (same amount to every recipient) and per-recipient
 *   amounts
 * - All-or-nothing: one failing transfer aborts the whole transaction,
 *   no recipient keeps funds from a failed call
 * - No privileged role: any holder may disperse from its own balance;
 *   the delegate allowance is the only authorization
 * - Support for both SPL Token and Token 2022
 *
 * Workflow:
 * 1. Holder approves the ["transfer_authority"] PDA as delegate for at
 *    least the total to be paid out
 * 2. Holder invokes a transfer instruction with the recipient token
 *    accounts passed as remaining accounts
 * 3. The program moves each share out of the holder's account with the
 *    PDA signing as delegate, consuming the allowance
 */
#[program]
pub mod batch_transfer {
    use super::*;

    /**
     * Transfers the same amount to every recipient
     *
     * The committed total is amount x number of recipients; the call
     * fails before any transfer when the delegate allowance cannot
     * cover it.
     *
     * @param amount - Amount per recipient, in the mint's base units
     *
     * Access Control: Any holder, against its own allowance
     */
    pub fn transfer_token_amount<'a>(
        ctx: Context<'_, '_, '_, 'a, TransferTokenAmount<'a>>,
        amount: u64,
    ) -> Result<()> {
        handle_transfer_token_amount(ctx, amount)
    }

    /**
     * Transfers a distinct amount to each recipient
     *
     * The amounts array must match the recipient list in length and
     * order; the committed total is the sum of all amounts.
     *
     * @param amounts - Amount per recipient, in the mint's base units
     *
     * Access Control: Any holder, against its own allowance
     */
    pub fn transfer_token_amounts<'a>(
        ctx: Context<'_, '_, '_, 'a, TransferTokenAmounts<'a>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        handle_transfer_token_amounts(ctx, amounts)
    }
}
