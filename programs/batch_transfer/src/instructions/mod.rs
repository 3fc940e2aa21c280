pub mod transfer_token_amount;
pub mod transfer_token_amounts;

pub use transfer_token_amount::*;
pub use transfer_token_amounts::*;
