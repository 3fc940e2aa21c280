pub mod beta_claim_state;

pub use beta_claim_state::*;
