pub mod add_participant;
pub mod add_participants;
pub mod claim_rpl;
pub mod close;
pub mod initialize;
pub mod remove_participant;
pub mod set_claim_start;
pub mod set_rpl_total;

pub use add_participant::*;
pub use add_participants::*;
pub use claim_rpl::*;
pub use close::*;
pub use initialize::*;
pub use remove_participant::*;
pub use set_claim_start::*;
pub use set_rpl_total::*;
