pub mod initialize_ledger;
pub mod stake;
pub mod claim_yield;
pub mod withdraw;
pub mod update_yields;
pub mod add_rewards;
pub mod withdraw_rewards;
pub mod query;

pub use initialize_ledger::*;
pub use stake::*;
pub use claim_yield::*;
pub use withdraw::*;
pub use update_yields::*;
pub use add_rewards::*;
pub use withdraw_rewards::*;
pub use query::*;
