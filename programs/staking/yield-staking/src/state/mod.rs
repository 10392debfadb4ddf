pub mod ledger_config;
pub mod position;

pub use ledger_config::*;
pub use position::*;
