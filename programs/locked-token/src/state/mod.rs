pub mod ledger_state;
pub mod user_account;

pub use ledger_state::*;
pub use user_account::*;
