pub mod initialize_ledger;
pub mod mint;
pub mod checkpoint;
pub mod unlock;
pub mod transfer;
pub mod set_transfer_whitelist;
pub mod emit_unlock_quote;

pub use initialize_ledger::*;
pub use mint::*;
pub use checkpoint::*;
pub use unlock::*;
pub use transfer::*;
pub use set_transfer_whitelist::*;
pub use emit_unlock_quote::*;
