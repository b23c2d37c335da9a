use anchor_lang::prelude::*;

declare_id!("9B5GeFEtjX38RXPPngjWaTzXfcPra21LVetTGafPMr3z");

pub mod checkpoint;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;

#[program]
pub mod locked_token {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        lock_start: i64,
        lock_end: i64,
        name: String,
        symbol: String,
    ) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, lock_start, lock_end, name, symbol)
    }

    pub fn mint(ctx: Context<MintLocked>, amount: u128) -> Result<()> {
        instructions::mint::mint(ctx, amount)
    }

    pub fn checkpoint(ctx: Context<Checkpoint>) -> Result<()> {
        instructions::checkpoint::checkpoint(ctx)
    }

    pub fn unlock(ctx: Context<Unlock>) -> Result<()> {
        instructions::unlock::unlock(ctx)
    }

    pub fn transfer(ctx: Context<TransferLocked>, amount: u128) -> Result<()> {
        instructions::transfer::transfer(ctx, amount)
    }

    pub fn set_transfer_whitelist(ctx: Context<SetTransferWhitelist>, flag: bool) -> Result<()> {
        instructions::set_transfer_whitelist::set_transfer_whitelist(ctx, flag)
    }

    pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>) -> Result<()> {
        instructions::emit_unlock_quote::emit_unlock_quote(ctx)
    }
}
