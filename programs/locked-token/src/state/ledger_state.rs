use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::utils::time::LockWindow;

/// Singleton ledger PDA. Everything but `total_supply` is fixed at initialization.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    /// Sole authority for mint and whitelist changes.
    pub admin: Pubkey,
    /// Mint of the backing asset paid out on unlock.
    pub backing_mint: Pubkey,
    /// Backing asset vault (PDA token account owned by this state).
    pub vault: Pubkey,
    /// Vesting start (Unix seconds, UTC).
    pub lock_start: i64,
    /// Vesting end (Unix seconds, UTC). Every grant is fully vested here.
    pub lock_end: i64,
    /// Sum of `balance_of` over all user accounts.
    pub total_supply: u128,
    /// Decimals of the backing mint (cosmetic).
    pub decimals: u8,
    pub bump: u8,
    pub vault_bump: u8,
    pub name: String,
    pub symbol: String,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // admin
        32 + // backing_mint
        32 + // vault
        8 +  // lock_start
        8 +  // lock_end
        16 + // total_supply
        1 +  // decimals
        1 +  // bump
        1 +  // vault_bump
        4 + MAX_NAME_LEN +
        4 + MAX_SYMBOL_LEN;

    /// Window bounds were validated by `initialize_ledger`.
    pub fn window(&self) -> LockWindow {
        LockWindow {
            start: self.lock_start,
            end: self.lock_end,
        }
    }
}
