//! Program-wide constants.

/// Fixed-point scale applied to slopes (rate per second * SCALE).
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Max byte length of the cosmetic token name.
pub const MAX_NAME_LEN: usize = 32;

/// Max byte length of the cosmetic token symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";
pub const VAULT_SEED: &[u8] = b"vault";
pub const USER_SEED: &[u8] = b"user";
