use anchor_lang::prelude::*;

/// Custom error codes for the locked token ledger.
#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized: admin or owner signature required")]
    Unauthorized,

    #[msg("Forbidden: transfer requires a whitelisted sender or recipient")]
    Forbidden,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Payout from the backing vault failed")]
    PayoutFailure,

    #[msg("Invalid lock window (lock_start must precede lock_end)")]
    InvalidLockWindow,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token name or symbol")]
    InvalidMetadata,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Sender and recipient must differ")]
    SelfTransfer,

    #[msg("Math overflow")]
    MathOverflow,
}
