use anchor_lang::prelude::*;

/// Checkpointed vesting state of one account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserPoint {
    /// Combined accrual rate of all grants, value per second scaled by `SCALE`.
    pub slope: u128,
    /// Vested but not yet unlocked, as of `timestamp`.
    pub bias: u128,
    /// Instant of the last reconciliation (Unix seconds).
    pub timestamp: i64,
}

impl UserPoint {
    pub const SIZE: usize = 16 + 16 + 8;
}

/// Per-wallet ledger record (PDA), created on first use and never closed.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserAccount {
    pub owner: Pubkey,
    /// Granted amount plus net transfers. Grants only ever raise it.
    pub locked_balance: u128,
    /// Cumulative amount paid out from the vault.
    pub claimed: u128,
    pub point: UserPoint,
    /// Exempts this account from the transfer restriction.
    pub whitelisted: bool,
    /// Set once the PDA has been claimed for `owner`.
    pub initialized: bool,
    pub bump: u8,
}

impl UserAccount {
    pub const SIZE: usize =
        32 + // owner
        16 + // locked_balance
        16 + // claimed
        UserPoint::SIZE +
        1 +  // whitelisted
        1 +  // initialized
        1;   // bump

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            initialized: true,
            bump,
            ..Self::default()
        }
    }

    /// Claim a zeroed PDA for `owner`; an already open account is left as is.
    /// Every wallet, the all-zero key included, goes through the flag.
    pub fn ensure_open(&mut self, owner: Pubkey, bump: u8) {
        if !self.initialized {
            *self = Self::new(owner, bump);
        }
    }

    /// Locked tokens still held: granted (net of transfers) minus paid out.
    pub fn balance_of(&self) -> u128 {
        self.locked_balance.saturating_sub(self.claimed)
    }

    pub fn is_whitelisted(&self) -> bool {
        self.whitelisted
    }
}
