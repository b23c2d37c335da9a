use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, USER_SEED};
use crate::ledger;
use crate::state::{LedgerState, UserAccount};

/// Read-only: reports what `unlock` would pay right now without committing
/// the checkpoint.
pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let st = &ctx.accounts.ledger_state;
    let user = &ctx.accounts.user_account;
    let unlock_amount = ledger::unlock_amount(st, user, now)?;

    emit!(UnlockQuote {
        owner: user.owner,
        unlock_amount,
        balance: user.balance_of(),
        claimed: user.claimed,
        slope: user.point.slope,
        bias: user.point.bias,
        checkpoint_ts: user.point.timestamp,
        whitelisted: user.is_whitelisted(),
        total_supply: st.total_supply,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitUnlockQuote<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [USER_SEED, ledger_state.key().as_ref(), user_account.owner.as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,
}

#[event]
pub struct UnlockQuote {
    pub owner: Pubkey,
    pub unlock_amount: u128,
    pub balance: u128,
    pub claimed: u128,
    /// Stored point, as of `checkpoint_ts`.
    pub slope: u128,
    pub bias: u128,
    pub checkpoint_ts: i64,
    pub whitelisted: bool,
    pub total_supply: u128,
    pub timestamp: i64,
}
