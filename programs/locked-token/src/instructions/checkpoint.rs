use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, USER_SEED};
use crate::ledger;
use crate::state::{LedgerState, UserAccount};

/// Permissionless: anyone may bring an account's point up to date.
pub fn checkpoint(ctx: Context<Checkpoint>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = &mut ctx.accounts.user_account;
    let unlockable = ledger::unlock_amount_and_commit(&ctx.accounts.ledger_state, user, now)?;

    emit!(Checkpointed {
        owner: user.owner,
        slope: user.point.slope,
        unlockable,
        timestamp: user.point.timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Checkpoint<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [USER_SEED, ledger_state.key().as_ref(), user_account.owner.as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,
}

#[event]
pub struct Checkpointed {
    pub owner: Pubkey,
    pub slope: u128,
    pub unlockable: u128,
    pub timestamp: i64,
}
