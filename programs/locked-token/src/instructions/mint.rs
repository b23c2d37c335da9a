use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, USER_SEED};
use crate::ledger;
use crate::state::{LedgerState, UserAccount};

pub fn mint(ctx: Context<MintLocked>, amount: u128) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let recipient = ctx.accounts.recipient.key();

    let user = &mut ctx.accounts.user_account;
    user.ensure_open(recipient, ctx.bumps.user_account);

    ledger::mint(&mut ctx.accounts.ledger_state, user, &admin, amount, now)?;

    emit!(Minted {
        recipient,
        amount,
        slope: user.point.slope,
        bias: user.point.bias,
        locked_balance: user.locked_balance,
        total_supply: ctx.accounts.ledger_state.total_supply,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintLocked<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Wallet receiving the grant; only used as the user PDA seed.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + UserAccount::SIZE,
        seeds = [USER_SEED, ledger_state.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Minted {
    pub recipient: Pubkey,
    pub amount: u128,
    pub slope: u128,
    pub bias: u128,
    pub locked_balance: u128,
    pub total_supply: u128,
    pub timestamp: i64,
}
