use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, USER_SEED};
use crate::error::LedgerError;
use crate::ledger;
use crate::state::{LedgerState, UserAccount};

pub fn transfer(ctx: Context<TransferLocked>, amount: u128) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let recipient = ctx.accounts.recipient.key();

    let recipient_account = &mut ctx.accounts.recipient_account;
    recipient_account.ensure_open(recipient, ctx.bumps.recipient_account);

    ledger::transfer(
        &ctx.accounts.ledger_state,
        &mut ctx.accounts.sender_account,
        recipient_account,
        &owner,
        amount,
        now,
    )?;

    emit!(Transferred {
        from: owner,
        to: recipient,
        amount,
        from_balance: ctx.accounts.sender_account.balance_of(),
        to_balance: recipient_account.balance_of(),
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferLocked<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Receiving wallet; only used as the user PDA seed.
    #[account(constraint = recipient.key() != owner.key() @ LedgerError::SelfTransfer)]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, ledger_state.key().as_ref(), owner.key().as_ref()],
        bump = sender_account.bump
    )]
    pub sender_account: Account<'info, UserAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + UserAccount::SIZE,
        seeds = [USER_SEED, ledger_state.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub recipient_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Transferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
    pub from_balance: u128,
    pub to_balance: u128,
    pub timestamp: i64,
}
