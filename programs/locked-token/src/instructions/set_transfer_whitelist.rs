use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, USER_SEED};
use crate::ledger;
use crate::state::{LedgerState, UserAccount};

pub fn set_transfer_whitelist(ctx: Context<SetTransferWhitelist>, flag: bool) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let wallet = ctx.accounts.wallet.key();

    let user = &mut ctx.accounts.user_account;
    user.ensure_open(wallet, ctx.bumps.user_account);

    ledger::set_transfer_whitelist(&ctx.accounts.ledger_state, user, &admin, flag)?;

    emit!(TransferWhitelistSet {
        admin,
        wallet,
        whitelisted: flag,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTransferWhitelist<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Wallet whose whitelist flag is set; only used as the user PDA seed.
    pub wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + UserAccount::SIZE,
        seeds = [USER_SEED, ledger_state.key().as_ref(), wallet.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransferWhitelistSet {
    pub admin: Pubkey,
    pub wallet: Pubkey,
    pub whitelisted: bool,
}
