use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, MAX_NAME_LEN, MAX_SYMBOL_LEN, VAULT_SEED};
use crate::error::LedgerError;
use crate::state::LedgerState;
use crate::utils::time::LockWindow;

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    lock_start: i64,
    lock_end: i64,
    name: String,
    symbol: String,
) -> Result<()> {
    LockWindow::new(lock_start, lock_end)?;
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LEN,
        LedgerError::InvalidMetadata
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
        LedgerError::InvalidMetadata
    );

    let st = &mut ctx.accounts.ledger_state;
    st.admin = ctx.accounts.admin.key();
    st.backing_mint = ctx.accounts.backing_mint.key();
    st.vault = ctx.accounts.vault.key();
    st.lock_start = lock_start;
    st.lock_end = lock_end;
    st.total_supply = 0;
    st.decimals = ctx.accounts.backing_mint.decimals;
    st.bump = ctx.bumps.ledger_state;
    st.vault_bump = ctx.bumps.vault;
    st.name = name;
    st.symbol = symbol;

    emit!(LedgerInitialized {
        admin: st.admin,
        backing_mint: st.backing_mint,
        vault: st.vault,
        lock_start,
        lock_end,
        name: st.name.clone(),
        symbol: st.symbol.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = admin,
        token::mint = backing_mint,
        token::authority = ledger_state,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub backing_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub backing_mint: Pubkey,
    pub vault: Pubkey,
    pub lock_start: i64,
    pub lock_end: i64,
    pub name: String,
    pub symbol: String,
}
