use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_STATE_SEED, USER_SEED, VAULT_SEED};
use crate::error::LedgerError;
use crate::ledger::{self, PayoutPool};
use crate::state::{LedgerState, UserAccount};

/// Pays out of the vault PDA, signed by the ledger state PDA.
pub struct VaultPayout<'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    destination_owner: Pubkey,
    available: u64,
    state_bump: u8,
}

impl<'info> PayoutPool for VaultPayout<'info> {
    fn transfer_out(&mut self, to: &Pubkey, amount: u128) -> std::result::Result<(), LedgerError> {
        if *to != self.destination_owner {
            return Err(LedgerError::InvalidTokenAccount);
        }
        let amount = u64::try_from(amount).map_err(|_| LedgerError::MathOverflow)?;
        if amount > self.available {
            msg!("vault holds {} but {} is due", self.available, amount);
            return Err(LedgerError::PayoutFailure);
        }

        let bump = [self.state_bump];
        let seeds: &[&[u8]] = &[LEDGER_STATE_SEED, &bump];
        let signer_seeds = &[seeds];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("vault transfer failed: {:?}", e);
            LedgerError::PayoutFailure
        })?;

        self.available -= amount;
        Ok(())
    }
    fn max_payout(&self) -> u128 {
        u64::MAX as u128
    }
}

/// Permissionless crank; proceeds always go to the account owner.
pub fn unlock(ctx: Context<Unlock>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let mut pool = VaultPayout {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.owner_token_account.to_account_info(),
        authority: ctx.accounts.ledger_state.to_account_info(),
        destination_owner: ctx.accounts.owner_token_account.owner,
        available: ctx.accounts.vault.amount,
        state_bump: ctx.accounts.ledger_state.bump,
    };

    let user = &mut ctx.accounts.user_account;
    let amount = ledger::unlock(&mut ctx.accounts.ledger_state, user, &mut pool, now)?;
    if amount == 0 {
        msg!("nothing to unlock for {}", user.owner);
    }

    emit!(Unlocked {
        owner: user.owner,
        amount,
        claimed: user.claimed,
        balance: user.balance_of(),
        total_supply: ctx.accounts.ledger_state.total_supply,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Unlock<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [USER_SEED, ledger_state.key().as_ref(), user_account.owner.as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        constraint = vault.mint == ledger_state.backing_mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_token_account.mint == ledger_state.backing_mint @ LedgerError::InvalidTokenMint,
        constraint = owner_token_account.owner == user_account.owner @ LedgerError::InvalidTokenAccount,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Unlocked {
    pub owner: Pubkey,
    pub amount: u128,
    pub claimed: u128,
    pub balance: u128,
    pub total_supply: u128,
    pub timestamp: i64,
}
