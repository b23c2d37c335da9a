//! Ledger operations over `LedgerState` and `UserAccount` records.
//!
//! Each operation reconciles the accounts it touches, stages every change on
//! copies and writes them back only once all checks (and, for `unlock`, the
//! payout) have succeeded. A failed call leaves no trace.

use anchor_lang::prelude::Pubkey;

use crate::error::LedgerError;
use crate::state::{LedgerState, UserAccount};

/// Sink for backing-asset payouts.
pub trait PayoutPool {
    fn transfer_out(&mut self, to: &Pubkey, amount: u128) -> Result<(), LedgerError>;

    /// Largest amount a single `transfer_out` can move.
    fn max_payout(&self) -> u128 {
        u128::MAX
    }
}

fn ensure_admin(state: &LedgerState, caller: &Pubkey) -> Result<(), LedgerError> {
    if *caller != state.admin {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

/// Grant `amount` to `to`. Admin only.
pub fn mint(
    state: &mut LedgerState,
    to: &mut UserAccount,
    caller: &Pubkey,
    amount: u128,
    now: i64,
) -> Result<(), LedgerError> {
    ensure_admin(state, caller)?;
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let window = state.window();
    let mut next = to.clone();
    next.reconcile(&window, now)?;
    next.apply_grant(&window, amount, now)?;
    let supply = state
        .total_supply
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    *to = next;
    state.total_supply = supply;
    Ok(())
}

/// Reconcile `user` to `now` and return its unlockable amount.
pub fn unlock_amount_and_commit(
    state: &LedgerState,
    user: &mut UserAccount,
    now: i64,
) -> Result<u128, LedgerError> {
    user.reconcile(&state.window(), now)?;
    Ok(user.point.bias)
}

pub fn checkpoint(state: &LedgerState, user: &mut UserAccount, now: i64) -> Result<(), LedgerError> {
    unlock_amount_and_commit(state, user, now).map(|_| ())
}

/// Unlockable amount at `now`, computed on a scratch copy.
pub fn unlock_amount(state: &LedgerState, user: &UserAccount, now: i64) -> Result<u128, LedgerError> {
    Ok(user.projected_point(&state.window(), now)?.bias)
}

/// Pay out everything vested so far, up to the pool's per-call limit. Any
/// excess stays in bias for the next call. Returns the amount paid; zero
/// means nothing was due and the pool was not called.
pub fn unlock<P: PayoutPool>(
    state: &mut LedgerState,
    user: &mut UserAccount,
    pool: &mut P,
    now: i64,
) -> Result<u128, LedgerError> {
    let mut next = user.clone();
    next.reconcile(&state.window(), now)?;

    let amount = next.point.bias.min(pool.max_payout());
    if amount == 0 {
        *user = next;
        return Ok(0);
    }

    next.point.bias -= amount;
    next.claimed = next
        .claimed
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    if next.claimed > next.locked_balance {
        return Err(LedgerError::InsufficientBalance);
    }
    let supply = state
        .total_supply
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;

    pool.transfer_out(&user.owner, amount)?;

    *user = next;
    state.total_supply = supply;
    Ok(amount)
}

/// Transfers are allowed only if one side is whitelisted.
pub fn check_transfer_gate(from: &UserAccount, to: &UserAccount) -> Result<(), LedgerError> {
    if from.is_whitelisted() || to.is_whitelisted() {
        Ok(())
    } else {
        Err(LedgerError::Forbidden)
    }
}

/// Move `amount` of settled balance from `from` to `to`.
///
/// The sender keeps its slope; its bias is capped at what it still holds.
/// Since the slope was sized for the full pre-transfer balance, the sender's
/// remainder finishes vesting before `lock_end` and then sits fully unlocked.
/// The recipient receives the amount as already vested (bias), with no slope.
pub fn transfer(
    state: &LedgerState,
    from: &mut UserAccount,
    to: &mut UserAccount,
    caller: &Pubkey,
    amount: u128,
    now: i64,
) -> Result<(), LedgerError> {
    if *caller != from.owner {
        return Err(LedgerError::Unauthorized);
    }
    if from.owner == to.owner {
        return Err(LedgerError::SelfTransfer);
    }
    check_transfer_gate(from, to)?;
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let window = state.window();
    let mut sender = from.clone();
    let mut recipient = to.clone();
    sender.reconcile(&window, now)?;
    recipient.reconcile(&window, now)?;

    if amount > sender.balance_of() {
        return Err(LedgerError::InsufficientBalance);
    }
    sender.locked_balance = sender
        .locked_balance
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;
    sender.point.bias = sender.point.bias.min(sender.balance_of());

    recipient.locked_balance = recipient
        .locked_balance
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;
    recipient.point.bias = recipient
        .point
        .bias
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    *from = sender;
    *to = recipient;
    Ok(())
}

/// Admin only.
pub fn set_transfer_whitelist(
    state: &LedgerState,
    user: &mut UserAccount,
    caller: &Pubkey,
    flag: bool,
) -> Result<(), LedgerError> {
    ensure_admin(state, caller)?;
    user.whitelisted = flag;
    Ok(())
}
