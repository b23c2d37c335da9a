//! Slope/bias checkpointing of a single account.
//!
//! Every grant contributes `amount * SCALE / remaining` to the account's
//! slope. Because all grants end at the same `lock_end`, the sum of those
//! per-grant rates is itself a single linear rate that runs out exactly at
//! `lock_end`, so one accumulator stands in for the whole grant history.
//! Accrual is folded into `bias` lazily, whenever the account is touched.

use crate::error::LedgerError;
use crate::state::{UserAccount, UserPoint};
use crate::utils::math::{accrued_over, rate_for};
use crate::utils::time::LockWindow;

impl UserAccount {
    /// Bring `point` forward to `now`. No-op if `now` is not past the last
    /// checkpoint. Bias is capped at the account balance, and equals it once
    /// the window has ended.
    pub fn reconcile(&mut self, window: &LockWindow, now: i64) -> Result<(), LedgerError> {
        if now <= self.point.timestamp {
            return Ok(());
        }

        let balance = self.balance_of();
        let bias = if window.has_ended(now) {
            balance
        } else {
            let elapsed = window.accrual_span(self.point.timestamp, now);
            let accrued = accrued_over(self.point.slope, elapsed)?;
            self.point
                .bias
                .checked_add(accrued)
                .ok_or(LedgerError::MathOverflow)?
                .min(balance)
        };

        self.point.bias = bias;
        self.point.timestamp = now;
        Ok(())
    }

    /// Fold a new grant into the account. Callers reconcile to `now` first.
    /// Supply bookkeeping is left to the ledger.
    pub fn apply_grant(
        &mut self,
        window: &LockWindow,
        amount: u128,
        now: i64,
    ) -> Result<(), LedgerError> {
        let remaining = window.remaining(now);
        if remaining == 0 {
            // Issued at or after lock end: vests immediately.
            self.point.bias = self
                .point
                .bias
                .checked_add(amount)
                .ok_or(LedgerError::MathOverflow)?;
        } else {
            let rate = rate_for(amount, remaining)?;
            self.point.slope = self
                .point
                .slope
                .checked_add(rate)
                .ok_or(LedgerError::MathOverflow)?;
        }

        self.locked_balance = self
            .locked_balance
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(())
    }

    /// Point as it would look after reconciling to `now`, without touching `self`.
    pub fn projected_point(&self, window: &LockWindow, now: i64) -> Result<UserPoint, LedgerError> {
        let mut scratch = self.clone();
        scratch.reconcile(window, now)?;
        Ok(scratch.point)
    }
}
