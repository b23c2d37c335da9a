//! Lock window arithmetic (Unix seconds, UTC).
//! - remaining(now) = lock_end - max(now, lock_start), floored at 0
//! - accrual_span(from, to) = portion of (from, to] inside [lock_start, lock_end]
//! - vesting is complete once now >= lock_end (inclusive)

use crate::error::LedgerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockWindow {
    pub start: i64,
    pub end: i64,
}

impl LockWindow {
    /// The window must open after the Unix epoch (`start > 0`, else
    /// `InvalidTimestamp`) and be non-empty (`start < end`, else
    /// `InvalidLockWindow`).
    pub fn new(start: i64, end: i64) -> Result<Self, LedgerError> {
        if start <= 0 {
            return Err(LedgerError::InvalidTimestamp);
        }
        if start >= end {
            return Err(LedgerError::InvalidLockWindow);
        }
        Ok(Self { start, end })
    }

    /// Seconds left until full vesting. Before the window opens this is the
    /// full duration; at or after `end` it is zero.
    pub fn remaining(&self, now: i64) -> u128 {
        let from = now.max(self.start);
        if from >= self.end {
            0
        } else {
            (self.end - from) as u128
        }
    }

    /// Seconds of `(from, to]` that fall inside the window.
    pub fn accrual_span(&self, from: i64, to: i64) -> u128 {
        let lo = from.max(self.start);
        let hi = to.min(self.end);
        if hi <= lo {
            0
        } else {
            (hi - lo) as u128
        }
    }

    /// True if now is at or after the lock end.
    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const T: i64 = 1_658_736_065;
    const MONTH: i64 = 30 * SECONDS_PER_DAY;

    fn window() -> LockWindow {
        LockWindow::new(T, T + MONTH).unwrap()
    }

    #[test]
    fn rejects_inverted_or_empty_window() {
        assert!(matches!(
            LockWindow::new(T, T),
            Err(LedgerError::InvalidLockWindow)
        ));
        assert!(matches!(
            LockWindow::new(T + 1, T),
            Err(LedgerError::InvalidLockWindow)
        ));
        assert!(matches!(
            LockWindow::new(0, T),
            Err(LedgerError::InvalidTimestamp)
        ));
    }

    #[test]
    fn remaining_is_full_duration_before_start() {
        let w = window();
        assert_eq!(w.remaining(T - SECONDS_PER_DAY), MONTH as u128);
        assert_eq!(w.remaining(T), MONTH as u128);
    }

    #[test]
    fn remaining_counts_down_and_clamps_at_end() {
        let w = window();
        assert_eq!(w.remaining(T + 7 * SECONDS_PER_DAY), (23 * SECONDS_PER_DAY) as u128);
        assert_eq!(w.remaining(T + MONTH), 0);
        assert_eq!(w.remaining(T + 2 * MONTH), 0);
    }

    #[test]
    fn accrual_span_ignores_time_outside_window() {
        let w = window();
        // minted a day early, checked a week in: only the week counts
        assert_eq!(
            w.accrual_span(T - SECONDS_PER_DAY, T + 7 * SECONDS_PER_DAY),
            (7 * SECONDS_PER_DAY) as u128
        );
        assert_eq!(w.accrual_span(T - 10, T), 0);
        assert_eq!(w.accrual_span(T + MONTH - 5, T + MONTH + 500), 5);
        assert_eq!(w.accrual_span(T + MONTH, T + 2 * MONTH), 0);
        assert_eq!(w.accrual_span(T + 10, T + 5), 0);
    }

    #[test]
    fn end_boundary_inclusive() {
        let w = window();
        assert!(!w.has_ended(T + MONTH - 1));
        assert!(w.has_ended(T + MONTH));
    }
}
