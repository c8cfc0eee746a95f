//! The player's bankroll ledger.

use crate::error::LedgerError;

/// A non-negative money balance.
///
/// Every wager goes through [`debit`](Self::debit) and every payout through
/// [`credit`](Self::credit); the balance can never be observed below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: usize,
}

impl Bankroll {
    /// Creates a bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Removes `amount` from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance; the balance is left unchanged.
    pub const fn debit(&mut self, amount: usize) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance.
    pub const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_rejects_overdraft() {
        let mut bankroll = Bankroll::new(50);
        assert_eq!(bankroll.debit(51), Err(LedgerError::InsufficientFunds));
        assert_eq!(bankroll.balance(), 50);

        assert_eq!(bankroll.debit(50), Ok(()));
        assert_eq!(bankroll.balance(), 0);
    }

    #[test]
    fn credit_adds_to_balance() {
        let mut bankroll = Bankroll::new(0);
        bankroll.credit(25);
        assert_eq!(bankroll.balance(), 25);
        assert_eq!(bankroll.debit(26), Err(LedgerError::InsufficientFunds));

        bankroll.credit(usize::MAX);
        assert_eq!(bankroll.balance(), usize::MAX);
    }
}
