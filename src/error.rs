//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while placing or clearing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted while the table is betting.
    #[error("bets can only be placed between rounds")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The wager exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The main bet is under the table minimum.
    #[error("main bet is below the table minimum of {minimum}")]
    BelowMinimumBet {
        /// The configured minimum main bet.
        minimum: usize,
    },
    /// The shoe ran out of cards.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit and stand are only accepted on the player's turn.
    #[error("not the player's turn")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The dealer only plays on the dealer's turn.
    #[error("not the dealer's turn")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round is not ready to settle.
    #[error("round is not ready to settle")]
    InvalidState,
}

/// Errors that can occur when acknowledging a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClearError {
    /// The round has not been settled yet.
    #[error("round has not been settled")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The shoe can only be reshuffled between rounds.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors raised by the bankroll ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debit exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards remain.
    #[error("no cards left in the shoe")]
    Empty,
}

impl From<LedgerError> for BetError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
        }
    }
}

impl From<ShoeError> for DealError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}

impl From<ShoeError> for ActionError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}

impl From<ShoeError> for DealerError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}
