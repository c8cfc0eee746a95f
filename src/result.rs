//! Round outcome types for settlement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::side_bet::SideBetResult;

/// Outcome of the main hand. Exactly one is produced per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player's first two cards total 21 and the dealer's do not.
    Blackjack,
    /// Player's total beats the dealer's.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals, including two naturals.
    Push,
    /// Dealer's total beats the player's.
    Loss,
    /// Player went over 21.
    Bust,
}

impl RoundOutcome {
    /// Returns whether the main stake comes back with a profit.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack!",
            Self::Win => "You win",
            Self::DealerBust => "Dealer busts, you win",
            Self::Push => "Push",
            Self::Loss => "Dealer wins",
            Self::Bust => "Bust",
        })
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The main-hand outcome.
    pub outcome: RoundOutcome,
    /// The main bet.
    pub stake: usize,
    /// Amount credited to the bankroll for the main hand.
    pub payout: usize,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Side bets resolved after the initial deal.
    pub side_bets: Vec<SideBetResult>,
    /// Total wagered this round across all bet kinds.
    pub total_wagered: usize,
    /// Bankroll after settlement.
    pub bankroll: usize,
}

impl RoundResult {
    /// Net result of the round including side bets (positive = profit).
    #[must_use]
    pub fn net(&self) -> isize {
        let side_payout: usize = self.side_bets.iter().map(|bet| bet.payout).sum();
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = (self.payout + side_payout) as isize - self.total_wagered as isize;
        net
    }
}
