//! Wager kinds and the per-round bet table.

use core::fmt;

/// The kinds of wager a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetKind {
    /// The main blackjack hand.
    Main,
    /// Perfect Pairs side bet.
    PerfectPairs,
    /// 21+3 side bet.
    TwentyOnePlusThree,
}

impl BetKind {
    /// All bet kinds, main bet first.
    pub const ALL: [Self; 3] = [Self::Main, Self::PerfectPairs, Self::TwentyOnePlusThree];

    const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::PerfectPairs => 1,
            Self::TwentyOnePlusThree => 2,
        }
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Main => "Main",
            Self::PerfectPairs => "Perfect Pairs",
            Self::TwentyOnePlusThree => "21+3",
        })
    }
}

/// Amounts wagered this round, per bet kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bets {
    amounts: [usize; 3],
}

impl Bets {
    /// Creates an empty bet table.
    #[must_use]
    pub const fn new() -> Self {
        Self { amounts: [0; 3] }
    }

    /// Returns the amount wagered on `kind`.
    #[must_use]
    pub const fn get(&self, kind: BetKind) -> usize {
        self.amounts[kind.index()]
    }

    /// Adds `amount` to the wager on `kind`.
    pub const fn add(&mut self, kind: BetKind, amount: usize) {
        self.amounts[kind.index()] = self.amounts[kind.index()].saturating_add(amount);
    }

    /// Returns the main bet.
    #[must_use]
    pub const fn main(&self) -> usize {
        self.get(BetKind::Main)
    }

    /// Returns the sum wagered across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.amounts
            .iter()
            .fold(0, |total, &amount| total.saturating_add(amount))
    }

    /// Returns whether nothing has been wagered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates over kinds with a non-zero wager.
    pub fn iter(&self) -> impl Iterator<Item = (BetKind, usize)> + '_ {
        BetKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|&(_, amount)| amount > 0)
    }

    /// Zeroes every wager.
    pub const fn clear(&mut self) {
        self.amounts = [0; 3];
    }
}
