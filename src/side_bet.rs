//! Perfect Pairs and 21+3 side-bet evaluation.
//!
//! Both bets are decided by the initial deal alone: Perfect Pairs looks at the
//! player's two cards, 21+3 at the player's two cards plus the dealer's up
//! card. Payouts are `stake * multiplier`; the stake itself was debited when
//! the bet was placed and is never returned.

use core::fmt;

use crate::bet::BetKind;
use crate::card::Card;

/// A winning Perfect Pairs combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairHand {
    /// Same rank and same suit.
    Perfect,
    /// Same rank, different suits of the same color.
    Colored,
    /// Same rank, different colors.
    Mixed,
}

impl PairHand {
    /// Payout multiplier applied to the stake.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::Perfect => 25,
            Self::Colored => 12,
            Self::Mixed => 6,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Perfect => "perfect pair",
            Self::Colored => "colored pair",
            Self::Mixed => "mixed pair",
        }
    }
}

/// A winning 21+3 combination, listed from highest to lowest payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreeCardHand {
    /// Three cards of the same rank and suit.
    SuitedTrips,
    /// Consecutive ranks in one suit.
    StraightFlush,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Consecutive ranks, mixed suits.
    Straight,
    /// One suit, ranks not consecutive.
    Flush,
}

impl ThreeCardHand {
    /// Payout multiplier applied to the stake.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::SuitedTrips => 100,
            Self::StraightFlush => 40,
            Self::ThreeOfAKind => 30,
            Self::Straight => 10,
            Self::Flush => 5,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::SuitedTrips => "suited trips",
            Self::StraightFlush => "straight flush",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
        }
    }
}

/// Classifies the player's first two cards for Perfect Pairs.
///
/// Returns `None` when the ranks differ.
#[must_use]
pub fn perfect_pairs(first: Card, second: Card) -> Option<PairHand> {
    if first.rank != second.rank {
        return None;
    }

    if first.suit == second.suit {
        Some(PairHand::Perfect)
    } else if first.color() == second.color() {
        Some(PairHand::Colored)
    } else {
        Some(PairHand::Mixed)
    }
}

/// Perfect Pairs multiplier for two cards, 0 when they do not pair.
#[must_use]
pub fn perfect_pairs_multiplier(first: Card, second: Card) -> usize {
    perfect_pairs(first, second).map_or(0, PairHand::multiplier)
}

/// Classifies a three-card poker hand for 21+3.
///
/// Aces rank high only: Q-K-A is a straight, A-2-3 is not.
#[must_use]
pub fn twenty_one_plus_three(cards: [Card; 3]) -> Option<ThreeCardHand> {
    let mut ranks = cards.map(Card::poker_rank);
    ranks.sort_unstable();

    let is_flush = cards[0].suit == cards[1].suit && cards[1].suit == cards[2].suit;
    let is_trips = ranks[0] == ranks[2];
    let is_straight =
        ranks[0].checked_add(1) == Some(ranks[1]) && ranks[1].checked_add(1) == Some(ranks[2]);

    if is_trips && is_flush {
        Some(ThreeCardHand::SuitedTrips)
    } else if is_straight && is_flush {
        Some(ThreeCardHand::StraightFlush)
    } else if is_trips {
        Some(ThreeCardHand::ThreeOfAKind)
    } else if is_straight {
        Some(ThreeCardHand::Straight)
    } else if is_flush {
        Some(ThreeCardHand::Flush)
    } else {
        None
    }
}

/// 21+3 multiplier for three cards, 0 when nothing qualifies.
#[must_use]
pub fn twenty_one_plus_three_multiplier(cards: [Card; 3]) -> usize {
    twenty_one_plus_three(cards).map_or(0, ThreeCardHand::multiplier)
}

/// The combination a side bet was decided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideBetHand {
    /// A Perfect Pairs combination.
    Pair(PairHand),
    /// A 21+3 combination.
    ThreeCard(ThreeCardHand),
}

impl SideBetHand {
    /// Payout multiplier applied to the stake.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::Pair(hand) => hand.multiplier(),
            Self::ThreeCard(hand) => hand.multiplier(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Pair(hand) => hand.name(),
            Self::ThreeCard(hand) => hand.name(),
        }
    }
}

/// Outcome of one side bet, resolved right after the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBetResult {
    /// Which side bet was resolved.
    pub kind: BetKind,
    /// The amount wagered.
    pub stake: usize,
    /// The winning combination, if any.
    pub hand: Option<SideBetHand>,
    /// Amount credited to the bankroll.
    pub payout: usize,
}

impl SideBetResult {
    /// Resolves a Perfect Pairs wager.
    #[must_use]
    pub fn perfect_pairs(stake: usize, first: Card, second: Card) -> Self {
        Self::resolve(
            BetKind::PerfectPairs,
            stake,
            perfect_pairs(first, second).map(SideBetHand::Pair),
        )
    }

    /// Resolves a 21+3 wager.
    #[must_use]
    pub fn twenty_one_plus_three(stake: usize, cards: [Card; 3]) -> Self {
        Self::resolve(
            BetKind::TwentyOnePlusThree,
            stake,
            twenty_one_plus_three(cards).map(SideBetHand::ThreeCard),
        )
    }

    fn resolve(kind: BetKind, stake: usize, hand: Option<SideBetHand>) -> Self {
        let payout = hand.map_or(0, |hand| stake.saturating_mul(hand.multiplier()));
        Self {
            kind,
            stake,
            hand,
            payout,
        }
    }

    /// Returns whether the bet paid out.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.payout > 0
    }
}

impl fmt::Display for SideBetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hand {
            Some(hand) if self.payout > 0 => write!(
                f,
                "{}: {} pays {}x (+{})",
                self.kind,
                hand.name(),
                hand.multiplier(),
                self.payout
            ),
            _ => write!(f, "{}: no win (-{})", self.kind, self.stake),
        }
    }
}
