//! Ordered events emitted by the engine for a presentation layer.
//!
//! The engine records every visible change as it happens. A consumer drains
//! the queue with [`RoundEngine::take_events`](crate::RoundEngine::take_events)
//! and may replay it at any pace; draining never changes engine state.

use crate::bet::BetKind;
use crate::card::Card;
use crate::result::RoundOutcome;
use crate::side_bet::SideBetResult;

/// Who a card was dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The shoe was rebuilt and shuffled.
    Reshuffled {
        /// Cards in the fresh shoe.
        cards: usize,
    },
    /// A wager was placed and debited.
    BetPlaced {
        /// The bet kind.
        kind: BetKind,
        /// The amount added.
        amount: usize,
        /// Bankroll after the debit.
        bankroll: usize,
    },
    /// All wagers were taken back before the deal.
    BetsCleared {
        /// Amount refunded to the bankroll.
        refunded: usize,
    },
    /// The initial deal is about to begin.
    RoundStarted,
    /// A card left the shoe.
    CardDealt {
        /// Who received it.
        seat: Seat,
        /// The card. Presentation must not show it while `concealed`.
        card: Card,
        /// Whether the card was dealt face down.
        concealed: bool,
    },
    /// A side bet was decided and any winnings credited.
    SideBetResolved(SideBetResult),
    /// The dealer turned the hole card face up.
    HoleCardRevealed(Card),
    /// The player's total went over 21.
    PlayerBust {
        /// The busted total.
        value: u8,
    },
    /// The main hand was settled.
    RoundSettled {
        /// The outcome.
        outcome: RoundOutcome,
        /// Amount credited to the bankroll.
        payout: usize,
        /// Bankroll after the credit.
        bankroll: usize,
    },
    /// Hands and bets were cleared for the next round.
    RoundCleared,
}
