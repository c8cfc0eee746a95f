//! Round engine and state management.

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::bet::{BetKind, Bets};
use crate::card::Card;
use crate::error::{ClearError, ReshuffleError, ShoeError};
use crate::event::{RoundEvent, Seat};
use crate::hand::{DealerHand, PlayerHand};
use crate::options::TableOptions;
use crate::result::{RoundOutcome, RoundResult};
use crate::shoe::Shoe;
use crate::side_bet::SideBetResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-seat blackjack engine that owns the shoe, the bankroll and the
/// current round.
///
/// Every command checks the current [`GameState`] first and is rejected
/// without side effects when issued at the wrong time. Visible changes are
/// queued as [`RoundEvent`]s for a presentation layer.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    options: TableOptions,
    shoe: Shoe,
    state: GameState,
    bankroll: Bankroll,
    bets: Bets,
    player: PlayerHand,
    dealer: DealerHand,
    /// Outcome of the current round, fixed early on a natural or bust.
    outcome: Option<RoundOutcome>,
    side_bets: Vec<SideBetResult>,
    last_result: Option<RoundResult>,
    events: Vec<RoundEvent>,
}

impl RoundEngine {
    /// Creates an engine with a freshly shuffled shoe seeded by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameState, RoundEngine, TableOptions};
    ///
    /// let engine = RoundEngine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.state(), GameState::Betting);
    /// assert_eq!(engine.bankroll(), 1000);
    /// assert_eq!(engine.cards_remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, seed);
        Self::with_shoe(options, shoe)
    }

    /// Creates an engine dealing from a prepared shoe.
    #[must_use]
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Self {
        Self {
            bankroll: Bankroll::new(options.starting_bankroll),
            options,
            shoe,
            state: GameState::Betting,
            bets: Bets::new(),
            player: PlayerHand::new(),
            dealer: DealerHand::new(),
            outcome: None,
            side_bets: Vec::new(),
            last_result: None,
            events: Vec::new(),
        }
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is betting.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != GameState::Betting {
            return Err(ReshuffleError::InvalidState);
        }
        self.refill_shoe();
        Ok(())
    }

    fn refill_shoe(&mut self) {
        self.shoe.refill();
        let cards = self.shoe.len();
        tracing::info!(cards, "shoe reshuffled");
        self.events.push(RoundEvent::Reshuffled { cards });
    }

    /// Draws a card from the shoe, rebuilding it if it ran dry mid-round.
    ///
    /// Cards already on the table stay where they are, so the rebuilt shoe
    /// briefly holds a second copy of them.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.shoe.is_empty() {
            tracing::warn!(state = self.state.name(), "shoe exhausted mid-round");
            self.refill_shoe();
        }
        self.shoe.deal_one()
    }

    fn record_deal(&mut self, seat: Seat, card: Card, concealed: bool) {
        tracing::debug!(?seat, ?card, concealed, "card dealt");
        self.events.push(RoundEvent::CardDealt {
            seat,
            card,
            concealed,
        });
    }

    fn reveal_hole(&mut self) {
        if let Some(card) = self.dealer.reveal_hole() {
            tracing::debug!(?card, "hole card revealed");
            self.events.push(RoundEvent::HoleCardRevealed(card));
        }
    }

    /// Drains the queued events in the order they happened.
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll.balance()
    }

    /// Returns the wagers placed for the current round.
    #[must_use]
    pub const fn bets(&self) -> &Bets {
        &self.bets
    }

    /// Returns the wager placed on `kind`.
    #[must_use]
    pub const fn bet(&self, kind: BetKind) -> usize {
        self.bets.get(kind)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &PlayerHand {
        &self.player
    }

    /// Returns the dealer's hand. Check
    /// [`DealerHand::concealed_index`] before showing the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's total.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer total a player may see: the up card alone while the
    /// hole card is concealed, the full hand afterwards.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.visible_value()
    }

    /// Returns the main-hand outcome once it is known.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the side bets resolved this round.
    #[must_use]
    pub fn side_bet_results(&self) -> &[SideBetResult] {
        &self.side_bets
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Acknowledges a settled round and returns to betting.
    ///
    /// Clears both hands and all bets. The bankroll is untouched; the payout
    /// was applied during settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn acknowledge_round_over(&mut self) -> Result<(), ClearError> {
        if self.state != GameState::RoundOver {
            tracing::debug!(state = self.state.name(), "acknowledge rejected");
            return Err(ClearError::InvalidState);
        }

        self.bets.clear();
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.side_bets.clear();
        self.state = GameState::Betting;
        self.events.push(RoundEvent::RoundCleared);
        Ok(())
    }
}
