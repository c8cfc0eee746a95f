use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, SettleError};
use crate::event::{RoundEvent, Seat};
use crate::options::RoundingMode;
use crate::result::{RoundOutcome, RoundResult};

use super::{GameState, RoundEngine};

/// The dealer draws below this total and stands on it, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Decides the main hand from final totals.
const fn compare_totals(player: u8, dealer: u8) -> RoundOutcome {
    if dealer > 21 {
        RoundOutcome::DealerBust
    } else if player > dealer {
        RoundOutcome::Win
    } else if player < dealer {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    }
}

impl RoundEngine {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws until reaching 17 or more.
    /// Soft 17 stands like hard 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            tracing::debug!(state = self.state.name(), "dealer play rejected");
            return Err(DealerError::InvalidState);
        }

        self.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.add_card(card);
            self.record_deal(Seat::Dealer, card, false);
            drawn_cards.push(card);
        }

        tracing::debug!(
            value = self.dealer.value(),
            drawn = drawn_cards.len(),
            "dealer stands"
        );
        self.state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Rounds a payout according to the rounding mode.
    fn round_payout(&self, amount: f64, mode: RoundingMode) -> usize {
        round_amount(amount, mode)
    }

    /// Amount credited for the main hand: the stake back plus winnings.
    fn main_payout(&self, outcome: RoundOutcome, stake: usize) -> usize {
        match outcome {
            RoundOutcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (stake as f64) * self.options.blackjack_pays;
                stake.saturating_add(self.round_payout(winnings, self.options.rounding_blackjack))
            }
            RoundOutcome::Win | RoundOutcome::DealerBust => stake.saturating_mul(2),
            RoundOutcome::Push => stake,
            RoundOutcome::Loss | RoundOutcome::Bust => 0,
        }
    }

    /// Settles the main hand and credits the payout.
    ///
    /// The outcome is the one fixed earlier for a natural or a bust, otherwise
    /// it is decided by comparing totals. The hole card is revealed if it is
    /// still face down.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in settlement.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != GameState::Settlement {
            tracing::debug!(state = self.state.name(), "settle rejected");
            return Err(SettleError::InvalidState);
        }

        self.reveal_hole();

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = self
            .outcome
            .unwrap_or_else(|| compare_totals(player_value, dealer_value));

        let stake = self.bets.main();
        let payout = self.main_payout(outcome, stake);
        self.bankroll.credit(payout);
        let bankroll = self.bankroll.balance();

        tracing::info!(
            ?outcome,
            stake,
            payout,
            player_value,
            dealer_value,
            bankroll,
            "round settled"
        );

        let result = RoundResult {
            outcome,
            stake,
            payout,
            player_value,
            dealer_value,
            side_bets: self.side_bets.clone(),
            total_wagered: self.bets.total(),
            bankroll,
        };

        self.outcome = Some(outcome);
        self.last_result = Some(result.clone());
        self.state = GameState::RoundOver;
        self.events.push(RoundEvent::RoundSettled {
            outcome,
            payout,
            bankroll,
        });

        Ok(result)
    }
}
