use crate::bet::BetKind;
use crate::error::{BetError, DealError};
use crate::event::{RoundEvent, Seat};
use crate::result::RoundOutcome;
use crate::side_bet::SideBetResult;

use super::{GameState, RoundEngine};

/// Cards dealt before the player acts.
const INITIAL_CARDS: usize = 4;

impl RoundEngine {
    /// Places a wager of `amount` on `kind`, debiting the bankroll at once.
    ///
    /// Repeated calls add to the same bet, one chip at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, the amount is zero, or
    /// the bankroll cannot cover the amount. A rejected bet changes nothing.
    pub fn place_bet(&mut self, kind: BetKind, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            tracing::debug!(state = self.state.name(), ?kind, amount, "bet rejected");
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        self.bankroll.debit(amount).inspect_err(|_| {
            tracing::debug!(?kind, amount, bankroll = self.bankroll.balance(), "bet exceeds bankroll");
        })?;
        self.bets.add(kind, amount);

        self.events.push(RoundEvent::BetPlaced {
            kind,
            amount,
            bankroll: self.bankroll.balance(),
        });

        Ok(())
    }

    /// Takes back every wager placed so far, refunding it to the bankroll.
    ///
    /// Returns the refunded amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting.
    pub fn clear_bets(&mut self) -> Result<usize, BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let refunded = self.bets.total();
        self.bankroll.credit(refunded);
        self.bets.clear();

        if refunded > 0 {
            self.events.push(RoundEvent::BetsCleared { refunded });
        }

        Ok(refunded)
    }

    /// Starts a round: refills the shoe if it runs low, deals the initial
    /// four cards, resolves the side bets and checks for a natural.
    ///
    /// Cards are dealt player, dealer (face down), player, dealer (face up).
    /// On return the engine is in [`GameState::PlayerTurn`], or in
    /// [`GameState::Settlement`] when the player was dealt 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, the main bet is below the
    /// table minimum, or the shoe cannot supply the initial deal.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let minimum = self.options.minimum_bet;
        if self.bets.main() < minimum {
            tracing::debug!(main = self.bets.main(), minimum, "round start rejected");
            return Err(DealError::BelowMinimumBet { minimum });
        }

        if self.shoe.needs_refill() {
            self.refill_shoe();
        }

        if self.shoe.len() < INITIAL_CARDS {
            tracing::warn!(cards = self.shoe.len(), "shoe too short for the initial deal");
            return Err(DealError::EmptyShoe);
        }

        tracing::info!(
            main = self.bets.main(),
            perfect_pairs = self.bets.get(BetKind::PerfectPairs),
            twenty_one_plus_three = self.bets.get(BetKind::TwentyOnePlusThree),
            bankroll = self.bankroll.balance(),
            "round started"
        );

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.side_bets.clear();
        self.last_result = None;
        self.state = GameState::Dealing;
        self.events.push(RoundEvent::RoundStarted);

        self.deal_initial()?;

        self.state = GameState::SideBetResolution;
        self.resolve_side_bets();

        if self.player.value() == 21 {
            self.reveal_hole();
            let outcome = if self.dealer.value() == 21 {
                RoundOutcome::Push
            } else {
                RoundOutcome::Blackjack
            };
            self.outcome = Some(outcome);
            self.state = GameState::Settlement;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(())
    }

    fn deal_initial(&mut self) -> Result<(), DealError> {
        let card = self.draw()?;
        self.player.add_card(card);
        self.record_deal(Seat::Player, card, false);

        let card = self.draw()?;
        self.dealer.add_hole_card(card);
        self.record_deal(Seat::Dealer, card, true);

        let card = self.draw()?;
        self.player.add_card(card);
        self.record_deal(Seat::Player, card, false);

        let card = self.draw()?;
        self.dealer.add_card(card);
        self.record_deal(Seat::Dealer, card, false);

        Ok(())
    }

    /// Settles both side bets against the initial deal. Winnings are credited
    /// immediately and do not depend on the main hand.
    fn resolve_side_bets(&mut self) {
        let (Some((first, second)), Some(up_card)) =
            (self.player.initial_pair(), self.dealer.up_card())
        else {
            return;
        };

        let pairs_stake = self.bets.get(BetKind::PerfectPairs);
        if pairs_stake > 0 {
            let result = SideBetResult::perfect_pairs(pairs_stake, first, second);
            self.apply_side_bet(result);
        }

        let three_stake = self.bets.get(BetKind::TwentyOnePlusThree);
        if three_stake > 0 {
            let result = SideBetResult::twenty_one_plus_three(three_stake, [first, second, up_card]);
            self.apply_side_bet(result);
        }
    }

    fn apply_side_bet(&mut self, result: SideBetResult) {
        self.bankroll.credit(result.payout);
        tracing::info!(
            kind = ?result.kind,
            hand = ?result.hand,
            stake = result.stake,
            payout = result.payout,
            "side bet resolved"
        );
        self.side_bets.push(result);
        self.events.push(RoundEvent::SideBetResolved(result));
    }
}
