use crate::card::Card;
use crate::error::ActionError;
use crate::event::{RoundEvent, Seat};
use crate::result::RoundOutcome;

use super::{GameState, RoundEngine};

impl RoundEngine {
    fn ensure_player_turn(&self, action: &'static str) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            tracing::debug!(state = self.state.name(), action, "action rejected");
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn with [`RoundOutcome::Bust`] and
    /// moves the round to settlement; otherwise the player acts again.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self.draw()?;
        self.player.add_card(card);
        self.record_deal(Seat::Player, card, false);

        let value = self.player.value();
        if value > 21 {
            tracing::debug!(value, "player bust");
            self.events.push(RoundEvent::PlayerBust { value });
            self.outcome = Some(RoundOutcome::Bust);
            self.state = GameState::Settlement;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand) and hand over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn("stand")?;

        tracing::debug!(value = self.player.value(), "player stands");
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
