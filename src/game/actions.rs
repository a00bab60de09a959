use crate::card::Card;
use crate::error::{ActionError, DeckError};
use crate::hand::BLACKJACK;
use crate::player::Seat;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the card piles are
    /// inconsistent.
    pub fn hit(&mut self) -> Result<&Card, ActionError> {
        self.ensure_player_turn()?;

        self.deal_to(Seat::Player)?;

        let total = self.player.total_hand_value(self.ace_value);
        if total > BLACKJACK {
            log::debug!("player bust with {total}");
            self.state = GameState::DealerTurn;
        }

        self.player
            .hand
            .cards()
            .last()
            .ok_or(ActionError::Deck(DeckError::Empty))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;

        Ok(())
    }
}
