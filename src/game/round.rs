use crate::error::RoundError;

use super::{Game, GameOver, GameState};

impl Game {
    /// Moves both hands to the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved yet or the card
    /// piles are inconsistent.
    pub fn discard_hands(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::Discard {
            return Err(RoundError::InvalidState);
        }

        self.dealer.hand.merge_into(&mut self.discard_pile)?;
        self.player.hand.merge_into(&mut self.discard_pile)?;
        self.state = GameState::ContinueCheck;

        Ok(())
    }

    /// Ends the round.
    ///
    /// A bankrupt player is out regardless of `keep_playing`. Otherwise the
    /// game returns to betting or ends at the player's request.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands have not been discarded yet.
    pub fn end_round(&mut self, keep_playing: bool) -> Result<GameState, RoundError> {
        if self.state != GameState::ContinueCheck {
            return Err(RoundError::InvalidState);
        }

        self.state = if self.is_bankrupt() {
            GameState::Over(GameOver::Bankrupt)
        } else if keep_playing {
            GameState::AwaitingBet
        } else {
            GameState::Over(GameOver::Quit)
        };

        if let GameState::Over(reason) = self.state {
            log::info!("game over: {reason:?}");
        }

        Ok(self.state)
    }
}
