use crate::card::AceValue;
use crate::error::{BetError, DealError, RoundError};
use crate::player::Seat;

use super::{Game, GameState, MAX_BET};

impl Game {
    /// Places the round's bet, taking it from the player's bank at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, the bet is zero
    /// or above [`MAX_BET`], or the player lacks funds.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > MAX_BET {
            return Err(BetError::TooLarge { max: MAX_BET });
        }
        if self.player.bank < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.player.bank -= amount;
        self.current_bet = amount;
        self.state = GameState::AwaitingAceValue;
        log::debug!("bet {amount}, {} left in bank", self.player.bank);

        Ok(())
    }

    /// Sets what every Ace is worth for this round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the ace value.
    pub fn choose_ace_value(&mut self, ace: AceValue) -> Result<(), RoundError> {
        if self.state != GameState::AwaitingAceValue {
            return Err(RoundError::InvalidState);
        }

        self.ace_value = ace;
        self.state = GameState::InitialDeal;

        Ok(())
    }

    /// Deals the opening cards, alternating dealer then player.
    ///
    /// The dealer's first card is the hole card and is turned face-down unless
    /// debug mode is on.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not ready to deal or the card piles are
    /// inconsistent.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        for _ in 0..self.options.initial_deal {
            for seat in Seat::ALL {
                self.deal_to(seat)?;
            }
        }

        if !self.options.debug {
            if let Some(hole) = self.dealer.hand.get_mut(0) {
                hole.visible = false;
            }
        }

        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
