use crate::error::ShowdownError;
use crate::options::RoundingMode;
use crate::player::Seat;
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

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

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer turns the hole card face-up and draws until the visible
    /// total reaches `dealer_stands_on` (17 by default). The dealer draws even
    /// when the player is bust.
    ///
    /// Returns the number of cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the card piles are
    /// inconsistent.
    pub fn dealer_play(&mut self) -> Result<usize, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if let Some(hole) = self.dealer.hand.get_mut(0) {
            hole.visible = true;
        }

        let mut drawn = 0;
        while self.dealer.total_hand_value(self.ace_value) < self.options.dealer_stands_on {
            self.deal_to(Seat::Dealer)?;
            drawn += 1;
        }
        log::debug!(
            "dealer drew {drawn}, stands on {}",
            self.dealer.total_hand_value(self.ace_value)
        );

        self.state = GameState::Resolution;

        Ok(drawn)
    }

    /// Rounds a payout according to the rounding mode.
    fn round_payout(&self, amount: f64, mode: RoundingMode) -> usize {
        round_amount(amount, mode)
    }

    /// Compares the hands and settles the bet.
    ///
    /// A loss returns nothing, a tie returns the bet, a win returns double the
    /// bet and a natural returns the bet plus `natural_pays` times the bet
    /// (2.5 times in total by default, rounded down).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to be resolved, or if the
    /// payout would overflow the bank. Nothing is settled in the latter case.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolution {
            return Err(ShowdownError::InvalidState);
        }

        let ace = self.ace_value;
        let bet = self.current_bet;
        let outcome = self.player.compare_hands(&self.dealer, ace);

        let payout = match outcome {
            HandOutcome::Loss => Some(0),
            HandOutcome::Tie => Some(bet),
            HandOutcome::Win => bet.checked_mul(2),
            HandOutcome::Natural => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "bets are capped at MAX_BET, which f64 represents exactly"
                )]
                let winnings = (bet as f64) * self.options.natural_pays;
                bet.checked_add(self.round_payout(winnings, self.options.rounding_natural))
            }
        };
        let (payout, bank) = payout
            .and_then(|payout| Some((payout, self.player.bank.checked_add(payout)?)))
            .ok_or(ShowdownError::PayoutOverflow)?;

        self.player.bank = bank;
        self.current_bet = 0;
        self.state = GameState::Discard;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value: self.player.total_hand_value(ace),
            dealer_value: self.dealer.total_hand_value(ace),
            player_validity: self.player.hand_validity(ace),
            dealer_validity: self.dealer.hand_validity(ace),
        };
        log::info!(
            "round over: {:?}, paid {payout}, bank {}",
            result.outcome,
            self.player.bank
        );

        Ok(result)
    }
}
