//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::AceValue;
use crate::deck::Deck;
use crate::error::{CardError, DeckError};
use crate::hand::HandView;
use crate::options::GameOptions;
use crate::player::{Player, Seat};

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use state::{GameOver, GameState};

/// Largest bet the table accepts.
///
/// Every bet up to this limit converts to `f64` exactly.
pub const MAX_BET: usize = if usize::BITS > 53 {
    (1u64 << 53) as usize
} else {
    usize::MAX
};

/// A single-table blackjack game between a dealer and one player.
///
/// The game owns the draw pile, the discard pile and both seats. Every card
/// of the 52 is in exactly one of those four places at all times; the piles
/// are public so tests can stack the deck, at the cost of that guarantee.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards waiting to be dealt. The top card is dealt next.
    pub draw_pile: Deck,
    /// Cards from finished rounds.
    pub discard_pile: Deck,
    /// The house.
    pub dealer: Player,
    /// The human player.
    pub player: Player,
    /// Current round phase.
    state: GameState,
    /// Money at stake this round, already taken from the player's bank.
    current_bet: usize,
    /// Value of every Ace this round.
    ace_value: AceValue,
    /// Random number generator.
    rng: ChaCha8Rng,
}

/// Everything the table display needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The dealer's hand.
    pub dealer: HandView,
    /// The player's hand.
    pub player: HandView,
    /// The player's bank.
    pub bank: usize,
    /// Money at stake this round.
    pub current_bet: usize,
    /// Whether the hole card is dealt face-up.
    pub debug: bool,
}

impl Game {
    /// Creates a new game with a full, shuffled draw pile.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.player.bank, 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile = Deck::full();
        draw_pile.shuffle(&mut rng);

        Self {
            dealer: Player::new(0),
            player: Player::new(options.starting_bank),
            options,
            draw_pile,
            discard_pile: Deck::new(),
            state: GameState::AwaitingBet,
            current_bet: 0,
            ace_value: AceValue::One,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the money at stake this round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns this round's ace value.
    #[must_use]
    pub const fn ace_value(&self) -> AceValue {
        self.ace_value
    }

    /// Returns whether the hole card is dealt face-up.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.options.debug
    }

    /// Returns whether the player is out of money.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.player.bank < 1
    }

    /// Returns the number of cards across both piles and both hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.dealer.hand.len()
            + self.player.hand.len()
    }

    /// Builds the display data for the current table.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::ValueOutOfRange`] if a value needs three digits.
    pub fn table_view(&self) -> Result<TableView, CardError> {
        Ok(TableView {
            dealer: HandView::new(self.dealer.hand.cards(), self.ace_value)?,
            player: HandView::new(self.player.hand.cards(), self.ace_value)?,
            bank: self.player.bank,
            current_bet: self.current_bet,
            debug: self.options.debug,
        })
    }

    /// Deals the top card of the draw pile to a seat.
    ///
    /// When the draw pile runs out, the discard pile is merged back into it
    /// and reshuffled, so the next deal always has a card while any card is
    /// out of play.
    fn deal_to(&mut self, seat: Seat) -> Result<(), DeckError> {
        if self.draw_pile.is_empty() {
            self.recycle()?;
        }

        let hand = match seat {
            Seat::Dealer => &mut self.dealer.hand,
            Seat::Player => &mut self.player.hand,
        };
        if !self.draw_pile.move_top(hand)? {
            return Err(DeckError::Empty);
        }
        log::debug!(
            "dealt to {} ({} left in draw pile)",
            seat.name(),
            self.draw_pile.len()
        );

        if self.draw_pile.is_empty() {
            self.recycle()?;
        }
        Ok(())
    }

    /// Merges the discard pile into the draw pile and shuffles it.
    fn recycle(&mut self) -> Result<(), DeckError> {
        if self.discard_pile.is_empty() {
            return Ok(());
        }
        self.discard_pile.merge_into(&mut self.draw_pile)?;
        self.draw_pile.shuffle(&mut self.rng);
        log::debug!("reshuffled discard pile, {} cards in draw pile", self.draw_pile.len());
        Ok(())
    }
}
