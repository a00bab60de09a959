//! Game configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bank(250)
///     .with_dealer_stands_on(18)
///     .with_debug(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Money the player starts with.
    pub starting_bank: usize,
    /// Cards dealt to each seat before the player's turn.
    pub initial_deal: u8,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Winnings paid on a natural, as a multiple of the bet (the bet itself
    /// is returned on top).
    pub natural_pays: f64,
    /// Rounding mode for natural payouts.
    pub rounding_natural: RoundingMode,
    /// Whether the dealer's hole card is dealt face-up.
    pub debug: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bank: 100,
            initial_deal: 2,
            dealer_stands_on: 17,
            natural_pays: 1.5,
            rounding_natural: RoundingMode::Down,
            debug: false,
        }
    }
}

impl GameOptions {
    /// Sets the player's starting bank.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bank(500);
    /// assert_eq!(options.starting_bank, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bank(mut self, bank: usize) -> Self {
        self.starting_bank = bank;
        self
    }

    /// Sets how many cards each seat receives in the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_deal(3);
    /// assert_eq!(options.initial_deal, 3);
    /// ```
    #[must_use]
    pub const fn with_initial_deal(mut self, cards: u8) -> Self {
        self.initial_deal = cards;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_natural_pays(1.2);
    /// assert_eq!(options.natural_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_natural_pays(mut self, ratio: f64) -> Self {
        self.natural_pays = ratio;
        self
    }

    /// Sets the rounding mode for natural payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_natural(RoundingMode::Up);
    /// assert_eq!(options.rounding_natural, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_natural(mut self, mode: RoundingMode) -> Self {
        self.rounding_natural = mode;
        self
    }

    /// Sets debug mode, which deals the dealer's hole card face-up.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_debug(true);
    /// assert!(options.debug);
    /// ```
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
