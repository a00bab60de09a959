//! Error types for game operations.

use thiserror::Error;

/// Errors from card lookups and value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit index outside the four suits.
    #[error("no suit at index {0}")]
    InvalidSuit(u8),
    /// Rank index outside Ace..King.
    #[error("no rank at index {0}")]
    InvalidRank(u8),
    /// Ace value other than 1 or 11.
    #[error("aces are worth 1 or 11, not {0}")]
    InvalidAceValue(u8),
    /// Value too large to display.
    #[error("value {0} does not fit in two digits")]
    ValueOutOfRange(u8),
}

/// Errors from deck operations.
///
/// Every variant means the 52-card invariant has already been broken by the
/// caller; none of them occur in a correctly driven game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck already holds 52 cards.
    #[error("deck is full")]
    Full,
    /// There is no card to draw.
    #[error("deck is empty")]
    Empty,
    /// Only an empty deck can be populated.
    #[error("deck must be empty before it is populated")]
    NotEmpty,
    /// Shuffle range reaches past the end of the deck.
    #[error("shuffle range ends at {end} but the deck holds {len} cards")]
    OutOfRange {
        /// End of the requested range.
        end: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet above [`MAX_BET`](crate::game::MAX_BET).
    #[error("bet exceeds the table limit of {max}")]
    TooLarge {
        /// The table limit.
        max: usize,
    },
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The card piles are inconsistent.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The card piles are inconsistent.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The payout does not fit in the player's bank.
    #[error("payout overflows the player's bank")]
    PayoutOverflow,
    /// The card piles are inconsistent.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors from the remaining round transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this transition.
    #[error("invalid game state for this transition")]
    InvalidState,
    /// The card piles are inconsistent.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that end a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A card or value could not be displayed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// A round transition failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
