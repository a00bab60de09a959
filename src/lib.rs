//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one dealer against one player:
//! betting, the per-round ace value, the initial deal, hit/stand, the dealer's
//! draw to 17, payout and the discard pile that is reshuffled back into the
//! draw pile whenever it runs dry.
//!
//! With the `std` feature the [`input`] and [`session`] modules add a
//! retry-until-valid prompt and the console round loop used by the `bjtable`
//! binary.
//!
//! # Example
//!
//! ```
//! use bjtable::{AceValue, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(20).unwrap();
//! game.choose_ace_value(AceValue::Eleven).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! assert_eq!(game.card_count(), bjtable::DECK_SIZE);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod input;
pub mod options;
pub mod player;
pub mod render;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;

// Re-export main types
pub use card::{AceValue, Card, DECK_SIZE, Rank, Suit, format_value};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SessionError;
pub use error::{ActionError, BetError, CardError, DealError, DeckError, RoundError, ShowdownError};
pub use game::{Game, GameOver, GameState, MAX_BET, TableView};
pub use hand::{CardLine, HandValidity, HandView, compare, total_value, validity};
#[cfg(feature = "std")]
pub use input::{Input, LineInput, Prompt};
pub use options::{GameOptions, RoundingMode};
pub use player::{Player, Seat};
pub use render::render_table;
pub use result::{HandOutcome, RoundResult};
