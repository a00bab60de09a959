//! Dealer and player seats.

use crate::card::AceValue;
use crate::deck::Deck;
use crate::hand::{self, HandValidity};
use crate::result::HandOutcome;

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The house.
    Dealer,
    /// The human player.
    Player,
}

impl Seat {
    /// Both seats in dealing order.
    pub const ALL: [Self; 2] = [Self::Dealer, Self::Player];

    /// Returns the seat's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dealer => "Dealer",
            Self::Player => "Player",
        }
    }
}

/// A hand of cards and the bank behind it.
#[derive(Debug, Default)]
pub struct Player {
    /// Cards currently held.
    pub hand: Deck,
    /// Money available to bet.
    pub bank: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(bank: usize) -> Self {
        Self {
            hand: Deck::new(),
            bank,
        }
    }

    /// Visible total of the hand.
    #[must_use]
    pub fn total_hand_value(&self, ace: AceValue) -> u8 {
        hand::total_value(self.hand.cards(), ace)
    }

    /// Classification of the hand.
    #[must_use]
    pub fn hand_validity(&self, ace: AceValue) -> HandValidity {
        hand::validity(self.hand.cards(), ace)
    }

    /// Compares this player's hand against `other`'s.
    #[must_use]
    pub fn compare_hands(&self, other: &Self, ace: AceValue) -> HandOutcome {
        hand::compare(self.hand.cards(), other.hand.cards(), ace)
    }
}
