//! Card types and value formatting.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(index))
    }
}

/// Card rank, ordered Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the point value of the rank.
    ///
    /// Aces are worth the round's ace value, court cards are worth 10 and
    /// every other rank is worth its pip count.
    ///
    /// ```
    /// use bjtable::{AceValue, Rank};
    ///
    /// assert_eq!(Rank::Ace.value(AceValue::Eleven), 11);
    /// assert_eq!(Rank::Seven.value(AceValue::One), 7);
    /// assert_eq!(Rank::Queen.value(AceValue::One), 10);
    /// ```
    #[must_use]
    pub const fn value(self, ace: AceValue) -> u8 {
        match self {
            Self::Ace => ace.points(),
            Self::Jack | Self::Queen | Self::King => 10,
            other => other as u8 + 1,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CardError::InvalidRank(index))
    }
}

/// The value every Ace takes for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceValue {
    /// Aces count as 1.
    #[default]
    One,
    /// Aces count as 11.
    Eleven,
}

impl AceValue {
    /// Returns the points an Ace is worth.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Eleven => 11,
        }
    }

    /// Maps a menu option (1 or 2) to an ace value.
    #[must_use]
    pub const fn from_option(option: usize) -> Option<Self> {
        match option {
            1 => Some(Self::One),
            2 => Some(Self::Eleven),
            _ => None,
        }
    }
}

impl TryFrom<u8> for AceValue {
    type Error = CardError;

    fn try_from(points: u8) -> Result<Self, Self::Error> {
        match points {
            1 => Ok(Self::One),
            11 => Ok(Self::Eleven),
            other => Err(CardError::InvalidAceValue(other)),
        }
    }
}

/// A playing card.
///
/// Cards are moved between decks and never duplicated, so this type is
/// intentionally neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether the card is face-up.
    pub visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            visible: true,
        }
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn face_down(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            visible: false,
        }
    }

    /// Returns the point value of the card, face-up or not.
    #[must_use]
    pub const fn value(&self, ace: AceValue) -> u8 {
        self.rank.value(ace)
    }

    /// Returns the point value of the card, or 0 when it is face-down.
    #[must_use]
    pub const fn visible_value(&self, ace: AceValue) -> u8 {
        if self.visible { self.value(ace) } else { 0 }
    }

    /// Returns the card's name, or `"Face Down"` when it is not visible.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "{} of {}", self.rank.name(), self.suit.name())
        } else {
            f.write_str("Face Down")
        }
    }
}

/// Formats a card or hand value as decimal digits.
///
/// Values in play never reach three digits; anything from 100 up is rejected.
///
/// # Errors
///
/// Returns [`CardError::ValueOutOfRange`] if `value` is 100 or more.
pub fn format_value(value: u8) -> Result<String, CardError> {
    if value >= 100 {
        return Err(CardError::ValueOutOfRange(value));
    }
    Ok(value.to_string())
}
