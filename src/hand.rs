//! Hand valuation and comparison.
//!
//! A hand is any [`Deck`](crate::deck::Deck); these functions work on its
//! cards. Totals only count face-up cards, so a hand holding the dealer's
//! hole card reports less than its true value until the card is turned.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{AceValue, Card, format_value};
use crate::error::CardError;
use crate::result::HandOutcome;

/// Highest total that is not bust.
pub const BLACKJACK: u8 = 21;

/// Classification of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandValidity {
    /// Total over 21.
    Bust,
    /// Total of 21 or less.
    Valid,
    /// Exactly two cards totalling 21.
    Natural,
}

/// Sums the values of the face-up cards.
#[must_use]
pub fn total_value(cards: &[Card], ace: AceValue) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.visible_value(ace)))
}

/// Classifies a hand as bust, valid or a natural.
#[must_use]
pub fn validity(cards: &[Card], ace: AceValue) -> HandValidity {
    let total = total_value(cards, ace);
    if total > BLACKJACK {
        HandValidity::Bust
    } else if total == BLACKJACK && cards.len() == 2 {
        HandValidity::Natural
    } else {
        HandValidity::Valid
    }
}

/// Compares hand `a` against hand `b`, from `a`'s point of view.
///
/// Two bust hands tie no matter their totals. A bust `a` never wins, even
/// against a lower total. A natural beats a non-natural 21.
///
/// ```
/// use bjtable::{AceValue, Card, HandOutcome, Rank, Suit, compare};
///
/// let player = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Clubs, Rank::King)];
/// let dealer = [Card::new(Suit::Spades, Rank::Ten), Card::new(Suit::Clubs, Rank::Nine)];
/// assert_eq!(compare(&player, &dealer, AceValue::Eleven), HandOutcome::Natural);
/// ```
#[must_use]
pub fn compare(a: &[Card], b: &[Card], ace: AceValue) -> HandOutcome {
    let a_validity = validity(a, ace);
    let b_validity = validity(b, ace);
    let a_total = total_value(a, ace);
    let b_total = total_value(b, ace);

    let bust = a_validity == HandValidity::Bust;
    let tie = a_validity == b_validity && (bust || a_total == b_total);
    let win = a_total > b_total
        || b_validity == HandValidity::Bust
        || (a_validity == HandValidity::Natural && b_validity != HandValidity::Natural);

    if tie {
        HandOutcome::Tie
    } else if bust || !win {
        HandOutcome::Loss
    } else if a_validity == HandValidity::Natural {
        HandOutcome::Natural
    } else {
        HandOutcome::Win
    }
}

/// One displayed card: its name and, if face-up, its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    /// Card name, or `"Face Down"`.
    pub name: String,
    /// Formatted value; `None` for a face-down card.
    pub value: Option<String>,
}

/// Display data for a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// One line per card, bottom card first.
    pub cards: Vec<CardLine>,
    /// Formatted visible total.
    pub total: String,
}

impl HandView {
    /// Builds the display data for a hand.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::ValueOutOfRange`] if a value needs three digits.
    pub fn new(cards: &[Card], ace: AceValue) -> Result<Self, CardError> {
        let lines = cards
            .iter()
            .map(|card| -> Result<CardLine, CardError> {
                let value = if card.visible {
                    Some(format_value(card.value(ace))?)
                } else {
                    None
                };
                Ok(CardLine {
                    name: card.display_name(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cards: lines,
            total: format_value(total_value(cards, ace))?,
        })
    }
}
