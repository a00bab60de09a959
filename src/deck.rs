//! Capped card collections used for the draw pile, discard pile and hands.

use alloc::vec::Vec;
use core::ops::Range;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of at most [`DECK_SIZE`] cards.
///
/// The top of the deck is the end of the sequence: cards are added to and
/// drawn from the top.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding all 52 cards in suit-major order.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from the given cards, the last one on top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Full`] if more than 52 cards are given.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::Full);
        }
        Ok(Self { cards })
    }

    /// Fills an empty deck with one card of every suit and rank, face-up.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEmpty`] if the deck already holds cards.
    pub fn populate(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() {
            return Err(DeckError::NotEmpty);
        }
        *self = Self::full();
        Ok(())
    }

    /// Puts a card on top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Full`] if the deck already holds 52 cards. The
    /// card is dropped in that case.
    pub fn add(&mut self, card: Card) -> Result<(), DeckError> {
        if self.is_full() {
            return Err(DeckError::Full);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes and returns the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Moves the top card of this deck onto `to`.
    ///
    /// Returns `false` without moving anything when this deck is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Full`] if `to` is full; the card stays here.
    pub fn move_top(&mut self, to: &mut Self) -> Result<bool, DeckError> {
        if self.cards.is_empty() {
            return Ok(false);
        }
        if to.is_full() {
            return Err(DeckError::Full);
        }
        if let Some(card) = self.cards.pop() {
            to.cards.push(card);
        }
        Ok(true)
    }

    /// Moves every card of this deck onto `to`, one at a time from the top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Full`] if `to` fills up before this deck is empty.
    pub fn merge_into(&mut self, to: &mut Self) -> Result<(), DeckError> {
        while self.move_top(to)? {}
        Ok(())
    }

    /// Swaps every position in `range` with a random position in `range`.
    ///
    /// This performs exactly `range.len()` swaps. It touches every card but is
    /// not a uniform permutation.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `range` ends past the last card.
    pub fn shuffle_range<R: Rng>(
        &mut self,
        range: Range<usize>,
        rng: &mut R,
    ) -> Result<(), DeckError> {
        if range.end > self.cards.len() {
            return Err(DeckError::OutOfRange {
                end: range.end,
                len: self.cards.len(),
            });
        }
        if let Some(cards) = self.cards.get_mut(range) {
            swap_shuffle(cards, rng);
        }
        Ok(())
    }

    /// Shuffles the whole deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        swap_shuffle(&mut self.cards, rng);
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a mutable reference to the card at `index` (0 is the bottom).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterates over the cards, bottom first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds 52 cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= DECK_SIZE
    }
}

fn swap_shuffle<R: Rng>(cards: &mut [Card], rng: &mut R) {
    let len = cards.len();
    if len == 0 {
        return;
    }
    for index in 0..len {
        cards.swap(index, rng.random_range(0..len));
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
