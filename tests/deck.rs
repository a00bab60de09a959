//! Deck integration tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn ranks(deck: &Deck) -> Vec<(Suit, Rank)> {
    deck.iter().map(|card| (card.suit, card.rank)).collect()
}

#[test]
fn populate_yields_every_card_once() {
    let mut deck = Deck::new();
    deck.populate().unwrap();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| card.visible));

    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert((card.suit, card.rank)));
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.draw().is_none());
}

#[test]
fn populate_is_suit_major() {
    let deck = Deck::full();
    let order = ranks(&deck);
    assert_eq!(order[0], (Suit::Hearts, Rank::Ace));
    assert_eq!(order[12], (Suit::Hearts, Rank::King));
    assert_eq!(order[13], (Suit::Diamonds, Rank::Ace));
    assert_eq!(order[51], (Suit::Spades, Rank::King));
}

#[test]
fn populate_requires_empty_deck() {
    let mut deck = Deck::new();
    deck.add(Card::new(Suit::Clubs, Rank::Two)).unwrap();
    assert_eq!(deck.populate().unwrap_err(), DeckError::NotEmpty);
    assert_eq!(deck.len(), 1);
}

#[test]
fn add_is_capped() {
    let mut deck = Deck::full();
    assert!(deck.is_full());
    assert_eq!(
        deck.add(Card::new(Suit::Clubs, Rank::Two)).unwrap_err(),
        DeckError::Full
    );
    assert_eq!(deck.len(), DECK_SIZE);

    let too_many = (0..=DECK_SIZE)
        .map(|_| Card::new(Suit::Hearts, Rank::Two))
        .collect();
    assert_eq!(Deck::from_cards(too_many).unwrap_err(), DeckError::Full);
}

#[test]
fn draw_takes_from_top() {
    let mut deck = Deck::new();
    deck.add(Card::new(Suit::Hearts, Rank::Two)).unwrap();
    deck.add(Card::new(Suit::Spades, Rank::Nine)).unwrap();

    assert_eq!(deck.draw(), Some(Card::new(Suit::Spades, Rank::Nine)));
    assert_eq!(deck.draw(), Some(Card::new(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), None);
}

#[test]
fn move_top_from_empty_is_noop() {
    let mut from = Deck::new();
    let mut to = Deck::new();
    assert!(!from.move_top(&mut to).unwrap());
    assert!(to.is_empty());
}

#[test]
fn move_top_keeps_card_when_destination_full() {
    let mut from = Deck::new();
    from.add(Card::new(Suit::Hearts, Rank::Two)).unwrap();
    let mut to = Deck::full();

    assert_eq!(from.move_top(&mut to).unwrap_err(), DeckError::Full);
    assert_eq!(from.len(), 1);
    assert_eq!(to.len(), DECK_SIZE);
}

#[test]
fn merge_drains_source_in_reverse() {
    let mut from = Deck::new();
    from.add(Card::new(Suit::Hearts, Rank::Two)).unwrap();
    from.add(Card::new(Suit::Hearts, Rank::Three)).unwrap();
    from.add(Card::new(Suit::Hearts, Rank::Four)).unwrap();
    let mut to = Deck::new();
    to.add(Card::new(Suit::Clubs, Rank::King)).unwrap();

    from.merge_into(&mut to).unwrap();

    assert!(from.is_empty());
    assert_eq!(
        ranks(&to),
        vec![
            (Suit::Clubs, Rank::King),
            (Suit::Hearts, Rank::Four),
            (Suit::Hearts, Rank::Three),
            (Suit::Hearts, Rank::Two),
        ]
    );
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut deck = Deck::full();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::full());

    let shuffled: HashSet<_> = ranks(&deck).into_iter().collect();
    let ordered: HashSet<_> = ranks(&Deck::full()).into_iter().collect();
    assert_eq!(shuffled, ordered);
}

#[test]
fn shuffle_range_leaves_outside_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::full();
    deck.shuffle_range(10..20, &mut rng).unwrap();

    let before = ranks(&Deck::full());
    let after = ranks(&deck);
    assert_eq!(after[..10], before[..10]);
    assert_eq!(after[20..], before[20..]);

    let inside: HashSet<_> = after[10..20].iter().copied().collect();
    let expected: HashSet<_> = before[10..20].iter().copied().collect();
    assert_eq!(inside, expected);
}

#[test]
fn shuffle_range_rejects_out_of_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    deck.add(Card::new(Suit::Hearts, Rank::Two)).unwrap();

    assert_eq!(
        deck.shuffle_range(0..2, &mut rng).unwrap_err(),
        DeckError::OutOfRange { end: 2, len: 1 }
    );

    let mut empty = Deck::new();
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());
}

#[test]
fn shuffle_of_tiny_ranges_is_a_noop() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut deck = Deck::full();
    deck.shuffle_range(52..52, &mut rng).unwrap();
    deck.shuffle_range(4..5, &mut rng).unwrap();
    assert_eq!(deck, Deck::full());

    let mut single = Deck::new();
    single.add(Card::new(Suit::Clubs, Rank::Ace)).unwrap();
    single.shuffle(&mut rng);
    assert_eq!(single.draw(), Some(Card::new(Suit::Clubs, Rank::Ace)));
}
