//! Console session tests driven by scripted input.

use std::io;

use bjtable::session::{play_game, run_menu};
use bjtable::{Card, Deck, Game, GameOptions, GameOver, Input, LineInput, Prompt, Rank, Suit};

fn output(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

/// Answers every prompt on its own: menu picks come from a script, bets go
/// all-in and every other question gets option 2.
struct Autoplay {
    menu: Vec<usize>,
}

impl Input for Autoplay {
    fn request(&mut self, max: usize, prompt: &Prompt) -> io::Result<usize> {
        if *prompt == Prompt::BET {
            return Ok(max);
        }
        if max == 3 {
            return Ok(self.menu.remove(0));
        }
        Ok(2)
    }
}

#[test]
fn line_input_retries_until_in_range() {
    let mut input = LineInput::new("abc\n0\n5\n 2 \n".as_bytes(), Vec::new());
    assert_eq!(input.request(3, &Prompt::OPTION).unwrap(), 2);

    let written = output(input.into_writer());
    assert_eq!(written.matches("Invalid Input.").count(), 3);
    assert_eq!(
        written
            .matches("Please select an option from (1) to (3): ")
            .count(),
        4
    );
}

#[test]
fn line_input_fails_at_end_of_input() {
    let mut input = LineInput::new("9\n".as_bytes(), Vec::new());
    let err = input.request(3, &Prompt::OPTION).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn bet_prompt_uses_currency() {
    let mut input = LineInput::new("40\n".as_bytes(), Vec::new());
    assert_eq!(input.request(80, &Prompt::BET).unwrap(), 40);
    assert_eq!(
        output(input.into_writer()),
        "Please select a value from £1 to £80: £"
    );
}

#[test]
fn scripted_tie_then_quit() {
    let mut game = Game::new(GameOptions::default(), 11);
    // Dealt dealer, player, dealer, player.
    let mut draws = vec![
        Card::new(Suit::Spades, Rank::King),
        Card::new(Suit::Hearts, Rank::King),
        Card::new(Suit::Spades, Rank::Queen),
        Card::new(Suit::Hearts, Rank::Queen),
    ];
    draws.reverse();
    game.draw_pile = Deck::from_cards(draws).unwrap();

    let mut input = LineInput::new("20\n1\n2\n2\n".as_bytes(), io::sink());
    let mut out = Vec::new();
    let reason = play_game(&mut game, &mut input, &mut out).unwrap();

    assert_eq!(reason, GameOver::Quit);
    assert_eq!(game.player.bank, 100);

    let out = output(out);
    assert!(out.contains("Total Money: £80 Current Bet: £20"));
    assert!(out.contains("Card: Face Down"));
    assert!(out.contains("Player Ties!"));
    assert!(out.contains("You receive your bet (£20) back."));
    assert!(!out.contains("DEBUG MODE"));
}

#[test]
fn menu_quit_returns_immediately() {
    let mut input = LineInput::new("3\n".as_bytes(), io::sink());
    let mut out = Vec::new();
    run_menu(&GameOptions::default(), 1, &mut input, &mut out).unwrap();

    let out = output(out);
    assert!(out.starts_with("Options:\n(1) - New Game"));
    assert!(!out.contains("Initial Draw..."));
}

#[test]
fn menu_plays_a_round() {
    let mut input = Autoplay { menu: vec![1, 3] };
    let mut out = Vec::new();
    run_menu(&GameOptions::default(), 5, &mut input, &mut out).unwrap();

    let out = output(out);
    assert!(out.contains("How much do you want to bet? (Current Money: £100)"));
    assert!(out.contains("Initial Draw..."));
    assert!(out.contains("Dealer Draws..."));
    assert!(out.contains("Card: Face Down"));
    assert!(!out.contains("DEBUG MODE"));
}

#[test]
fn menu_debug_mode_shows_hole_card() {
    let mut input = Autoplay { menu: vec![2, 3] };
    let mut out = Vec::new();
    run_menu(&GameOptions::default(), 5, &mut input, &mut out).unwrap();

    let out = output(out);
    assert!(out.contains("DEBUG MODE"));
    assert!(!out.contains("Card: Face Down"));
}

#[test]
fn bankrupt_player_leaves_game() {
    let mut game = Game::new(GameOptions::default().with_starting_bank(10), 2);
    let mut draws = vec![
        Card::new(Suit::Spades, Rank::King),
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Spades, Rank::Queen),
        Card::new(Suit::Hearts, Rank::Three),
    ];
    draws.reverse();
    game.draw_pile = Deck::from_cards(draws).unwrap();

    let mut input = LineInput::new("10\n1\n2\n".as_bytes(), io::sink());
    let mut out = Vec::new();
    let reason = play_game(&mut game, &mut input, &mut out).unwrap();

    assert_eq!(reason, GameOver::Bankrupt);
    assert_eq!(game.player.bank, 0);

    let out = output(out);
    assert!(out.contains("Dealer Wins!"));
    assert!(out.contains("You are bankrupt! Returning to menu..."));
    assert!(!out.contains("Do you wish to continue playing?"));
}
