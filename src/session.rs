//! Console round loop and main menu.
//!
//! The session drives a [`Game`] through its states, asking an [`Input`] for
//! every decision and writing the table to any [`Write`]r after each deal.

use std::io::Write;

use crate::card::AceValue;
use crate::error::SessionError;
use crate::game::{Game, GameOver, GameState, MAX_BET};
use crate::input::{Input, Prompt};
use crate::options::GameOptions;
use crate::render::{CURRENCY, render_table};
use crate::result::{HandOutcome, RoundResult};

const MENU: &str = "Options:\n(1) - New Game\n(2) - Debug Mode\n(3) - Quit";
const ACE_CHOICE: &str = "How much do you want aces to be worth?\n\
    Options:\n(1) - Aces are worth 1\n(2) - Aces are worth 11";
const TURN_CHOICE: &str =
    "Options:\n(1) - Hit (Ask for another card)\n(2) - Stand (Keep current hand)";
const CONTINUE_CHOICE: &str = "Do you wish to continue playing?\n(1) - Yes\n(2) - No";

fn show_table<W: Write>(game: &Game, out: &mut W) -> Result<(), SessionError> {
    write!(out, "{}", render_table(&game.table_view()?))?;
    Ok(())
}

fn select_bet<I: Input, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> Result<(), SessionError> {
    let bank = game.player.bank;
    writeln!(
        out,
        "How much do you want to bet? (Current Money: {CURRENCY}{bank})"
    )?;
    let bet = input.request(bank.min(MAX_BET), &Prompt::BET)?;
    writeln!(out)?;
    game.place_bet(bet)?;
    Ok(())
}

fn select_ace_value<I: Input, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> Result<(), SessionError> {
    writeln!(out, "{ACE_CHOICE}")?;
    let ace = AceValue::from_option(input.request(2, &Prompt::OPTION)?).unwrap_or_default();
    game.choose_ace_value(ace)?;
    Ok(())
}

fn player_turn<I: Input, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> Result<(), SessionError> {
    writeln!(out, "{TURN_CHOICE}")?;
    if input.request(2, &Prompt::OPTION)? == 1 {
        writeln!(out, "Player Draws...\n")?;
        game.hit()?;
        show_table(game, out)?;
        if game.state() == GameState::DealerTurn {
            writeln!(out, "Player's hand is bust! (Over 21)")?;
        }
    } else {
        game.stand()?;
    }
    Ok(())
}

fn announce<W: Write>(result: &RoundResult, out: &mut W) -> Result<(), SessionError> {
    let bet = result.bet;
    let payout = result.payout;
    match result.outcome {
        HandOutcome::Loss => writeln!(
            out,
            "Dealer Wins!\nYou lose your bet ({CURRENCY}{bet})..."
        )?,
        HandOutcome::Tie => writeln!(
            out,
            "Player Ties!\nYou receive your bet ({CURRENCY}{bet}) back."
        )?,
        HandOutcome::Win => writeln!(
            out,
            "Player Wins!\nYou receive double your initial bet, earning {CURRENCY}{payout} back!"
        )?,
        HandOutcome::Natural => writeln!(
            out,
            "...BLACKJACK!!!\nYou are paid out for a natural, earning {CURRENCY}{payout} back!"
        )?,
    }
    writeln!(out)?;
    Ok(())
}

/// Plays rounds until the player quits or goes bankrupt.
///
/// # Errors
///
/// Returns an error if input or output fails, or if the game rejects a
/// transition (which means its card piles were tampered with).
pub fn play_game<I: Input, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> Result<GameOver, SessionError> {
    loop {
        match game.state() {
            GameState::AwaitingBet => {
                if game.is_bankrupt() {
                    writeln!(out, "You are bankrupt! Returning to menu...\n")?;
                    return Ok(GameOver::Bankrupt);
                }
                select_bet(game, input, out)?;
            }
            GameState::AwaitingAceValue => select_ace_value(game, input, out)?,
            GameState::InitialDeal => {
                game.deal()?;
                writeln!(out, "Initial Draw...\n")?;
                show_table(game, out)?;
            }
            GameState::PlayerTurn => player_turn(game, input, out)?,
            GameState::DealerTurn => {
                game.dealer_play()?;
                writeln!(out, "Dealer Draws...\n")?;
                show_table(game, out)?;
            }
            GameState::Resolution => {
                let result = game.showdown()?;
                announce(&result, out)?;
            }
            GameState::Discard => game.discard_hands()?,
            GameState::ContinueCheck => {
                if game.is_bankrupt() {
                    writeln!(out, "You are bankrupt! Returning to menu...\n")?;
                    game.end_round(false)?;
                } else {
                    writeln!(out, "{CONTINUE_CHOICE}")?;
                    let keep_playing = input.request(2, &Prompt::OPTION)? == 1;
                    game.end_round(keep_playing)?;
                }
            }
            GameState::Over(reason) => return Ok(reason),
        }
    }
}

/// Shows the main menu until the player picks Quit.
///
/// New Game and Debug Mode each start a fresh game from `options`, the latter
/// with the hole card face-up. Each game gets its own seed derived from `seed`.
///
/// # Errors
///
/// Returns an error if input or output fails.
pub fn run_menu<I: Input, W: Write>(
    options: &GameOptions,
    seed: u64,
    input: &mut I,
    out: &mut W,
) -> Result<(), SessionError> {
    let mut games: u64 = 0;
    loop {
        writeln!(out, "{MENU}")?;
        let choice = input.request(3, &Prompt::OPTION)?;
        if choice == 3 {
            return Ok(());
        }

        let options = options.clone().with_debug(choice == 2);
        let mut game = Game::new(options, seed.wrapping_add(games));
        games += 1;
        let reason = play_game(&mut game, input, out)?;
        log::debug!("game {games} ended: {reason:?}");
    }
}
