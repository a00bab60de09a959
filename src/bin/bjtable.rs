//! Console blackjack against the house.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::session::{play_game, run_menu};
use bjtable::{Game, GameOptions, Input, LineInput, Prompt, SessionError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bjtable", version, about = "Single-table blackjack in the terminal")]
struct Args {
    /// Money the player starts each game with
    #[arg(long, default_value_t = 100)]
    bank: usize,

    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Start a debug-mode game straight away instead of showing the menu
    #[arg(long)]
    debug: bool,

    /// Read plain lines from stdin instead of using interactive prompts
    #[arg(long)]
    plain: bool,

    /// Log every deal and reshuffle to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Interactive terminal prompt that re-asks until the answer is in range.
struct TerminalInput;

impl Input for TerminalInput {
    fn request(&mut self, max: usize, prompt: &Prompt) -> io::Result<usize> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt(prompt.question(max))
            .validate_with(|value: &String| -> Result<(), &str> {
                match value.trim().parse::<usize>() {
                    Ok(number) if (1..=max).contains(&number) => Ok(()),
                    _ => Err("Invalid Input."),
                }
            })
            .interact_text()
            .map_err(io::Error::other)?;
        answer.trim().parse().map_err(io::Error::other)
    }
}

fn run<I: Input>(
    args: &Args,
    options: &GameOptions,
    seed: u64,
    mut input: I,
) -> Result<(), SessionError> {
    let mut out = io::stdout();
    if args.debug {
        let mut game = Game::new(options.clone().with_debug(true), seed);
        play_game(&mut game, &mut input, &mut out)?;
        Ok(())
    } else {
        run_menu(options, seed, &mut input, &mut out)
    }
}

fn main() -> Result<(), SessionError> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::debug!("seed {seed}");

    let options = GameOptions::default().with_starting_bank(args.bank);

    if args.plain {
        run(&args, &options, seed, LineInput::stdio())
    } else {
        run(&args, &options, seed, TerminalInput)
    }
}
