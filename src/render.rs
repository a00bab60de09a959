//! Two-column text layout of the table.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::game::TableView;
use crate::hand::HandView;
use crate::player::Seat;

/// Width of the widest line a hand column can hold.
pub const COLUMN_WIDTH: usize = 30;

/// Padding between the dealer and player columns.
pub const COLUMN_OFFSET: usize = 10;

/// Currency symbol shown in front of amounts.
pub const CURRENCY: char = '£';

fn column(seat: Seat, hand: &HandView) -> Vec<String> {
    let mut lines = Vec::with_capacity(hand.cards.len() + 2);
    lines.push(format!("{} Hand", seat.name()));
    for card in &hand.cards {
        match &card.value {
            Some(value) => lines.push(format!("Card: {} ({value})", card.name)),
            None => lines.push(format!("Card: {}", card.name)),
        }
    }
    lines.push(format!("Hand Value: {}", hand.total));
    lines
}

/// Renders the bank, the bet and both hands side by side.
///
/// The dealer's column is on the left. Face-down cards are listed without a
/// value, and the last line of each column is its visible total.
///
/// ```
/// use bjtable::{Game, GameOptions, render_table};
///
/// let game = Game::new(GameOptions::default(), 7);
/// let text = render_table(&game.table_view().unwrap());
/// assert!(text.starts_with("Total Money: £100 Current Bet: £0"));
/// ```
#[must_use]
pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    if view.debug {
        out.push_str("DEBUG MODE\n");
    }
    out.push_str(&format!(
        "Total Money: {CURRENCY}{} Current Bet: {CURRENCY}{}\n\n",
        view.bank, view.current_bet
    ));

    let dealer = column(Seat::Dealer, &view.dealer);
    let player = column(Seat::Player, &view.player);
    let rows = dealer.len().max(player.len());
    let width = COLUMN_WIDTH + COLUMN_OFFSET;

    for row in 0..rows {
        let left = dealer.get(row).map_or("", String::as_str);
        let right = player.get(row).map_or("", String::as_str);
        let line = format!("{left:<width$}{right}");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push('\n');

    out
}
