//! Round result types for showdown.

use crate::hand::HandValidity;

/// Result of one hand against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player loses the bet.
    Loss,
    /// Both hands are equal, or both are bust.
    Tie,
    /// Player beats the dealer.
    Win,
    /// Player wins with a two-card 21.
    Natural,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's outcome against the dealer.
    pub outcome: HandOutcome,
    /// The bet that was at stake.
    pub bet: usize,
    /// Amount paid back to the player's bank (0 on a loss).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Classification of the player's hand.
    pub player_validity: HandValidity,
    /// Classification of the dealer's hand.
    pub dealer_validity: HandValidity,
}

impl RoundResult {
    /// Net change to the player's bank over the round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}
