//! Game state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// Waiting for the round's ace value.
    AwaitingAceValue,
    /// Ready to deal the opening cards.
    InitialDeal,
    /// Player hits or stands.
    PlayerTurn,
    /// Dealer reveals the hole card and draws.
    DealerTurn,
    /// Hands are compared and the bet is settled.
    Resolution,
    /// Hands go to the discard pile.
    Discard,
    /// Deciding whether another round is played.
    ContinueCheck,
    /// The game has ended.
    Over(GameOver),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    /// The player has no money left.
    Bankrupt,
    /// The player chose to stop.
    Quit,
}
