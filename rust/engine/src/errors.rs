use thiserror::Error;

/// Protocol/usage errors: a single submitted action was illegal. The hand
/// state is untouched and the caller may retry or substitute a fold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("No hand in progress")]
    NoActiveHand,
    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: String },
    #[error("It's not player {player_id}'s turn")]
    NotYourTurn { player_id: String },
    #[error("Player {player_id} has already folded")]
    AlreadyFolded { player_id: String },
    #[error("Player {player_id} is already all-in")]
    AlreadyAllIn { player_id: String },
    #[error("Player {player_id} has no chips remaining")]
    NoChipsRemaining { player_id: String },
    #[error("Cannot check facing a bet of {to_call}")]
    CannotCheckFacingBet { to_call: u32 },
    #[error("Raise to {to} must exceed current commitment of {committed}")]
    RaiseMustExceedCurrentBet { to: u32, committed: u32 },
    #[error("Raise to {to} is below the minimum of {minimum}")]
    RaiseBelowMinimum { to: u32, minimum: u32 },
}

/// Internal-consistency violations: defects in the engine itself. Fatal for
/// the hand; never corrected by adjusting chip counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineFault {
    #[error("Dealt past end of deck: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Chip conservation violated: table holds {actual}, expected {expected}")]
    ChipConservation { expected: u32, actual: u32 },
    #[error("Pot mismatch at payout: pot {pot}, distributed {distributed}")]
    PotMismatch { pot: u32, distributed: u32 },
}

/// Umbrella error for facade entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Fault(#[from] EngineFault),
    #[error("A hand requires at least two players")]
    NotEnoughPlayers,
    #[error("Player {player_id} has no chips to play a hand")]
    BustedPlayer { player_id: String },
}
