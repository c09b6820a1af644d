//! Error taxonomy for the scoring engine.

/// Error that can occur when scoring a point or restoring a persisted match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoringError {
    /// The persisted game state tag is not one of the known states.
    #[display("Unknown game state: '{}'", _0)]
    UnknownGameState(String),

    /// The scoring side is neither player 1 nor player 2.
    #[display("Player number must be 1 or 2, got {}", _0)]
    InvalidPlayerNumber(u8),

    /// The persisted score payload could not be read.
    #[display("Invalid score data: {}", _0)]
    InvalidScoreData(String),

    /// The match already has a winner; the score is frozen.
    #[display("Match is already finished")]
    MatchFinished,

    /// A transition left the match in an impossible shape (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ScoringError {}
