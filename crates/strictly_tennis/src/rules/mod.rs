//! Scoring rules for best-of-three singles with tie-breaks.
//!
//! Pure predicates over a [`Score`](crate::Score). The engine calls these
//! directly after each point; they never mutate anything.

pub mod game;
pub mod outcome;
pub mod set;
pub mod tie_break;

pub use game::{is_deuce, is_game_won};
pub use outcome::match_winner;
pub use set::{reaches_tie_break, set_winner};
pub use tie_break::is_tie_break_won;

/// Minimum lead needed to close a game or a tie-break.
pub const WIN_BY: u32 = 2;

/// Points a side must exceed to win a game outright (the 4th point).
pub const GAME_POINT_THRESHOLD: u32 = 3;

/// Games needed to take a set.
pub const SET_GAMES: u32 = 6;

/// Minimum game lead needed to close a set.
pub const SET_WIN_MARGIN: u32 = 2;

/// Games each side holds when the tie-break starts.
pub const TIEBREAK_AT: u32 = 6;

/// Points needed to win a tie-break.
pub const TIEBREAK_POINTS: u32 = 7;

/// Sets needed to take the match (best of three).
pub const MATCH_SETS: u32 = 2;
