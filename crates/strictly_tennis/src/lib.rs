//! Strictly Tennis - pure tennis match scoring.
//!
//! This crate scores a best-of-three singles match with tie-breaks at six
//! games all. It performs no I/O: a [`Match`] goes in, a point is scored,
//! the mutated [`Match`] comes out.
//!
//! # Architecture
//!
//! - **Score**: points, games and sets per side, plus the winner
//! - **GameState**: `Regular`, `Deuce`, `Advantage(side)`, `TieBreak`, `Finished`
//! - **Engine**: one transition per game state, then set/match settlement
//! - **Rules**: pure predicates (game won, deuce, tie-break, set, match)
//! - **Invariants/Contracts**: postconditions checked after every point
//! - **MatchRecord**: the storage shape, where corrupt data surfaces
//!
//! # Example
//!
//! ```
//! use strictly_tennis::{GameState, Match, Side};
//!
//! # fn example() -> Result<(), strictly_tennis::ScoringError> {
//! let mut tennis_match = Match::new("Ann", "Bea");
//! for _ in 0..4 {
//!     tennis_match.add_point(Side::One)?;
//! }
//! assert_eq!(tennis_match.score().side(Side::One).games(), 1);
//! assert_eq!(*tennis_match.state(), GameState::Regular);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod game_state;
mod id;
mod invariants;
mod match_record;
mod point_call;
pub mod rules;
mod score;
mod side;
mod tennis_match;

// Crate-level exports - Domain types
pub use action::Point;
pub use game_state::GameState;
pub use id::MatchId;
pub use point_call::PointCall;
pub use score::{Score, SideScore};
pub use side::Side;
pub use tennis_match::Match;

// Crate-level exports - Engine
pub use engine::add_point;
pub use error::ScoringError;

// Crate-level exports - Storage shape
pub use match_record::MatchRecord;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, MatchInProgress, PointContract, SetsNonDecreasing};
pub use invariants::{
    DeuceShapeInvariant, Invariant, InvariantSet, InvariantViolation, MatchInvariants,
    TieBreakGamesInvariant, WinnerConsistentInvariant,
};
