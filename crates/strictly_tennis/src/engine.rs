//! Scoring engine: the per-point state machine.
//!
//! Each [`GameState`] maps to one pure transition function. Dispatch is a
//! single `match` on the current state; after the transition the engine
//! settles set and match completion.
//!
//! | State          | Point for S                                   | Next                          |
//! |----------------|-----------------------------------------------|-------------------------------|
//! | `Regular`      | +1; game at 4+ with lead 2; 40-40 is deuce    | `Regular`, `Deuce`, `TieBreak` |
//! | `Deuce`        | +1                                            | `Advantage(S)`                |
//! | `Advantage(P)` | S == P wins the game, else +1 back to deuce   | `Regular`, `TieBreak`, `Deuce` |
//! | `TieBreak`     | +1; set at 7+ with lead 2                     | `TieBreak`, `Regular`         |
//! | `Finished`     | rejected                                      | `Finished`                    |

use crate::contracts::{Contract, PointContract};
use crate::{GameState, Match, Point, Score, ScoringError, Side, rules};
use tracing::{debug, info, instrument};

/// Scores a point for `side`, mutating the match in place.
///
/// Contract enforcement:
/// - Precondition: the match is not finished
/// - Postcondition: all match invariants hold
///
/// # Errors
///
/// - [`ScoringError::MatchFinished`] if the match already has a winner; the
///   match is left untouched.
/// - [`ScoringError::InvariantViolation`] if the result breaks an invariant,
///   which only happens when the match was restored from corrupt data. The
///   match is left untouched in that case too.
#[instrument(
    skip(tennis_match),
    fields(match_id = %tennis_match.id(), state = %tennis_match.state())
)]
pub fn add_point(tennis_match: &mut Match, side: Side) -> Result<(), ScoringError> {
    let point = Point::new(side);
    PointContract::pre(tennis_match, &point)?;

    let before = tennis_match.clone();
    let (score, state) = tennis_match.parts_mut();
    let next = transition(score, *state, side)?;
    *state = settle(score, next);

    if let Err(e) = PointContract::post(&before, tennis_match) {
        *tennis_match = before;
        return Err(e);
    }

    debug!(next_state = %tennis_match.state(), "Point scored");
    Ok(())
}

/// Runs the transition for the current state.
fn transition(score: &mut Score, state: GameState, side: Side) -> Result<GameState, ScoringError> {
    match state {
        GameState::Regular => Ok(regular(score, side)),
        GameState::Deuce => Ok(deuce(score, side)),
        GameState::Advantage(holder) => Ok(advantage(score, side, holder)),
        GameState::TieBreak => Ok(tie_break(score, side)),
        GameState::Finished => Err(ScoringError::MatchFinished),
    }
}

fn regular(score: &mut Score, side: Side) -> GameState {
    score.add_point(side);
    if rules::is_game_won(score, side) {
        close_game(score, side)
    } else if rules::is_deuce(score) {
        GameState::Deuce
    } else {
        GameState::Regular
    }
}

fn deuce(score: &mut Score, side: Side) -> GameState {
    score.add_point(side);
    if score.points_lead(side) > 0 {
        GameState::Advantage(side)
    } else {
        GameState::Deuce
    }
}

fn advantage(score: &mut Score, side: Side, holder: Side) -> GameState {
    if side == holder {
        close_game(score, side)
    } else {
        score.add_point(side);
        GameState::Deuce
    }
}

fn tie_break(score: &mut Score, side: Side) -> GameState {
    score.add_point(side);
    if rules::is_tie_break_won(score, side) {
        // The tie-break decides the set directly, bypassing the game count.
        score.win_set(side);
        GameState::Regular
    } else {
        GameState::TieBreak
    }
}

/// Awards the game and checks for 6-6 right away.
fn close_game(score: &mut Score, side: Side) -> GameState {
    score.win_game(side);
    if rules::reaches_tie_break(score) {
        info!("Six games all, tie-break");
        GameState::TieBreak
    } else {
        GameState::Regular
    }
}

/// Applies set completion, then match completion.
fn settle(score: &mut Score, mut state: GameState) -> GameState {
    if let Some(side) = rules::set_winner(score) {
        score.win_set(side);
        state = GameState::Regular;
    }
    if let Some(side) = rules::match_winner(score) {
        score.set_winner(side);
        info!(winner = %side, "Match finished");
        state = GameState::Finished;
    }
    state
}
