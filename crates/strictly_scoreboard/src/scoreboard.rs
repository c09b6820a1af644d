//! Plain-text scoreboard and offline scoring of point sequences.

use strictly_tennis::{Match, Point, PointCall, ScoringError, Side};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error scoring a point sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum PlayError {
    /// The sequence holds something other than `1`, `2`, commas or whitespace.
    #[display("Invalid point symbol '{}', expected '1' or '2'", _0)]
    InvalidSymbol(char),
    /// The engine rejected a point.
    #[display("{}", _0)]
    Scoring(ScoringError),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::InvalidSymbol(_) => None,
            PlayError::Scoring(e) => Some(e),
        }
    }
}

/// Parses a sequence such as `"1122 1"` or `"1,2,2"` into points.
///
/// # Errors
///
/// Returns [`PlayError::InvalidSymbol`] for any other character.
pub fn parse_points(sequence: &str) -> Result<Vec<Point>, PlayError> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            let number = c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(PlayError::InvalidSymbol(c))?;
            Side::try_from(number)
                .map(Point::from)
                .map_err(|_| PlayError::InvalidSymbol(c))
        })
        .collect()
}

/// Scores `sequence` on a fresh match between the two players.
///
/// # Errors
///
/// Returns [`PlayError`] on a bad symbol or a point after the match is over.
#[instrument(skip(sequence), fields(len = sequence.len()))]
pub fn score_sequence(
    player_one: &str,
    player_two: &str,
    sequence: &str,
) -> Result<Match, PlayError> {
    let points = parse_points(sequence)?;
    debug!(points = points.len(), "Replaying point sequence");
    Ok(Match::replay(player_one, player_two, &points)?)
}

/// Renders the match as a small text table.
///
/// ```text
/// Player        Sets  Games  Points
/// Nadal            1      2      40
/// Federer          0      3      AD
/// State: advantage_2
/// ```
pub fn render_scoreboard(tennis_match: &Match) -> String {
    let width = Side::iter()
        .map(|side| tennis_match.player_name(side).chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut lines = vec![format!(
        "{:<width$}  {:>4}  {:>5}  {:>6}",
        "Player", "Sets", "Games", "Points"
    )];
    for side in Side::iter() {
        let score = tennis_match.score().side(side);
        let call = PointCall::for_side(tennis_match.score(), *tennis_match.state(), side);
        lines.push(format!(
            "{:<width$}  {:>4}  {:>5}  {:>6}",
            tennis_match.player_name(side),
            score.sets(),
            score.games(),
            call.to_string()
        ));
    }
    lines.push(format!("State: {}", tennis_match.state()));
    if let Some(winner) = tennis_match.winner_name() {
        lines.push(format!("Winner: {}", winner));
    }
    lines.join("\n")
}
