//! Tests for restoring matches from storage records.

use strictly_tennis::{
    GameState, Match, MatchId, MatchRecord, PointCall, ScoringError, Side,
};

fn record(score: &str, state: &str) -> MatchRecord {
    MatchRecord::new(MatchId::new(), "Nadal", "Federer", score, state)
}

#[test]
fn test_advantage_record_restores() {
    let rec = record(
        r#"{"player1": {"sets": 1, "games": 5, "points": 4},
            "player2": {"sets": 0, "games": 6, "points": 3}}"#,
        "advantage_1",
    );
    let tennis_match = Match::try_from(&rec).unwrap();

    assert_eq!(*tennis_match.state(), GameState::Advantage(Side::One));
    assert_eq!(tennis_match.score().side(Side::One).sets(), 1);
    assert_eq!(
        PointCall::for_side(tennis_match.score(), *tennis_match.state(), Side::One),
        PointCall::Advantage
    );
}

#[test]
fn test_scoring_through_records_matches_direct_scoring() {
    let mut direct = Match::new("Nadal", "Federer");
    let mut rec = MatchRecord::from(&direct);

    for player in [1u8, 1, 2, 2, 2, 1, 1, 1, 1, 2] {
        rec.add_point(player).unwrap();
        direct.add_point_for_player(player).unwrap();
    }

    assert_eq!(Match::try_from(&rec).unwrap(), direct);
}

#[test]
fn test_finished_record_is_frozen() {
    let mut rec = record(
        r#"{"player1": {"sets": 2, "games": 0, "points": 0},
            "player2": {"sets": 1, "games": 0, "points": 0},
            "winner": 1}"#,
        "finished",
    );
    let before = rec.clone();

    assert_eq!(rec.add_point(2), Err(ScoringError::MatchFinished));
    assert_eq!(rec, before);
    assert_eq!(Match::try_from(&rec).unwrap().winner_name(), Some("Nadal"));
}

#[test]
fn test_missing_fields_are_invalid_score_data() {
    let rec = record(r#"{"player1": {"sets": 0}, "player2": {}}"#, "regular");
    assert!(matches!(
        Match::try_from(&rec),
        Err(ScoringError::InvalidScoreData(_))
    ));
}

#[test]
fn test_negative_points_are_invalid_score_data() {
    let rec = record(
        r#"{"player1": {"sets": 0, "games": 0, "points": -1},
            "player2": {"sets": 0, "games": 0, "points": 0}}"#,
        "regular",
    );
    assert!(matches!(
        Match::try_from(&rec),
        Err(ScoringError::InvalidScoreData(_))
    ));
}

#[test]
fn test_unknown_state_tag() {
    let rec = record(
        r#"{"player1": {"sets": 0, "games": 0, "points": 0},
            "player2": {"sets": 0, "games": 0, "points": 0}}"#,
        "advantage_3",
    );
    assert_eq!(
        Match::try_from(rec),
        Err(ScoringError::UnknownGameState("advantage_3".to_string()))
    );
}
