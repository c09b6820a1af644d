//! Match service tests: completed listings and concurrent scoring.

use std::sync::Arc;
use strictly_scoreboard::{MatchService, MatchStore, ServerConfig};
use strictly_tennis::{GameState, MatchId, Side};

fn config(per_page: usize) -> ServerConfig {
    let toml = format!("per_page = {}", per_page);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, toml.as_bytes()).unwrap();
    ServerConfig::from_file(file.path()).unwrap()
}

async fn finish(service: &MatchService, id: MatchId, player_number: u8) {
    for _ in 0..48 {
        service.add_point(id, player_number).await.unwrap();
    }
}

#[tokio::test]
async fn test_completed_matches_paginate() {
    let service = MatchService::new(MatchStore::new(), config(2));
    let opponents = ["Alcaraz", "Sinner", "Medvedev", "Zverev", "Rune"];
    for name in opponents {
        let created = service.create_match("Nadal", name).unwrap();
        finish(&service, *created.id(), 1).await;
    }
    service.create_match("Nadal", "Ruud").unwrap();

    let first = service.completed_matches(1, None).await;
    assert_eq!(*first.total_pages(), 3);
    let names: Vec<&str> = first
        .matches()
        .iter()
        .map(|m| m.player_two().as_str())
        .collect();
    assert_eq!(names, ["Alcaraz", "Sinner"]);

    let last = service.completed_matches(3, None).await;
    assert_eq!(last.matches().len(), 1);
    assert_eq!(last.matches()[0].player_two(), "Rune");

    let clamped = service.completed_matches(0, None).await;
    assert_eq!(*clamped.current_page(), 1);
}

#[tokio::test]
async fn test_filter_matches_either_player() {
    let service = MatchService::new(MatchStore::new(), ServerConfig::default());
    let a = service.create_match("Nadal", "Federer").unwrap();
    let b = service.create_match("Federer", "Djokovic").unwrap();
    finish(&service, *a.id(), 2).await;
    finish(&service, *b.id(), 2).await;

    let page = service.completed_matches(1, Some("  fEdErEr ")).await;
    assert_eq!(page.matches().len(), 2);
    assert_eq!(page.matches()[0].winner(), "Federer");
    assert_eq!(page.matches()[1].winner(), "Djokovic");

    let page = service.completed_matches(1, Some("nadal")).await;
    assert_eq!(page.matches().len(), 1);

    let page = service.completed_matches(1, Some("")).await;
    assert_eq!(page.matches().len(), 2);
    assert_eq!(*page.player_name(), None);
}

#[tokio::test]
async fn test_concurrent_points_are_all_applied() {
    let service = Arc::new(MatchService::new(MatchStore::new(), ServerConfig::default()));
    let id = *service.create_match("Nadal", "Federer").unwrap().id();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.add_point(id, 1).await })
        })
        .chain((0..3).map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.add_point(id, 2).await })
        }))
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let tennis_match = service.get_match(id).await.unwrap();
    assert_eq!(*tennis_match.state(), GameState::Deuce);
    assert_eq!(tennis_match.score().side(Side::One).points(), 3);
    assert_eq!(tennis_match.score().side(Side::Two).points(), 3);
}
