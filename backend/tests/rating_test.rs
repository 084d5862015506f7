//! ELO replay through the public API and the JSON snapshot format

use petanque_tournaments::config::settings::RatingSettings;
use petanque_tournaments::domain::TournamentSnapshot;
use petanque_tournaments::services::ratings::RatingService;
use petanque_tournaments::snapshot::SnapshotStore;
use petanque_tournaments::compute_elo_ratings;

const SNAPSHOT: &str = r#"{
  "players": [
    { "id": "p1", "name": "Fanny" },
    { "id": "p2", "name": "Marius" },
    { "id": "p3", "name": "Cesar" },
    { "id": "p4", "name": "Honorine" }
  ],
  "teams": [
    { "id": "t1", "tournament_id": "cup", "player_ids": ["p1", "p2"] },
    { "id": "t2", "tournament_id": "cup", "player_ids": ["p3", "p4"] }
  ],
  "matches": [
    {
      "id": "final", "tournament_id": "cup", "round_number": 2,
      "team1_id": "t1", "team2_id": "t2", "team1_score": 13, "team2_score": 11,
      "winner_id": "t1", "status": "completed"
    },
    {
      "id": "pending", "tournament_id": "cup", "round_number": 3,
      "team1_id": "t1", "team2_id": null, "status": "pending"
    }
  ],
  "league_matches": [
    {
      "id": "l1", "league_id": "spring", "match_type": "tete-a-tete",
      "team1_player_ids": ["p3"], "team2_player_ids": ["p1"],
      "team1_score": 13, "team2_score": 4, "winner_team_index": 1,
      "status": "completed", "created_at": "2024-03-01T18:00:00Z"
    },
    {
      "id": "l2", "league_id": "spring", "match_type": "doublette",
      "team1_player_ids": ["p1", "p3"], "team2_player_ids": ["p2", "p4"],
      "status": "in_progress", "created_at": "2024-03-02T18:00:00Z"
    }
  ]
}"#;

#[test]
fn single_win_moves_both_players_by_sixteen() {
    let snapshot: TournamentSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
    let ratings = compute_elo_ratings(&snapshot.teams, &snapshot.matches[..1], &[]);

    assert_eq!(ratings["p1"], 1016);
    assert_eq!(ratings["p2"], 1016);
    assert_eq!(ratings["p3"], 984);
    assert_eq!(ratings["p4"], 984);
}

#[test]
fn full_snapshot_replay() {
    let snapshot: TournamentSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
    let ratings = compute_elo_ratings(&snapshot.teams, &snapshot.matches, &snapshot.league_matches);

    // league upset: 984 beats 1016, exchanging round(32 * 0.546) = 17 points
    assert_eq!(ratings["p3"], 1001);
    assert_eq!(ratings["p1"], 999);
    assert_eq!(ratings["p2"], 1016);
    assert_eq!(ratings["p4"], 984);
    assert_eq!(ratings.len(), 4);
}

#[test]
fn service_reads_snapshot_and_writes_leaderboard() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();

    let store = SnapshotStore::new(dir.path());
    let service = RatingService::new(RatingSettings::default(), store);
    service.run("snapshot.json", Some("out/ratings.json")).unwrap();

    let written = std::fs::read_to_string(dir.path().join("out/ratings.json")).unwrap();
    let ranking: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();

    let order: Vec<&str> = ranking
        .iter()
        .map(|r| r["player_id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["p2", "p3", "p1", "p4"]);
    assert_eq!(ranking[0]["rating"], 1016);
    assert_eq!(ranking[1]["games_played"], 2);
}

#[test]
fn missing_snapshot_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let service = RatingService::new(RatingSettings::default(), SnapshotStore::new(dir.path()));
    let err = service.run("absent.json", None).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
