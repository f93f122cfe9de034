//! Player store behaviour against a real CSV file.

use assert_matches::assert_matches;
use football_stats::store::{CsvBackend, PlayerStore, StoreError};
use football_stats::{Player, PlayerField};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Name,Team,Season,Photo,Position,Age,Height,Weight,Physical,Speed,Vision,Attacking,Technical,Aerial,Defending,Mental,Goals,Assists,Matches,Minutes";

fn fixture_rows() -> Vec<String> {
    let teams = ["Rovers", "City", "United"];
    (1..=12)
        .map(|i| {
            let speed = if i % 4 == 0 { String::new() } else { (60 + i).to_string() };
            format!(
                "Player {i},{team},2024,img/p{i}.png,MF,{age},{height},{weight},70,{speed},65,72,80,55,60,75,{goals},{assists},{matches},{minutes}",
                team = teams[i % 3],
                age = 18 + i,
                height = 170.5 + i as f64,
                weight = 70 + i,
                goals = i * 2,
                assists = i,
                matches = 20 + i,
                minutes = 1500 + i * 10,
            )
        })
        .collect()
}

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
    store: PlayerStore<CsvBackend>,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.csv");
    let mut text = String::from(HEADER);
    for row in fixture_rows() {
        text.push('\n');
        text.push_str(&row);
    }
    text.push('\n');
    fs::write(&path, text).unwrap();

    let store = PlayerStore::new(CsvBackend::new(&path));
    Fixture {
        _dir: dir,
        path,
        store,
    }
}

fn file_lines(fixture: &Fixture) -> Vec<String> {
    fs::read_to_string(&fixture.path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn new_player(name: &str) -> Player {
    Player {
        name: name.to_string(),
        team: "Wanderers".to_string(),
        season: 2025,
        photo: "img/new.png".to_string(),
        position: "GK".to_string(),
        age: 31,
        height: 190.5,
        weight: 88.0,
        physical: Some(77),
        mental: Some(81),
        goals: 0,
        assists: 1,
        matches: 34,
        minutes: 3060,
        ..Player::default()
    }
}

#[test]
fn test_round_trip_preserves_file() {
    let fixture = fixture();
    let before = file_lines(&fixture);

    let players = fixture.store.load_all().unwrap();
    assert_eq!(players.len(), 12);
    fixture.store.save_all(&players).unwrap();

    assert_eq!(file_lines(&fixture), before);
}

#[test]
fn test_empty_rating_survives_round_trip() {
    let fixture = fixture();
    let players = fixture.store.load_all().unwrap();
    assert_eq!(players[3].speed, None);
    assert_eq!(players[2].speed, Some(63));
}

#[test]
fn test_absent_names_are_not_found() {
    let fixture = fixture();
    let before = file_lines(&fixture);

    assert!(fixture.store.find_by_name("Nobody").unwrap().is_none());
    assert!(!fixture.store.update("Nobody", [("Goals", "1")]).unwrap());
    assert!(!fixture.store.delete("Nobody").unwrap());

    assert_eq!(file_lines(&fixture), before);
}

#[test]
fn test_add_then_find() {
    let fixture = fixture();
    let player = new_player("Zed Keeper");
    fixture.store.add(player.clone()).unwrap();

    let lookup = fixture.store.find_by_name("Zed Keeper").unwrap().unwrap();
    assert_eq!(lookup.player, player);
    assert_eq!(lookup.prev.unwrap().name, "Player 12");
    assert!(lookup.next.is_none());
    assert_eq!(fixture.store.count().unwrap(), 13);
}

#[test]
fn test_delete_then_find() {
    let fixture = fixture();
    assert!(fixture.store.delete("player 5").unwrap());

    assert!(fixture.store.find_by_name("Player 5").unwrap().is_none());
    assert_eq!(fixture.store.count().unwrap(), 11);

    let lookup = fixture.store.find_by_name("Player 6").unwrap().unwrap();
    assert_eq!(lookup.prev.unwrap().name, "Player 4");
}

#[test]
fn test_paginate_twelve_records() {
    let fixture = fixture();

    let first = fixture.store.paginate(1, 5).unwrap();
    assert_eq!(first.players.len(), 5);
    assert!(first.has_next);
    assert!(!first.has_prev);
    assert_eq!(first.next_page, Some(2));
    assert_eq!(first.total, 12);

    let third = fixture.store.paginate(3, 5).unwrap();
    assert_eq!(third.players.len(), 2);
    assert!(!third.has_next);
    assert!(third.has_prev);
    assert_eq!(third.prev_page, Some(2));
    assert_eq!(third.players[0].name, "Player 11");

    assert_eq!(fixture.store.paginate(0, 5).unwrap(), first);
    assert_eq!(fixture.store.paginate(-2, 5).unwrap(), first);
    assert!(fixture.store.paginate(4, 5).unwrap().players.is_empty());
}

#[test]
fn test_find_boundaries() {
    let fixture = fixture();

    let first = fixture.store.find_by_name("Player 1").unwrap().unwrap();
    assert!(first.prev.is_none());
    assert_eq!(first.next.unwrap().name, "Player 2");

    let last = fixture.store.find_by_name("Player 12").unwrap().unwrap();
    assert_eq!(last.prev.unwrap().name, "Player 11");
    assert!(last.next.is_none());
}

#[test]
fn test_update_single_field_leaves_rest_byte_identical() {
    let fixture = fixture();
    let before = file_lines(&fixture);

    assert!(fixture.store.update("PLAYER 7", [("Goals", "10")]).unwrap());
    let after = file_lines(&fixture);
    assert_eq!(after.len(), before.len());

    // header + 12 rows; Player 7 is on line index 7
    for (i, (old, new)) in before.iter().zip(&after).enumerate() {
        if i != 7 {
            assert_eq!(old, new, "line {} changed", i);
        }
    }

    let goals = PlayerField::ALL
        .iter()
        .position(|f| *f == PlayerField::Goals)
        .unwrap();
    let old_cells: Vec<&str> = before[7].split(',').collect();
    let new_cells: Vec<&str> = after[7].split(',').collect();
    for (i, (old, new)) in old_cells.iter().zip(&new_cells).enumerate() {
        if i == goals {
            assert_eq!(*new, "10");
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_update_unknown_field_leaves_file_untouched() {
    let fixture = fixture();
    let before = file_lines(&fixture);

    let err = fixture
        .store
        .update("Player 2", [("Goals", "99"), ("ShirtNumber", "9")])
        .unwrap_err();
    assert_matches!(err, StoreError::UnknownField(_));
    assert_eq!(file_lines(&fixture), before);
}

#[test]
fn test_case_insensitive_lookup() {
    let fixture = fixture();
    fixture.store.add(new_player("John Smith")).unwrap();

    let lookup = fixture.store.find_by_name("john smith").unwrap().unwrap();
    assert_eq!(lookup.player.name, "John Smith");
}

#[test]
fn test_search_by_team_prefix() {
    let fixture = fixture();
    let rovers = fixture.store.search("rov").unwrap();
    // i % 3 == 0 -> Rovers: players 3, 6, 9, 12
    let names: Vec<String> = rovers.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Player 3", "Player 6", "Player 9", "Player 12"]);
}

#[test]
fn test_malformed_number_is_parse_error() {
    let fixture = fixture();
    let mut lines = file_lines(&fixture);
    lines[3] = lines[3].replace(",2024,", ",twenty,");
    fs::write(&fixture.path, lines.join("\n")).unwrap();

    let err = fixture.store.load_all().unwrap_err();
    assert_matches!(
        err,
        StoreError::Parse { field: PlayerField::Season, row: 3, .. }
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = PlayerStore::new(CsvBackend::new(dir.path().join("missing.csv")));
    assert_matches!(store.load_all(), Err(StoreError::Io(_)));
    assert_matches!(store.find_by_name("anyone"), Err(StoreError::Io(_)));
}
