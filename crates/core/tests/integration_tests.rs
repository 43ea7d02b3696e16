//! Integration tests for databaseball-core
//!
//! These tests load a small dataset from real files and walk through complete
//! lookups: match, resolve, and format.

use databaseball_core::{
    config::{get_data_directory, Settings},
    dataset::{Category, Dataset},
    error::Error,
    file_handling::get_settings,
    matcher::{match_query, MatchResult},
    stats::{format_stats, render_player_page, Presentation},
};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

const PEOPLE: &str = "\
playerID,birthYear,birthMonth,birthDay,birthCountry,birthState,birthCity,deathYear,deathMonth,deathDay,nameFirst,nameLast,nameGiven,debut,finalGame
ruthba01,1895,2,6,USA,MD,Baltimore,1948,8,16,Babe,Ruth,George Herman,1914-07-11,1935-05-30
smithjo01,1960,1,1,USA,CA,Fresno,,,,John,Smith,John,1985-04-09,1990-10-01
smithja01,1970,3,3,USA,TX,Austin,,,,Jane,Smith,Jane,1995-04-02,
marichu01,1937,10,20,D.R.,Monte Cristi,Laguna Verde,,,,Juan,Marichal,Juan Antonio,1960-07-19,1975-04-16
";

const BATTING: &str = "\
playerID,yearID,stint,teamID,lgID,G,AB,R,H,2B,3B,HR,RBI,SB,CS,BB,SO
ruthba01,1920,1,NYA,AL,142,458,158,172,36,9,54,135,14,14,150,80
ruthba01,1921,1,NYA,AL,152,540,177,204,44,16,59,171,17,13,145,81
smithja01,1995,1,SEA,AL,20,41,3,9,1,0,0,2,0,0,4,11
";

const FIELDING: &str = "\
playerID,yearID,stint,teamID,lgID,POS,G,GS,InnOuts,PO,A,E,DP
ruthba01,1920,1,NYA,AL,OF,141,,,259,21,19,3
smithjo01,1986,1,OAK,AL,2B,101,,,180,250,12,55
";

const PITCHING: &str = "\
playerID,yearID,stint,teamID,lgID,W,L,G,GS,CG,SHO,SV,IPouts,H,ER,HR,BB,SO,BAOpp,ERA
ruthba01,1920,1,NYA,AL,1,0,1,1,0,0,0,12,3,2,0,2,0,0.2,4.5
marichu01,1963,1,SFN,NL,25,8,41,40,18,5,0,967,259,86,27,61,248,0.21,2.41
";

fn write_dataset(directory: &Path) {
    fs::write(directory.join("People.csv"), PEOPLE).unwrap();
    fs::write(directory.join("Batting.csv"), BATTING).unwrap();
    fs::write(directory.join("Fielding.csv"), FIELDING).unwrap();
    fs::write(directory.join("Pitching.csv"), PITCHING).unwrap();
}

fn load_dataset() -> (TempDir, Dataset) {
    let temp_dir = tempfile::tempdir().unwrap();
    write_dataset(temp_dir.path());
    let dataset = Dataset::load(temp_dir.path().to_str().unwrap()).unwrap();
    (temp_dir, dataset)
}

/// Test loading all four tables from a data directory
#[test]
fn test_load_dataset_from_directory() {
    let (_temp_dir, dataset) = load_dataset();

    assert_eq!(dataset.players().len(), 4);
    assert_eq!(dataset.people().len(), 4);
    assert_eq!(dataset.table(Category::Batting).len(), 3);
    assert_eq!(dataset.table(Category::Fielding).len(), 2);
    assert_eq!(dataset.table(Category::Pitching).len(), 2);

    let ruth = dataset.player("ruthba01").unwrap();
    assert_eq!(ruth.full_name(), "Babe Ruth");
    assert_eq!(ruth.death_year, Some(1948));
}

/// Test that a missing file aborts the load
#[test]
fn test_missing_file_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_dataset(temp_dir.path());
    fs::remove_file(temp_dir.path().join("Fielding.csv")).unwrap();

    let result = Dataset::load(temp_dir.path().to_str().unwrap());
    match result {
        Err(Error::Io {
            file_description,
            path,
            ..
        }) => {
            assert_eq!(file_description, "fielding");
            assert!(path.ends_with("Fielding.csv"));
        }
        other => panic!("Expected an IO error, got {other:?}"),
    }
}

/// Test that a stats file without its category's columns aborts the load
#[test]
fn test_stats_file_missing_column_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_dataset(temp_dir.path());
    fs::write(
        temp_dir.path().join("Pitching.csv"),
        "playerID,yearID,teamID,W,L,G,SV,SO\n",
    )
    .unwrap();

    let result = Dataset::load(temp_dir.path().to_str().unwrap());
    assert!(matches!(
        result,
        Err(Error::MissingColumn { ref column, .. }) if column == "ERA"
    ));
}

/// Test a direct hit followed by formatting
#[test]
fn test_resolved_lookup_workflow() {
    let (_temp_dir, dataset) = load_dataset();

    let result = match_query(&dataset, "Ruth");
    assert_eq!(result, MatchResult::Resolved("ruthba01".to_string()));

    let sections = format_stats(&dataset, "ruthba01", Presentation::Compact);
    assert_eq!(sections[0].category, Category::Batting);
    assert_eq!(sections[0].title, "Batting Stats");
    assert_eq!(
        sections[0].lines[0],
        "yearID  teamID  G    AB   R    H    HR  RBI  "
    );
    assert_eq!(
        sections[0].lines[1],
        "1920    NYA     142  458  158  172  54  135  "
    );
}

/// Test that an unknown name leaves the dataset untouched
#[test]
fn test_not_found_workflow() {
    let (_temp_dir, dataset) = load_dataset();
    let players_before = dataset.players().to_vec();

    assert_eq!(match_query(&dataset, "zzzznotaplayer"), MatchResult::NotFound);
    assert_eq!(dataset.players(), players_before.as_slice());
}

/// Test an ambiguous lookup resolved by picking a candidate
#[test]
fn test_ambiguous_lookup_workflow() {
    let (_temp_dir, dataset) = load_dataset();

    let MatchResult::Ambiguous(candidates) = match_query(&dataset, "Smith") else {
        panic!("Expected an ambiguous result");
    };
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].to_string(), "John Smith (1985 - 1990)");
    assert_eq!(candidates[1].to_string(), "Jane Smith (1995 - Present)");

    let chosen = &candidates[1].player_id;
    assert_eq!(chosen, "smithja01");

    let page = render_player_page(&dataset, chosen, Presentation::Detailed, 100);
    let batting = page.iter().position(|line| line == "Batting Stats:").unwrap();
    let fielding = page.iter().position(|line| line == "Fielding Stats:").unwrap();
    let pitching = page.iter().position(|line| line == "Pitching Stats:").unwrap();
    assert!(batting < fielding && fielding < pitching);
    assert!(page[batting + 1].starts_with("yearID"));
    assert_eq!(page[fielding + 1], "No fielding stats available.");
}

/// Test that stats rows of players absent from People are tolerated
#[test]
fn test_orphan_stats_rows() {
    let dataset = Dataset::from_readers(
        "playerID,nameFirst,nameLast\n".as_bytes(),
        "playerID,yearID,teamID,G,AB,R,H,HR,RBI\nghost01,1901,BOS,1,1,0,0,0,0\n".as_bytes(),
        "playerID,yearID,teamID,G,A,E,DP\n".as_bytes(),
        "playerID,yearID,teamID,W,L,ERA,G,SV,SO\n".as_bytes(),
    )
    .unwrap();

    let page = render_player_page(&dataset, "ghost01", Presentation::Compact, 100);
    assert_eq!(page[0], "No biographical data recorded for `ghost01`.");
    assert_eq!(page[2], "Batting Stats:");
}

/// Test exact name lookup used for random players
#[test]
fn test_find_by_exact_name() {
    let (_temp_dir, dataset) = load_dataset();

    let player = dataset.find_by_exact_name("juan", "MARICHAL").unwrap();
    assert_eq!(player.id, "marichu01");

    // Substrings are not enough for an exact lookup
    assert!(dataset.find_by_exact_name("Ja", "Smith").is_none());
}

/// Test the data directory coming from a settings file
#[test]
fn test_settings_workflow() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_dataset(temp_dir.path());

    let mut settings_file = NamedTempFile::new().unwrap();
    writeln!(
        settings_file,
        "data_directory: \"{}\"",
        temp_dir.path().to_str().unwrap()
    )
    .unwrap();

    let settings = get_settings(settings_file.path().to_str().unwrap()).unwrap();
    let data_directory = get_data_directory(&None, &settings);
    assert_eq!(data_directory, temp_dir.path().to_str().unwrap());

    let dataset = Dataset::load(&data_directory).unwrap();
    assert_eq!(dataset.players().len(), 4);

    let defaults = get_data_directory(&None, &Settings::default());
    assert_ne!(defaults, data_directory);
}
