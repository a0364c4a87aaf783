//! Integration tests for the city search engine.
//! Exercises the public API end to end: records file on disk, index build,
//! queries, and the console loop over in-memory buffers.

use std::io::Cursor;

use city_search_lib::records::load_records;
use city_search_lib::search::{find_matches, PrefixSearch, SearchStrategy, DEFAULT_LIMIT};
use city_search_lib::shell::{self, READY_BANNER};
use city_search_lib::PrefixTrie;

const CITIES: &str = "Paris\nParma\nPark City\nLondon\nLondonderry\nLong Beach\nVan\nVancouver\n";

fn write_cities() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.txt");
    std::fs::write(&path, CITIES).unwrap();
    (dir, path)
}

#[test]
fn test_file_to_matches() {
    let (_dir, path) = write_cities();
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 8);

    let trie = PrefixTrie::build(&records);
    assert_eq!(find_matches(&trie, "par", DEFAULT_LIMIT), vec!["Paris", "Parma", "Park City"]);
    assert_eq!(find_matches(&trie, "lon", DEFAULT_LIMIT), vec!["London", "Long Beach", "Londonderry"]);
    assert_eq!(find_matches(&trie, "van", DEFAULT_LIMIT), vec!["Van", "Vancouver"]);
    assert!(find_matches(&trie, "zzzzz", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_empty_query_is_breadth_first_over_everything() {
    let (_dir, path) = write_cities();
    let trie = PrefixTrie::build(load_records(&path).unwrap());

    assert_eq!(
        find_matches(&trie, "", 4),
        vec!["Van", "Paris", "Parma", "London"]
    );
}

#[test]
fn test_strategies_answer_lowercase_queries() {
    let (_dir, path) = write_cities();
    let records = load_records(&path).unwrap();

    let trie = SearchStrategy::Trie.build(records.clone());
    let scan = SearchStrategy::Scan.build(records);

    assert_eq!(trie.name(), "trie");
    assert_eq!(scan.name(), "scan");

    // The scan compares against records as stored, so only the trie folds case
    assert_eq!(shell::answer(trie.as_ref(), "Lon", 2), vec!["London", "Long Beach"]);
    assert!(shell::answer(scan.as_ref(), "Lon", 2).is_empty());
    assert_eq!(scan.find_matches("Lon", 2), vec!["London", "Londonderry"]);
}

#[test]
fn test_console_session() {
    let (_dir, path) = write_cities();
    let search = SearchStrategy::Trie.build(load_records(&path).unwrap());

    let input = Cursor::new("VANC\nq\n\n");
    let mut output = Vec::new();
    let answered = shell::run(search.as_ref(), 1, input, &mut output).unwrap();

    assert_eq!(answered, 3);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{READY_BANNER}\nVancouver\n\n\nVan\n\n")
    );
}

#[test]
fn test_missing_records_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_records(dir.path().join("cities.txt")).is_err());
}
