//! Custom lexicon JSON files.

use crate::common::scenario_catalog;
use catalog_search::{Lexicon, LexiconError, MatchType, SearchEngine, SearchRequest};
use std::fs;
use tempfile::NamedTempFile;

fn lexicon_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn test_custom_synonyms_drive_scoring() {
    let file = lexicon_file(r#"{"synonyms": [["journal", ["notebook"]]]}"#);
    let lexicon = Lexicon::from_path(file.path()).unwrap();
    let engine = SearchEngine::with_lexicon(scenario_catalog(), lexicon);

    let response = engine.search(&SearchRequest::new("journal"));
    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].product.sku, "NB47");
    assert_eq!(response.results[0].match_type, MatchType::Synonym);
}

#[test]
fn test_custom_sku_patterns() {
    let file = lexicon_file(r#"{"skuPatterns": {"th": ["vacuum flask"]}}"#);
    let engine = SearchEngine::with_lexicon(scenario_catalog(), Lexicon::from_path(file.path()).unwrap());

    let response = engine.search(&SearchRequest::new("th"));
    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].product.sku, "VF10");
    assert_eq!(response.results[0].match_type, MatchType::Sku);
}

#[test]
fn test_custom_suggestions() {
    let file = lexicon_file(r#"{"synonyms": [["carafe", ["decanter"]]]}"#);
    let engine = SearchEngine::with_lexicon(scenario_catalog(), Lexicon::from_path(file.path()).unwrap());
    assert_eq!(engine.suggest("ca"), vec!["carafe"]);
    assert_eq!(engine.suggest("cl"), vec!["classic"]);
}

#[test]
fn test_malformed_lexicon() {
    let file = lexicon_file(r#"{"synonyms": {"mug": ["cup"]}}"#);
    assert!(matches!(Lexicon::from_path(file.path()), Err(LexiconError::Json(_))));
}

#[test]
fn test_missing_lexicon() {
    let err = Lexicon::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LexiconError::Io { .. }));
    assert!(err.to_string().contains("not/here.json"));
}
