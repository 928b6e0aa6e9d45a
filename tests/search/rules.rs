//! Each rule of the cascade, end to end through the engine.

use crate::common::{gifts_engine, skus};
use catalog_search::{MatchType, SearchRequest};

fn top(query: &str) -> (String, f64, MatchType) {
    let response = gifts_engine().search(&SearchRequest::new(query));
    let first = response
        .results
        .first()
        .unwrap_or_else(|| panic!("no results for {query:?}"));
    (first.product.sku.clone(), first.relevance_score, first.match_type)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_hyphenated_sku_matches_without_hyphen() {
    let response = gifts_engine().search(&SearchRequest::new("AM101"));
    assert_eq!(skus(&response), vec!["AM-101"]);
    assert_eq!(response.results[0].relevance_score, 1.0);
}

#[test]
fn test_sku_fragment() {
    let response = gifts_engine().search(&SearchRequest::new("vf"));
    assert_eq!(skus(&response), vec!["VF-1001"]);
    assert!(approx(response.results[0].relevance_score, 0.85));
    assert_eq!(response.results[0].match_type, MatchType::Sku);
}

#[test]
fn test_tag_match() {
    let (_, score, match_type) = top("eco");
    assert!(approx(score, 0.6));
    assert_eq!(match_type, MatchType::Tag);
}

#[test]
fn test_short_description_match() {
    let (sku, score, match_type) = top("dishwasher");
    assert_eq!(sku, "AM-102");
    assert!(approx(score, 0.55));
    assert_eq!(match_type, MatchType::Description);
}

#[test]
fn test_reverse_synonym_match() {
    let (sku, score, match_type) = top("thermos");
    assert_eq!(sku, "VF-1001");
    assert!(approx(score, 0.45));
    assert_eq!(match_type, MatchType::Synonym);
}

#[test]
fn test_synonym_brings_in_related_products() {
    let response = gifts_engine().search(&SearchRequest::new("mug"));
    assert_eq!(skus(&response), vec!["AM-101", "AM-102", "TM-5"]);
    let tumbler = &response.results[2];
    assert!(approx(tumbler.relevance_score, 0.5));
    assert_eq!(tumbler.match_type, MatchType::Synonym);
}

#[test]
fn test_printing_type_match() {
    let (sku, score, match_type) = top("laser");
    assert_eq!(sku, "PEN-9");
    assert!(approx(score, 0.38));
    assert_eq!(match_type, MatchType::Description);
}

#[test]
fn test_description_match_carries_snippet() {
    let response = gifts_engine().search(&SearchRequest::new("groceries"));
    assert_eq!(skus(&response), vec!["JB-20"]);
    let entry = &response.results[0];
    assert!(approx(entry.relevance_score, 0.25));
    assert_eq!(
        entry.snippet.as_deref(),
        Some("A sturdy natural fibre tote for groceries")
    );
}

#[test]
fn test_category_word_prefix() {
    let response = gifts_engine().search(&SearchRequest::new("bag"));
    let backpack = response
        .results
        .iter()
        .find(|r| r.product.sku == "BP-3")
        .unwrap();
    assert!(approx(backpack.relevance_score, 0.68 * 3.0 / 4.0));
    assert_eq!(backpack.match_type, MatchType::Partial);
}

#[test]
fn test_multi_word_query_typed_into_name() {
    for (query, sku) in [("classic note", "NB-47"), ("jute shop", "JB-20"), ("vacuum fla", "VF-1001")] {
        let response = gifts_engine().search(&SearchRequest::new(query));
        assert_eq!(skus(&response), vec![sku], "query {query:?}");
        assert!(approx(response.results[0].relevance_score, 0.9));
        assert_eq!(response.results[0].match_type, MatchType::Exact);
    }
}

#[test]
fn test_multi_word_query_inside_name() {
    let (sku, score, match_type) = top("shopping ba");
    assert_eq!(sku, "JB-20");
    assert!(approx(score, 0.8));
    assert_eq!(match_type, MatchType::Exact);
}

#[test]
fn test_single_word_fragment_stays_partial() {
    let (sku, score, match_type) = top("shop");
    assert_eq!(sku, "JB-20");
    assert!(approx(score, 0.75 * 4.0 / 8.0));
    assert_eq!(match_type, MatchType::Partial);
}
