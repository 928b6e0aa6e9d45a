//! The storefront's reference scenarios against the two-product catalog.

use crate::common::{scenario_catalog, skus};
use catalog_search::{MatchType, SearchEngine, SearchRequest};

fn engine() -> SearchEngine {
    SearchEngine::new(scenario_catalog())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_sku_query_is_an_exact_match() {
    let response = engine().search(&SearchRequest::new("NB47"));
    assert_eq!(skus(&response), vec!["NB47"]);
    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].relevance_score, 1.0);
    assert_eq!(response.results[0].match_type, MatchType::Exact);
}

#[test]
fn test_material_substring_match() {
    let response = engine().search(&SearchRequest::new("leather"));
    assert_eq!(skus(&response), vec!["NB47"]);
    assert!(approx(response.results[0].relevance_score, 0.75));
    assert_eq!(response.results[0].match_type, MatchType::Exact);
}

#[test]
fn test_partial_word_prefix_match() {
    let response = engine().search(&SearchRequest::new("fla"));
    assert_eq!(skus(&response), vec!["VF10"]);
    assert!(approx(response.results[0].relevance_score, 0.45));
    assert_eq!(response.results[0].match_type, MatchType::Partial);
}

#[test]
fn test_empty_query_lists_catalog_in_default_order() {
    let response = engine().search(&SearchRequest::new(""));
    assert_eq!(skus(&response), vec!["NB47", "VF10"]);
    assert!(response.results.iter().all(|r| r.relevance_score == 0.0));
}

#[test]
fn test_unknown_code_query_returns_nothing() {
    let response = engine().search(&SearchRequest::new("AM999"));
    assert_eq!(response.total_results, 0);
    assert!(response.results.is_empty());
    assert!(response.filters.categories.is_empty());
    assert!(response.filters.tags.is_empty());
    assert!(response.filters.price_range.is_none());

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["filters"].get("priceRange").is_none());
}

#[test]
fn test_featured_product_leads_empty_listing() {
    let mut catalog = scenario_catalog();
    let mut flask = catalog.products()[1].clone();
    flask.sku = "VF11".into();
    flask.id = "vf11".into();
    flask.featured = true;
    catalog.insert_product(flask).unwrap();

    let response = SearchEngine::new(catalog).search(&SearchRequest::default());
    assert_eq!(skus(&response), vec!["VF11", "NB47", "VF10"]);
}
