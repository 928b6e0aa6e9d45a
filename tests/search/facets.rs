//! Facets and suggestions as they appear in a response.

use crate::common::gifts_engine;
use catalog_search::{PriceRange, SearchRequest, MAX_SUGGESTIONS};

#[test]
fn test_facets_describe_filtered_results() {
    let response = gifts_engine().search(&SearchRequest::new("bag"));
    let filters = &response.filters;

    let categories: Vec<(&str, usize)> = filters
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.count))
        .collect();
    assert_eq!(categories, vec![("Bags", 3)]);

    assert_eq!(filters.price_range, Some(PriceRange { min: 1.2, max: 35.0 }));

    let tags: Vec<(&str, usize)> = filters.tags.iter().map(|t| (t.name.as_str(), t.count)).collect();
    assert_eq!(tags, vec![("bag", 3), ("eco", 1), ("laptop", 1)]);
}

#[test]
fn test_category_facets_keep_category_order() {
    let response = gifts_engine().search(&SearchRequest::default());
    let ids: Vec<&str> = response.filters.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["drinkware", "bags", "stationery"]);
}

#[test]
fn test_suggestions_come_from_whole_catalog() {
    // Filtered to stationery, but suggestions still see the flask.
    let request = SearchRequest::new("va").with_category("stationery");
    let response = gifts_engine().search(&request);
    assert!(response.results.is_empty());
    assert!(response.suggestions.contains(&"vacuum".to_string()));
}

#[test]
fn test_suggestions_lead_with_lexicon_terms() {
    let suggestions = gifts_engine().suggest("jo");
    assert_eq!(suggestions.first().map(String::as_str), Some("journal"));

    let suggestions = gifts_engine().suggest("ba");
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
    assert_eq!(suggestions.first().map(String::as_str), Some("bag"));
}

#[test]
fn test_suggestions_omitted_from_json_when_empty() {
    let response = gifts_engine().search(&SearchRequest::new("x"));
    assert!(response.suggestions.is_empty());
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("suggestions").is_none());
}
