//! Same inputs, same outputs: across calls, engines, and catalog order.

use crate::common::{gifts_catalog, skus};
use catalog_search::{Catalog, SearchEngine, SearchRequest, SearchResponse};

const QUERIES: &[&str] = &["", "mug", "steel", "bag", "eco", "fla", "AM101", "thermos", "zzz"];

/// Compare everything except timing.
fn strip_timing(mut response: SearchResponse) -> SearchResponse {
    response.execution_time = 0.0;
    response
}

#[test]
fn test_fresh_engines_agree() {
    for query in QUERIES {
        let request = SearchRequest::new(*query);
        let a = strip_timing(SearchEngine::new(gifts_catalog()).search(&request));
        let b = strip_timing(SearchEngine::new(gifts_catalog()).search(&request));
        assert_eq!(a, b, "query {query:?}");
    }
}

#[test]
fn test_catalog_order_does_not_change_ranking() {
    let catalog = gifts_catalog();
    let mut reversed: Vec<_> = catalog.products().to_vec();
    reversed.reverse();
    let reversed = Catalog::new(reversed, catalog.categories().to_vec()).unwrap();

    let forward = SearchEngine::new(catalog);
    let backward = SearchEngine::new(reversed);
    for query in QUERIES.iter().filter(|q| !q.is_empty()) {
        let request = SearchRequest::new(*query);
        assert_eq!(
            skus(&forward.search(&request)),
            skus(&backward.search(&request)),
            "query {query:?}"
        );
    }
}

#[test]
fn test_cached_response_matches_fresh_one() {
    let engine = SearchEngine::new(gifts_catalog());
    let request = SearchRequest::new("steel").with_page(1, 2);
    let first = engine.search(&request);
    let cached = engine.search(&request);
    assert_eq!(first, cached);
    assert_eq!(engine.cache_stats().hits, 1);
}
