//! Result ordering: tie window with a query, sort modes without one.

use crate::common::{gifts_engine, skus};
use catalog_search::{SearchRequest, SortMode};

#[test]
fn test_close_scores_rank_featured_then_name() {
    // TM-5 scores 0.9 (name prefix); the two 0.75 material hits sit in the
    // next group, where the featured flask leads.
    let response = gifts_engine().search(&SearchRequest::new("steel"));
    assert_eq!(skus(&response), vec!["TM-5", "VF-1001", "AM-101"]);
}

#[test]
fn test_equal_scores_rank_by_name() {
    let response = gifts_engine().search(&SearchRequest::new("eco"));
    assert_eq!(skus(&response), vec!["PEN-9", "NB-47", "JB-20"]);
}

#[test]
fn test_distant_scores_keep_score_order() {
    let response = gifts_engine().search(&SearchRequest::new("bag"));
    assert_eq!(skus(&response), vec!["JB-20", "NW-7", "BP-3"]);
}

#[test]
fn test_default_listing() {
    let response = gifts_engine().search(&SearchRequest::default());
    assert_eq!(
        skus(&response),
        vec!["VF-1001", "AM-101", "PEN-9", "AM-102", "NB-47", "JB-20", "BP-3", "NW-7", "TM-5"]
    );
}

#[test]
fn test_price_sorts() {
    let asc = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::PriceAsc));
    let prices: Vec<f64> = asc.results.iter().map(|r| r.product.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let desc = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::PriceDesc));
    assert_eq!(desc.results[0].product.sku, "BP-3");
}

#[test]
fn test_model_sorts() {
    let asc = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::SkuAsc));
    assert_eq!(asc.results.first().map(|r| r.product.sku.as_str()), Some("AM-101"));
    let desc = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::SkuDesc));
    assert_eq!(desc.results.first().map(|r| r.product.sku.as_str()), Some("VF-1001"));
}

#[test]
fn test_date_sorts() {
    let newest = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::Newest));
    let order = skus(&newest);
    // Undated products count as brand new; dated ones follow, newest first.
    assert_eq!(&order[order.len() - 2..], &["TM-5", "AM-101"]);

    let oldest = gifts_engine().search(&SearchRequest::default().with_sort(SortMode::Oldest));
    assert_eq!(&skus(&oldest)[..2], &["AM-101", "TM-5"]);
}

#[test]
fn test_sort_mode_ignored_with_query() {
    let by_price = gifts_engine().search(&SearchRequest::new("bag").with_sort(SortMode::PriceAsc));
    let by_relevance = gifts_engine().search(&SearchRequest::new("bag"));
    assert_eq!(skus(&by_price), skus(&by_relevance));
}
