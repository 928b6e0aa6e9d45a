// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search engine to verify it never
//! panics and every response respects the ranking invariants.

#![no_main]

use catalog_search::testing::{make_category, make_product};
use catalog_search::{min_score_for, Catalog, SearchEngine, SearchRequest, EXACT_SCORE};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn catalog() -> Catalog {
    let mut products = vec![
        make_product("AM-101", "Automug Travel Mug", "drinkware", 14.5),
        make_product("VF-1001", "Vacuum Flask 500ml", "drinkware", 22.0),
        make_product("JB-20", "Jute Shopping Bag", "bags", 4.5),
        make_product("NB47", "Classic Notebook", "stationery", 12.0),
        make_product("PEN-9", "Bamboo Ballpoint", "stationery", 2.5),
        make_product("XX-1", "Tasse émaillée 🎁", "ghost", 0.0),
    ];
    products[0].tags = vec!["mug".into(), "travel".into()];
    products[1].featured = true;
    products[1].specifications.material = Some("Stainless Steel".into());
    products[2].description = "A sturdy natural fibre tote for groceries".into();
    products[3].specifications.material = Some("PU Leather".into());
    products[4].specifications.printing_type = Some("Laser engraving".into());

    let categories = vec![
        make_category("drinkware", "Drinkware", "drinkware"),
        make_category("bags", "Bags", "bags"),
        make_category("stationery", "Stationery", "stationery"),
    ];
    match Catalog::new(products, categories) {
        Ok(catalog) => catalog,
        Err(err) => panic!("fixture catalog is invalid: {err}"),
    }
}

// Emoji, RTL text, null bytes, regex metacharacters. None of it should crash,
// and thresholds and exact-match supremacy must hold for all of it.
fuzz_target!(|query: &[u8]| {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| SearchEngine::new(catalog()));

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    let response = engine.search(&SearchRequest::new(query.clone()));

    // INVARIANT 1: counts agree
    assert_eq!(response.results.len(), response.total_results);

    // INVARIANT 2: every scored result clears its threshold
    if !query.trim().is_empty() {
        let threshold = min_score_for(&query);
        for entry in &response.results {
            assert!(entry.relevance_score >= threshold, "{} below {}", entry.relevance_score, threshold);
            assert!(entry.relevance_score <= 1.0);
        }
    }

    // INVARIANT 3: exact matches come first
    if let Some(first) = response.results.iter().position(|r| r.relevance_score < EXACT_SCORE) {
        assert!(response.results[first..].iter().all(|r| r.relevance_score < EXACT_SCORE));
    }

    // INVARIANT 4: the response always serializes
    assert!(serde_json::to_string(&response).is_ok());
});
