// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog and lexicon JSON parsing.
//!
//! Arbitrary bytes must produce either a valid catalog or a typed error. A
//! catalog that loads must satisfy its invariants and survive a search.

#![no_main]

use catalog_search::{Catalog, Lexicon, SearchEngine, SearchRequest};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Lexicon::from_json_str(text);

    if let Ok(catalog) = Catalog::from_json_str(text, None) {
        let mut skus = HashSet::new();
        for product in catalog.products() {
            assert!(!product.sku.trim().is_empty());
            assert!(product.price.is_finite() && product.price >= 0.0);
            assert!(skus.insert(product.sku.clone()), "duplicate SKU survived loading");
        }
        let engine = SearchEngine::new(catalog);
        let _ = engine.search(&SearchRequest::new("mug"));
        let _ = engine.search(&SearchRequest::default());
    }
});
