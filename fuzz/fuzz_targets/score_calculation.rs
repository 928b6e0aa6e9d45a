// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, within [0, 1], and deterministic for arbitrary
//! product text and queries.

#![no_main]

use arbitrary::Arbitrary;
use catalog_search::testing::{make_category, make_product};
use catalog_search::{is_code_query, score_product, Lexicon, MatchType};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    sku: String,
    name: String,
    description: String,
    short_description: String,
    tags: Vec<String>,
    material: Option<String>,
    size: Option<String>,
    features: Option<String>,
    category_name: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let mut product = make_product(&input.sku, &input.name, "fuzz", 1.0);
    product.description = input.description;
    product.short_description = input.short_description;
    product.tags = input.tags;
    product.specifications.material = input.material;
    product.specifications.size = input.size;
    product.specifications.features = input.features;
    let category = make_category("fuzz", &input.category_name, "fuzz");

    let first = score_product(&product, Some(&category), &input.query, Lexicon::builtin());
    let second = score_product(&product, Some(&category), &input.query, Lexicon::builtin());

    // INVARIANT 1: deterministic
    assert_eq!(first, second);

    // INVARIANT 2: bounded
    assert!(first.score.is_finite());
    assert!((0.0..=1.0).contains(&first.score), "score {} out of range", first.score);

    // INVARIANT 3: code-like queries only match via SKU (or exact)
    if is_code_query(&input.query) && first.is_match() {
        assert!(matches!(first.match_type, MatchType::Exact | MatchType::Sku));
    }
});
