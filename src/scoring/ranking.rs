// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! With a query, relevance wins, but scores are hand-tuned and a 0.05 gap
//! doesn't mean much. Scores within [`TIE_WINDOW`] of each other are treated
//! as ties and re-ordered by featured-first, then name. Exact matches (1.0)
//! form their own group so nothing outranks a product whose SKU or name the
//! shopper typed verbatim.
//!
//! "Within 0.1 of each other" isn't transitive (0.9 ~ 0.82 ~ 0.74 but
//! 0.9 ≁ 0.74), so it can't be a comparator for `sort_by`. Instead:
//!
//! 1. Sort strictly: score descending, then featured, name, SKU.
//! 2. Walk the sorted list cutting groups: a group runs while scores stay
//!    within the window of the group's first (highest) score.
//! 3. Re-sort each group by featured, name, score, SKU.
//!
//! Every step is a total order, so the output is deterministic.
//!
//! Without a query, the shopper's [`SortMode`] decides.

use super::core::{EXACT_SCORE, TIE_WINDOW};
use crate::types::{Product, ScoredProduct, SortMode};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Case-insensitive name order with a case-sensitive final tiebreak.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Featured products first.
fn compare_featured(a: &Product, b: &Product) -> Ordering {
    b.featured.cmp(&a.featured)
}

/// Featured first, then name, then SKU. SKUs are unique, so this is total.
pub fn compare_default(a: &Product, b: &Product) -> Ordering {
    compare_featured(a, b)
        .then_with(|| compare_names(&a.name, &b.name))
        .then_with(|| a.sku.cmp(&b.sku))
}

/// Parse `createdAt` as RFC 3339 or a bare `YYYY-MM-DD` date.
pub fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Missing or unparseable dates count as `now`.
fn created_key(product: &Product, now: DateTime<Utc>) -> DateTime<Utc> {
    product
        .created_at
        .as_deref()
        .and_then(parse_created_at)
        .unwrap_or(now)
}

/// Ordering for an unscored listing.
///
/// Sorting is stable, so products the mode considers equal keep catalog order
/// (the default mode breaks every tie itself).
pub fn compare_by_mode(a: &Product, b: &Product, mode: SortMode) -> Ordering {
    compare_by_mode_at(a, b, mode, Utc::now())
}

/// [`compare_by_mode`] with an explicit `now` for undated products.
pub fn compare_by_mode_at(a: &Product, b: &Product, mode: SortMode, now: DateTime<Utc>) -> Ordering {
    match mode {
        SortMode::Default => compare_default(a, b),
        SortMode::NameAsc => compare_names(&a.name, &b.name),
        SortMode::NameDesc => compare_names(&b.name, &a.name),
        SortMode::PriceAsc => a.price.total_cmp(&b.price),
        SortMode::PriceDesc => b.price.total_cmp(&a.price),
        SortMode::RatingAsc => a.rating.total_cmp(&b.rating),
        SortMode::RatingDesc => b.rating.total_cmp(&a.rating),
        SortMode::SkuAsc => compare_names(&a.sku, &b.sku),
        SortMode::SkuDesc => compare_names(&b.sku, &a.sku),
        SortMode::Newest => created_key(b, now).cmp(&created_key(a, now)),
        SortMode::Oldest => created_key(a, now).cmp(&created_key(b, now)),
    }
}

fn score_of(item: &ScoredProduct<'_>) -> f64 {
    item.score().unwrap_or(0.0)
}

/// Strict order: score descending, then the default product order.
fn compare_strict(a: &ScoredProduct<'_>, b: &ScoredProduct<'_>) -> Ordering {
    score_of(b)
        .total_cmp(&score_of(a))
        .then_with(|| compare_default(a.product, b.product))
}

/// Order inside a tie group: featured, name, then score and SKU.
fn compare_within_group(a: &ScoredProduct<'_>, b: &ScoredProduct<'_>) -> Ordering {
    compare_featured(a.product, b.product)
        .then_with(|| compare_names(&a.product.name, &b.product.name))
        .then_with(|| score_of(b).total_cmp(&score_of(a)))
        .then_with(|| a.product.sku.cmp(&b.product.sku))
}

fn is_exact(score: f64) -> bool {
    score >= EXACT_SCORE
}

/// Does `score` belong in the group that started at `anchor`?
fn same_group(anchor: f64, score: f64) -> bool {
    if is_exact(anchor) != is_exact(score) {
        return false;
    }
    // Small epsilon so 0.9 - 0.8 (= 0.09999...) and a true 0.1 gap behave alike.
    anchor - score <= TIE_WINDOW + 1e-9
}

/// Sort scored results by relevance with close-score tie-breaking.
pub fn rank_by_relevance(results: &mut [ScoredProduct<'_>]) {
    results.sort_by(compare_strict);

    let mut start = 0;
    while start < results.len() {
        let anchor = score_of(&results[start]);
        let mut end = start + 1;
        while end < results.len() && same_group(anchor, score_of(&results[end])) {
            end += 1;
        }
        results[start..end].sort_by(compare_within_group);
        start = end;
    }
}

/// Sort an unscored listing by the shopper's chosen mode.
pub fn rank_by_mode(results: &mut [ScoredProduct<'_>], mode: SortMode) {
    let now = Utc::now();
    results.sort_by(|a, b| compare_by_mode_at(a.product, b.product, mode, now));
}
