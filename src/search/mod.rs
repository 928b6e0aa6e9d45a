// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search execution: filter, score, threshold, sort, paginate.
//!
//! ```text
//! catalog ──▶ filters ──▶ score (query) ──▶ threshold ──▶ rank ──▶ page
//!                  └──── empty query: unscored ──────────▶ sort mode
//! ```
//!
//! Everything past the executor (facets, suggestions, the JSON response) is
//! built from its output in [`facets`] and [`response`]. [`engine`] ties it
//! together behind a cache.

pub mod cache;
pub mod engine;
pub mod facets;
pub mod response;

use crate::catalog::Catalog;
use crate::lexicon::Lexicon;
use crate::scoring::ranking::{rank_by_mode, rank_by_relevance};
use crate::scoring::{min_score_for, score_context, ScoringContext};
use crate::types::{ScoredProduct, SearchRequest};
use crate::utils::normalize;
use response::PageInfo;

/// Results per page when the caller doesn't say.
pub const DEFAULT_PER_PAGE: usize = 15;

/// Run one search against the catalog.
///
/// Filters apply first, so excluded products are never scored. A non-empty
/// query keeps products scoring at least [`min_score_for`] and ranks them by
/// relevance. An empty query keeps everything unscored and applies the
/// request's sort mode.
pub fn search<'a>(
    catalog: &'a Catalog,
    request: &SearchRequest,
    lexicon: &Lexicon,
) -> Vec<ScoredProduct<'a>> {
    let filtered = catalog
        .products()
        .iter()
        .filter(|product| request.filters.matches(product));

    let query = normalize(&request.query);
    if query.is_empty() {
        let mut results: Vec<ScoredProduct<'a>> = filtered
            .map(|product| ScoredProduct {
                product,
                relevance: None,
            })
            .collect();
        rank_by_mode(&mut results, request.sort);
        return results;
    }

    let threshold = min_score_for(&query);
    let mut results: Vec<ScoredProduct<'a>> = filtered
        .filter_map(|product| {
            let ctx = ScoringContext::new(product, catalog.category_of(product), &query, lexicon);
            let result = score_context(&ctx);
            (result.is_match() && result.score >= threshold).then_some(ScoredProduct {
                product,
                relevance: Some(result),
            })
        })
        .collect();
    rank_by_relevance(&mut results);
    results
}

/// Slice one 1-based page out of `results`.
///
/// `page` is clamped to at least 1 and `per_page` to at least 1. A page past
/// the end is empty with `has_more = false`.
pub fn paginate<T>(results: &[T], page: usize, per_page: usize) -> (&[T], PageInfo) {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_pages = results.len().div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(results.len());
    let end = start.saturating_add(per_page).min(results.len());

    let info = PageInfo {
        page,
        per_page,
        total_pages,
        has_more: page < total_pages,
    };
    (&results[start..end], info)
}
