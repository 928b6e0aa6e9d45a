// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet counts and query-completion suggestions.
//!
//! Facets describe the filtered result set (so a shopper can narrow further);
//! suggestions look at the whole catalog (so they can point somewhere the
//! current filters don't reach).

use crate::catalog::Catalog;
use crate::lexicon::Lexicon;
use crate::types::ScoredProduct;
use crate::utils::{normalize, split_words};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Most frequent tags reported.
pub const MAX_TAG_FACETS: usize = 10;

/// Most suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

/// Queries shorter than this get no suggestions.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFacet {
    pub name: String,
    pub count: usize,
}

/// The `filters` block of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub categories: Vec<CategoryFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    pub tags: Vec<TagFacet>,
}

/// Category counts in category-list order. Categories with no results, and
/// products whose category doesn't resolve, are left out.
pub fn category_facets(results: &[ScoredProduct<'_>], catalog: &Catalog) -> Vec<CategoryFacet> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results {
        *counts.entry(result.product.category_id.as_str()).or_default() += 1;
    }

    catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let count = counts.get(category.id.as_str()).copied().unwrap_or(0);
            (count > 0).then(|| CategoryFacet {
                id: category.id.clone(),
                name: category.name.clone(),
                count,
            })
        })
        .collect()
}

/// Cheapest and dearest price in the set. `None` when the set is empty.
pub fn price_range(results: &[ScoredProduct<'_>]) -> Option<PriceRange> {
    let mut prices = results.iter().map(|r| r.product.price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    Some(PriceRange { min, max })
}

/// The most frequent tags, by count descending then name ascending.
pub fn tag_facets(results: &[ScoredProduct<'_>]) -> Vec<TagFacet> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results {
        for tag in &result.product.tags {
            let tag = tag.trim();
            if !tag.is_empty() {
                *counts.entry(tag).or_default() += 1;
            }
        }
    }

    let mut facets: Vec<TagFacet> = counts
        .into_iter()
        .map(|(name, count)| TagFacet {
            name: name.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    facets.truncate(MAX_TAG_FACETS);
    facets
}

/// All facets for a filtered result set.
pub fn build_facets(results: &[ScoredProduct<'_>], catalog: &Catalog) -> Facets {
    Facets {
        categories: category_facets(results, catalog),
        price_range: price_range(results),
        tags: tag_facets(results),
    }
}

/// Completions for a partially typed query.
///
/// Synonym terms and alternates come first (in lexicon order), then words
/// from product names across the whole catalog. Each suggestion appears once,
/// never equals the query, and at most [`MAX_SUGGESTIONS`] are returned.
pub fn build_suggestions(query: &str, catalog: &Catalog, lexicon: &Lexicon) -> Vec<String> {
    let query = normalize(query);
    if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();
    let mut offer = |candidate: String| {
        if suggestions.len() < MAX_SUGGESTIONS
            && candidate != query
            && candidate.starts_with(query.as_str())
            && seen.insert(candidate.clone())
        {
            suggestions.push(candidate);
        }
    };

    for group in lexicon.synonyms() {
        offer(group.term.clone());
        for alternate in &group.alternates {
            offer(alternate.clone());
        }
    }
    for product in catalog.products() {
        for word in split_words(&product.name) {
            offer(word.to_lowercase());
        }
    }

    suggestions
}
