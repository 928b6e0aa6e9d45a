// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the search engine reads and the values it hands back.
//!
//! Products and categories come straight from the catalog JSON. Everything the
//! engine derives per query (scores, match types, sort modes, filters) lives
//! here too, so the scorer, executor, and response assembler agree on one
//! vocabulary.
//!
//! # Invariants
//!
//! - **Product**: `sku` is non-empty and unique within a catalog, `price` is
//!   finite and `>= 0`. Enforced at load time by [`crate::Catalog`].
//! - **Product.category_id**: should name a category in the same catalog. An
//!   orphaned reference is tolerated; it simply never shows up in facets.
//! - **ScoreResult.score**: always in `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATALOG RECORDS
// =============================================================================

/// A product as it appears in the catalog.
///
/// Only the fields the search engine reads (plus a few display/sort fields)
/// are modelled. Unknown JSON keys are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    pub price: f64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// ISO 8601 date or RFC 3339 timestamp. Used by the newest/oldest sorts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

/// The specification keys the scorer understands.
///
/// The catalog stores specifications as a free-form string map; anything
/// outside this closed set is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

/// A product category. Used for lookups, name matching, and facet labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

// =============================================================================
// SCORING
// =============================================================================

/// Which scoring rule produced a result's score.
///
/// Serialized lowercase (`"exact"`, `"partial"`, ...) for the JSON response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Sku,
    Tag,
    Synonym,
    Description,
}

impl MatchType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Partial => "partial",
            MatchType::Sku => "sku",
            MatchType::Tag => "tag",
            MatchType::Synonym => "synonym",
            MatchType::Description => "description",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for one (product, query) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub match_type: MatchType,
}

impl ScoreResult {
    pub const fn new(score: f64, match_type: MatchType) -> Self {
        Self { score, match_type }
    }

    /// The "nothing matched" sentinel: score 0, labelled `exact`.
    pub const fn no_match() -> Self {
        Self::new(0.0, MatchType::Exact)
    }

    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// A product paired with its relevance for the current query.
///
/// `relevance` is `None` when the query was empty and nothing was scored.
/// Products are borrowed, never annotated in place.
#[derive(Debug, Clone, Copy)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub relevance: Option<ScoreResult>,
}

impl ScoredProduct<'_> {
    pub fn score(&self) -> Option<f64> {
        self.relevance.map(|r| r.score)
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// User-selected ordering, applied when the query is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Featured first, then name.
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    /// SKU ascending. The storefront labels SKUs "model".
    #[serde(rename = "model-asc")]
    SkuAsc,
    #[serde(rename = "model-desc")]
    SkuDesc,
    Newest,
    Oldest,
}

impl SortMode {
    pub const ALL: [SortMode; 11] = [
        SortMode::Default,
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::RatingAsc,
        SortMode::RatingDesc,
        SortMode::SkuAsc,
        SortMode::SkuDesc,
        SortMode::Newest,
        SortMode::Oldest,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::RatingAsc => "rating-asc",
            SortMode::RatingDesc => "rating-desc",
            SortMode::SkuAsc => "model-asc",
            SortMode::SkuDesc => "model-desc",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a sort mode string isn't one of [`SortMode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode '{0}' (expected one of: default, name-asc, name-desc, price-asc, price-desc, rating-asc, rating-desc, model-asc, model-desc, newest, oldest)")]
pub struct ParseSortModeError(pub String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // "sku-asc" is accepted as an alias for the storefront's "model-asc".
        let wanted = match wanted.as_str() {
            "sku-asc" => "model-asc",
            "sku-desc" => "model-desc",
            other => other,
        };
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}

/// Attribute filters applied before scoring.
///
/// All bounds are inclusive. `tags` requires every listed tag to be present
/// (case-insensitive). `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductFilters {
    /// Filter by category only.
    pub fn category(id: impl Into<String>) -> Self {
        Self {
            category_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Does this product pass every active filter?
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = &self.category_id {
            if !category_id.is_empty() && &product.category_id != category_id {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if self.featured.is_some_and(|f| product.featured != f) {
            return false;
        }
        if self.in_stock.is_some_and(|s| product.in_stock != s) {
            return false;
        }
        self.tags.iter().all(|wanted| {
            let wanted = wanted.to_lowercase();
            product.tags.iter().any(|tag| tag.to_lowercase() == wanted)
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Everything the caller controls about one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: ProductFilters,
    #[serde(default)]
    pub sort: SortMode,
    /// 1-based page. `None` returns every result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    crate::search::DEFAULT_PER_PAGE
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.filters.category_id = Some(category_id.into());
        self
    }

    pub fn with_filters(mut self, filters: ProductFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize, per_page: usize) -> Self {
        self.page = Some(page);
        self.per_page = per_page;
        self
    }

    /// Cache key: the request as compact JSON.
    pub(crate) fn cache_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: ProductFilters::default(),
            sort: SortMode::Default,
            page: None,
            per_page: default_per_page(),
        }
    }
}
