// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Product search and ranking for a corporate-gifts catalog.
//!
//! Products are scored against a free-text query by an ordered cascade of
//! heuristics (exact SKU/name, whole-word field hits, word prefixes, SKU prefix
//! patterns, tags, synonyms, specifications, description). The survivors are
//! ranked, counted into facets, and packaged as one JSON-serializable response.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ catalog.rs  │   │  lexicon.rs  │   │     types.rs     │
//! │ (products,  │   │ (synonyms,   │   │ (Product, Score, │
//! │ categories) │   │ SKU prefixes)│   │  SearchRequest)  │
//! └──────┬──────┘   └──────┬───────┘   └──────────────────┘
//!        │                 │
//!        ▼                 ▼
//! ┌─────────────────────────────────┐
//! │            scoring/             │
//! │  core   (constants, context)    │
//! │  rules  (the cascade)           │
//! │  ranking (tie window, sorts)    │
//! └────────────────┬────────────────┘
//!                  ▼
//! ┌─────────────────────────────────┐
//! │             search/             │
//! │  mod      (filter/score/page)   │
//! │  facets   (counts, suggestions) │
//! │  response (JSON assembly)       │
//! │  engine   (facade + LRU cache)  │
//! └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use catalog_search::{Catalog, SearchEngine, SearchRequest};
//!
//! let catalog = Catalog::from_paths("products.json", Some("categories.json".as_ref()))?;
//! let engine = SearchEngine::new(catalog);
//!
//! let response = engine.search(&SearchRequest::new("vacuum flask").with_page(1, 15));
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```

mod catalog;
mod error;
mod lexicon;
mod scoring;
mod search;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use catalog::Catalog;
pub use error::{CatalogError, LexiconError};
pub use lexicon::{Lexicon, SynonymGroup};
pub use scoring::ranking::{
    compare_by_mode, compare_by_mode_at, parse_created_at, rank_by_mode, rank_by_relevance,
};
pub use scoring::rules::{Rule, RULES};
pub use scoring::{
    explain, is_code_query, min_score_for, score_context, score_product, ScoringContext,
    CODE_QUERY_THRESHOLD, EXACT_SCORE, TEXT_QUERY_THRESHOLD, TIE_WINDOW,
};
pub use search::cache::{CacheStats, SearchCache};
pub use search::engine::SearchEngine;
pub use search::facets::{
    build_facets, build_suggestions, CategoryFacet, Facets, PriceRange, TagFacet, MAX_SUGGESTIONS,
    MAX_TAG_FACETS,
};
pub use search::response::{
    assemble_response, matched_fields, MatchedField, PageInfo, ResultEntry, SearchResponse,
    SNIPPET_RADIUS,
};
pub use search::{paginate, search, DEFAULT_PER_PAGE};
pub use types::{
    Category, MatchType, ParseSortModeError, Product, ProductFilters, ScoreResult, ScoredProduct,
    SearchRequest, SortMode, Specifications,
};
pub use utils::normalize;
