// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search facade: catalog + lexicon + response cache.

use super::cache::{CacheStats, SearchCache};
use super::facets::{build_facets, build_suggestions};
use super::response::{assemble_response, SearchResponse};
use super::{paginate, search};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::lexicon::Lexicon;
use crate::types::{Product, SearchRequest};
use std::time::Instant;

/// Top results named in the per-query debug log.
const LOGGED_TOP_MATCHES: usize = 3;

/// Owns a catalog and answers [`SearchRequest`]s against it.
///
/// Responses are cached per request. Every catalog mutation goes through the
/// engine and clears the cache, so a cached response never describes a
/// catalog that no longer exists.
pub struct SearchEngine {
    catalog: Catalog,
    lexicon: Lexicon,
    cache: SearchCache,
}

impl SearchEngine {
    /// Engine with the built-in lexicon.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_lexicon(catalog, Lexicon::builtin().clone())
    }

    pub fn with_lexicon(catalog: Catalog, lexicon: Lexicon) -> Self {
        Self {
            catalog,
            lexicon,
            cache: SearchCache::default(),
        }
    }

    /// Replace the default cache (e.g. with a different capacity).
    pub fn with_cache(mut self, cache: SearchCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Run a search, or return the cached response for an identical request.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        if let Some(cached) = self.cache.get(request) {
            tracing::debug!(query = %request.query, "search cache hit");
            return cached;
        }

        let start = Instant::now();
        let results = search(&self.catalog, request, &self.lexicon);
        let facets = build_facets(&results, &self.catalog);
        let suggestions = build_suggestions(&request.query, &self.catalog, &self.lexicon);

        let (page, page_info) = match request.page {
            Some(page) => {
                let (slice, info) = paginate(&results, page, request.per_page);
                (slice, Some(info))
            }
            None => (results.as_slice(), None),
        };

        let response = assemble_response(
            &request.query,
            page,
            results.len(),
            facets,
            suggestions,
            page_info,
            start.elapsed(),
        );

        let top: Vec<String> = results
            .iter()
            .take(LOGGED_TOP_MATCHES)
            .map(|r| match r.relevance {
                Some(relevance) => format!("{}:{:.2}:{}", r.product.sku, relevance.score, relevance.match_type),
                None => r.product.sku.clone(),
            })
            .collect();
        tracing::debug!(
            query = %request.query,
            results = response.total_results,
            execution_ms = response.execution_time,
            top = ?top,
            "search"
        );

        self.cache.put(request, response.clone());
        response
    }

    /// Completions for a partially typed query.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        build_suggestions(prefix, &self.catalog, &self.lexicon)
    }

    /// Add a product and drop every cached response.
    pub fn insert_product(&mut self, product: Product) -> Result<(), CatalogError> {
        self.catalog.insert_product(product)?;
        self.cache.clear();
        Ok(())
    }

    /// Swap in a new catalog and drop every cached response.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.cache.clear();
    }
}
