// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The JSON response handed back to the storefront.

use super::facets::Facets;
use crate::types::{MatchType, Product, ScoreResult, ScoredProduct};
use crate::utils::{normalize, snippet};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Characters of description context on each side of a snippet match.
pub const SNIPPET_RADIUS: usize = 50;

/// Product fields a query can be found in, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    Sku,
    Description,
    Tags,
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub product: Product,
    /// 0 for unscored (empty-query) listings.
    pub relevance_score: f64,
    pub match_type: MatchType,
    pub matched_fields: Vec<MatchedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Pagination metadata. Present only when the request asked for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// Everything one search returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    /// Matches before pagination.
    pub total_results: usize,
    /// Milliseconds, rounded to two decimals.
    pub execution_time: f64,
    pub results: Vec<ResultEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub filters: Facets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

/// Which fields contain the (normalized) query, in a fixed order.
pub fn matched_fields(product: &Product, query: &str) -> Vec<MatchedField> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut fields = Vec::with_capacity(4);
    if product.name.to_lowercase().contains(query) {
        fields.push(MatchedField::Name);
    }
    if product.sku.to_lowercase().contains(query) {
        fields.push(MatchedField::Sku);
    }
    if product.description.to_lowercase().contains(query) {
        fields.push(MatchedField::Description);
    }
    if product.tags.iter().any(|t| t.to_lowercase().contains(query)) {
        fields.push(MatchedField::Tags);
    }
    fields
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

fn entry(scored: &ScoredProduct<'_>, query: &str) -> ResultEntry {
    let relevance = scored.relevance.unwrap_or_else(ScoreResult::no_match);
    ResultEntry {
        product: scored.product.clone(),
        relevance_score: relevance.score,
        match_type: relevance.match_type,
        matched_fields: matched_fields(scored.product, query),
        snippet: snippet(&scored.product.description, query, SNIPPET_RADIUS),
    }
}

/// Package one page of results with its facets and suggestions.
///
/// `results` is the page to return; `total_results` counts every match.
pub fn assemble_response(
    query: &str,
    results: &[ScoredProduct<'_>],
    total_results: usize,
    facets: Facets,
    suggestions: Vec<String>,
    page: Option<PageInfo>,
    elapsed: Duration,
) -> SearchResponse {
    let normalized = normalize(query);
    SearchResponse {
        query: query.to_string(),
        total_results,
        execution_time: round_millis(elapsed),
        results: results.iter().map(|r| entry(r, &normalized)).collect(),
        suggestions,
        filters: facets,
        page,
    }
}
