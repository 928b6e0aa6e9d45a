// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind search ranking.
//!
//! # Constants
//!
//! Every score below is hand-tuned. None of them is load-bearing on its own;
//! what matters is the ordering (precision decreases down the cascade) and the
//! two thresholds that decide what reaches the shopper. Change them together
//! and re-run `tests/search/scenarios.rs`.
//!
//! | Rule                         | Score        | Match type    |
//! |------------------------------|--------------|---------------|
//! | SKU / name equals query      | 1.0          | `exact`       |
//! | Code query, SKU contains     | 0.95         | `sku`         |
//! | Name starts with / contains  | 0.9 / 0.8    | `exact`       |
//! | SKU contains                 | 0.85         | `sku`         |
//! | Material starts / contains   | 0.82 / 0.75  | `exact`       |
//! | Category equals / contains   | 0.8 / 0.72   | `exact`       |
//! | Word prefix (name/mat/cat)   | w × q/word   | `partial`     |
//! | Query is SKU prefix          | 0.7          | `sku`         |
//! | Product SKU prefix terms     | 0.65         | `sku`         |
//! | Tag                          | 0.6          | `tag`         |
//! | Short description word       | 0.55         | `description` |
//! | Synonym / reverse synonym    | 0.5 / 0.45   | `synonym`     |
//! | Size / printing / features   | 0.4/0.38/0.35| `description` |
//! | Description word             | 0.25         | `description` |

use super::rules::{self, RULES};
use crate::lexicon::Lexicon;
use crate::types::{Category, Product, ScoreResult};
use crate::utils::{normalize, strip_hyphens};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// SKU (hyphens ignored) or name equals the query.
pub const EXACT_SCORE: f64 = 1.0;

/// Code-like query found inside the SKU.
pub const CODE_SKU_SCORE: f64 = 0.95;

/// Name starts with the query (whole word for one-word queries).
pub const NAME_PREFIX_SCORE: f64 = 0.9;
/// Name contains the query (whole word for one-word queries).
pub const NAME_CONTAINS_SCORE: f64 = 0.8;
/// SKU contains the query (non-code queries).
pub const SKU_CONTAINS_SCORE: f64 = 0.85;
/// Material starts with (or equals) the query.
pub const MATERIAL_PREFIX_SCORE: f64 = 0.82;
/// Material contains the query (whole word for one-word queries).
pub const MATERIAL_CONTAINS_SCORE: f64 = 0.75;
/// Category name or slug equals the query.
pub const CATEGORY_EXACT_SCORE: f64 = 0.8;
/// Category name or slug contains the query (whole word for one-word queries).
pub const CATEGORY_CONTAINS_SCORE: f64 = 0.72;

/// Word-prefix weights. Final score is `weight × query_len / word_len`.
pub const NAME_WORD_WEIGHT: f64 = 0.75;
pub const MATERIAL_WORD_WEIGHT: f64 = 0.7;
pub const CATEGORY_WORD_WEIGHT: f64 = 0.68;

/// Query is a known SKU prefix and its terms appear in name or description.
pub const SKU_PATTERN_QUERY_SCORE: f64 = 0.7;
/// Product's own SKU prefix maps to a term related to the query.
pub const SKU_PATTERN_PRODUCT_SCORE: f64 = 0.65;

pub const TAG_SCORE: f64 = 0.6;
pub const SHORT_DESCRIPTION_SCORE: f64 = 0.55;

/// Query is a canonical term and the product mentions one of its alternates.
pub const SYNONYM_SCORE: f64 = 0.5;
/// Query is an alternate and the product mentions the canonical term.
pub const REVERSE_SYNONYM_SCORE: f64 = 0.45;

pub const SIZE_SCORE: f64 = 0.4;
pub const PRINTING_TYPE_SCORE: f64 = 0.38;
pub const FEATURES_SCORE: f64 = 0.35;

/// Description word match. Only for queries of at least
/// [`DESCRIPTION_MIN_QUERY_LEN`] characters.
pub const DESCRIPTION_SCORE: f64 = 0.25;
pub const DESCRIPTION_MIN_QUERY_LEN: usize = 3;

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Minimum score for results of code-like queries.
pub const CODE_QUERY_THRESHOLD: f64 = 0.8;

/// Minimum score for results of every other non-empty query.
pub const TEXT_QUERY_THRESHOLD: f64 = 0.2;

/// Scores this close are ranked as ties (featured first, then name).
pub const TIE_WINDOW: f64 = 0.1;

/// 2-4 ASCII letters followed by ASCII digits: "AM123", "vf10".
const CODE_QUERY_PATTERN: &str = r"^[A-Za-z]{2,4}[0-9]+$";

/// `None` if the pattern failed to compile, in which case nothing is code-like.
static CODE_QUERY: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(CODE_QUERY_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        tracing::warn!(error = %err, "code query pattern failed to compile; treating all queries as text");
        None
    }
});

/// Does this query look like an SKU lookup rather than free text?
///
/// Trims first, case-insensitive. Never panics: if the detector is
/// unavailable the answer is `false` and the query takes the text path.
pub fn is_code_query(query: &str) -> bool {
    CODE_QUERY
        .as_ref()
        .is_some_and(|re| re.is_match(query.trim()))
}

/// Minimum score a result needs to survive filtering for this query.
pub fn min_score_for(query: &str) -> f64 {
    if is_code_query(query) {
        CODE_QUERY_THRESHOLD
    } else {
        TEXT_QUERY_THRESHOLD
    }
}

// =============================================================================
// SCORING CONTEXT
// =============================================================================

/// Everything a rule needs, lower-cased once per (product, query) pair.
///
/// Rules are plain functions over this struct, so each can be tested alone.
pub struct ScoringContext<'a> {
    pub query: &'a str,
    pub query_upper: String,
    pub query_stripped: String,
    pub query_len: usize,
    pub code_like: bool,

    pub name: String,
    pub sku: String,
    pub description: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub printing_type: Option<String>,
    pub features: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,

    pub lexicon: &'a Lexicon,
}

fn lower(value: Option<&String>) -> Option<String> {
    value.map(|v| v.to_lowercase()).filter(|v| !v.is_empty())
}

impl<'a> ScoringContext<'a> {
    /// `query` must already be normalized (see [`crate::utils::normalize`]).
    pub fn new(
        product: &Product,
        category: Option<&Category>,
        query: &'a str,
        lexicon: &'a Lexicon,
    ) -> Self {
        let specs = &product.specifications;
        Self {
            query,
            query_upper: query.to_uppercase(),
            query_stripped: strip_hyphens(query),
            query_len: query.chars().count(),
            code_like: is_code_query(query),

            name: product.name.to_lowercase(),
            sku: product.sku.to_lowercase(),
            description: product.description.to_lowercase(),
            short_description: product.short_description.to_lowercase(),
            tags: product
                .tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            material: lower(specs.material.as_ref()),
            size: lower(specs.size.as_ref()),
            printing_type: lower(specs.printing_type.as_ref()),
            features: lower(specs.features.as_ref()),
            category_name: lower(category.map(|c| &c.name)),
            category_slug: lower(category.map(|c| &c.slug)),

            lexicon,
        }
    }

    /// The product's SKU up to the first hyphen: "vf-1001" → "vf".
    pub fn sku_prefix(&self) -> &str {
        self.sku.split('-').next().unwrap_or("")
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Score one product against a free-text query.
///
/// `category` is the product's category record, if it resolves; an orphaned
/// `category_id` just disables the category rules. The query is trimmed and
/// lower-cased here. An empty query scores 0.
pub fn score_product(
    product: &Product,
    category: Option<&Category>,
    query: &str,
    lexicon: &Lexicon,
) -> ScoreResult {
    let query = normalize(query);
    if query.is_empty() {
        return ScoreResult::no_match();
    }
    let ctx = ScoringContext::new(product, category, &query, lexicon);
    score_context(&ctx)
}

/// Run the cascade: the first rule that returns `Some` decides the score.
pub fn score_context(ctx: &ScoringContext<'_>) -> ScoreResult {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(ctx))
        .unwrap_or_else(ScoreResult::no_match)
}

/// Name of the rule that decided this product's score, for debugging output.
/// `None` when nothing matched.
pub fn explain(
    product: &Product,
    category: Option<&Category>,
    query: &str,
    lexicon: &Lexicon,
) -> Option<&'static str> {
    let query = normalize(query);
    if query.is_empty() {
        return None;
    }
    let ctx = ScoringContext::new(product, category, &query, lexicon);
    rules::first_match(&ctx).and_then(|(name, result)| result.is_match().then_some(name))
}
