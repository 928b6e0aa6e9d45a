// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scoring cascade, one rule at a time.
//!
//! [`RULES`] is evaluated top to bottom and the first `Some` wins. A rule
//! returning `Some(ScoreResult::no_match())` is a hard stop: the code-query
//! rule uses it so "AM999" never falls through to tag or description matches.
//!
//! Rule 3 ("field contains query") requires a single-word query to appear as
//! a whole word. Partial words are rule 4's job, which scores them by how much
//! of the word was typed: "fla" against "flask" is `0.75 × 3/5`. A query that
//! spans several words ("classic note") is a plain substring match, since the
//! last word is usually still being typed.

use super::core::*;
use crate::types::{MatchType, ScoreResult};
use crate::utils::{contains_word, split_words};

/// A named step in the cascade.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&ScoringContext<'_>) -> Option<ScoreResult>,
}

/// The cascade, in priority order.
pub const RULES: &[Rule] = &[
    Rule { name: "exact", apply: exact },
    Rule { name: "code-query", apply: code_query },
    Rule { name: "field-contains", apply: field_contains },
    Rule { name: "word-prefix", apply: word_prefix },
    Rule { name: "sku-pattern", apply: sku_pattern },
    Rule { name: "tag", apply: tag },
    Rule { name: "short-description", apply: short_description },
    Rule { name: "synonym", apply: synonym },
    Rule { name: "specification", apply: specification },
    Rule { name: "description", apply: description },
];

/// First rule that fires, with its result.
pub fn first_match(ctx: &ScoringContext<'_>) -> Option<(&'static str, ScoreResult)> {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(ctx).map(|result| (rule.name, result)))
}

/// 1. SKU (hyphens stripped) or name equals the query.
pub fn exact(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    let sku_equal = !ctx.query_stripped.is_empty()
        && crate::utils::strip_hyphens(&ctx.sku) == ctx.query_stripped;
    (sku_equal || ctx.name == ctx.query).then_some(ScoreResult::new(EXACT_SCORE, MatchType::Exact))
}

/// 2. Code-like queries only ever match SKUs. Otherwise stop with no match.
pub fn code_query(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    if !ctx.code_like {
        return None;
    }
    if ctx.sku.contains(ctx.query) {
        Some(ScoreResult::new(CODE_SKU_SCORE, MatchType::Sku))
    } else {
        Some(ScoreResult::no_match())
    }
}

/// Rule 3's notion of "contains": whole words for one-word queries, plain
/// substring once the query spans a word separator.
fn field_mentions(field: &str, query: &str) -> bool {
    if query.contains(|c: char| c.is_whitespace() || c == '-') {
        field.contains(query)
    } else {
        contains_word(field, query)
    }
}

/// 3. Name, SKU, material, or category contains the query.
pub fn field_contains(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    let q = ctx.query;

    if field_mentions(&ctx.name, q) {
        let score = if ctx.name.starts_with(q) {
            NAME_PREFIX_SCORE
        } else {
            NAME_CONTAINS_SCORE
        };
        return Some(ScoreResult::new(score, MatchType::Exact));
    }

    if ctx.sku.contains(q) {
        return Some(ScoreResult::new(SKU_CONTAINS_SCORE, MatchType::Sku));
    }

    if let Some(material) = ctx.material.as_deref() {
        if field_mentions(material, q) {
            let score = if material.starts_with(q) {
                MATERIAL_PREFIX_SCORE
            } else {
                MATERIAL_CONTAINS_SCORE
            };
            return Some(ScoreResult::new(score, MatchType::Exact));
        }
    }

    let category_fields = [ctx.category_name.as_deref(), ctx.category_slug.as_deref()];
    if category_fields.iter().flatten().any(|field| field_mentions(field, q)) {
        let exact = category_fields.iter().flatten().any(|field| *field == q);
        let score = if exact {
            CATEGORY_EXACT_SCORE
        } else {
            CATEGORY_CONTAINS_SCORE
        };
        return Some(ScoreResult::new(score, MatchType::Exact));
    }

    None
}

/// Best-effort prefix score for one field: `weight × query_len / word_len` for
/// the first word that starts with the query.
fn prefix_score(text: &str, query: &str, query_len: usize, weight: f64) -> Option<f64> {
    split_words(text).find_map(|word| {
        let word_len = word.chars().count();
        if word_len == 0 || !word.starts_with(query) {
            return None;
        }
        Some(weight * (query_len as f64 / word_len as f64))
    })
}

/// 4. Some word of the name, material, or category name starts with the query.
pub fn word_prefix(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    let fields = [
        (Some(ctx.name.as_str()), NAME_WORD_WEIGHT),
        (ctx.material.as_deref(), MATERIAL_WORD_WEIGHT),
        (ctx.category_name.as_deref(), CATEGORY_WORD_WEIGHT),
    ];
    fields.iter().find_map(|(text, weight)| {
        let text = (*text)?;
        prefix_score(text, ctx.query, ctx.query_len, *weight)
            .map(|score| ScoreResult::new(score, MatchType::Partial))
    })
}

/// 5. SKU prefix vocabulary, in both directions.
///
/// First: the query is itself a known prefix ("vf") and the product talks
/// about that thing ("vacuum flask"). Then: the product's SKU prefix maps to a
/// term that overlaps the query ("AM-001" ↔ "automug").
pub fn sku_pattern(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    if let Some(terms) = ctx.lexicon.sku_terms(&ctx.query_upper) {
        let mentioned = terms
            .iter()
            .any(|term| ctx.name.contains(term.as_str()) || ctx.description.contains(term.as_str()));
        if mentioned {
            return Some(ScoreResult::new(SKU_PATTERN_QUERY_SCORE, MatchType::Sku));
        }
    }

    if let Some(terms) = ctx.lexicon.sku_terms(ctx.sku_prefix()) {
        let related = terms
            .iter()
            .any(|term| ctx.query.contains(term.as_str()) || term.contains(ctx.query));
        if related {
            return Some(ScoreResult::new(SKU_PATTERN_PRODUCT_SCORE, MatchType::Sku));
        }
    }

    None
}

/// 6. A tag contains the query, or the query contains a tag.
pub fn tag(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    ctx.tags
        .iter()
        .any(|tag| tag.contains(ctx.query) || ctx.query.contains(tag.as_str()))
        .then_some(ScoreResult::new(TAG_SCORE, MatchType::Tag))
}

/// 7. Short description mentions the query as a word.
pub fn short_description(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    contains_word(&ctx.short_description, ctx.query)
        .then_some(ScoreResult::new(SHORT_DESCRIPTION_SCORE, MatchType::Description))
}

/// 8. Synonym expansion, canonical term first, then reverse lookup per group.
pub fn synonym(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    let mentions = |needle: &str| {
        ctx.name.contains(needle)
            || ctx
                .material
                .as_deref()
                .is_some_and(|material| material.contains(needle))
    };

    for group in ctx.lexicon.synonyms() {
        if group.term == ctx.query && group.alternates.iter().any(|alt| mentions(alt.as_str())) {
            return Some(ScoreResult::new(SYNONYM_SCORE, MatchType::Synonym));
        }
        if group.alternates.iter().any(|alt| alt == ctx.query) && mentions(group.term.as_str()) {
            return Some(ScoreResult::new(REVERSE_SYNONYM_SCORE, MatchType::Synonym));
        }
    }
    None
}

/// 9. Size, printing type, or features mention the query.
pub fn specification(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    let fields = [
        (ctx.size.as_deref(), SIZE_SCORE),
        (ctx.printing_type.as_deref(), PRINTING_TYPE_SCORE),
        (ctx.features.as_deref(), FEATURES_SCORE),
    ];
    fields.iter().find_map(|(value, score)| {
        value
            .is_some_and(|v| v.contains(ctx.query))
            .then_some(ScoreResult::new(*score, MatchType::Description))
    })
}

/// 10. Long description mentions the query as a word (3+ characters only).
pub fn description(ctx: &ScoringContext<'_>) -> Option<ScoreResult> {
    (ctx.query_len >= DESCRIPTION_MIN_QUERY_LEN && contains_word(&ctx.description, ctx.query))
        .then_some(ScoreResult::new(DESCRIPTION_SCORE, MatchType::Description))
}
