// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static vocabulary: synonyms and SKU prefix patterns.
//!
//! Shoppers type "thermos" when the catalog says "vacuum flask", and sales
//! staff type "VF" because that's what's printed on the SKU. The lexicon maps
//! both back to catalog vocabulary.
//!
//! The built-in lexicon is constructed once per process and never mutated.
//! The scorer takes a `&Lexicon` parameter instead of reaching for a global,
//! so tests can inject a tiny table and the CLI can load one from JSON.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "synonyms": [["mug", ["cup", "tumbler"]], ["flask", ["thermos"]]],
//!   "skuPatterns": {"VF": ["vacuum flask"]}
//! }
//! ```
//!
//! Synonym groups are an ordered list, not a map: the scorer returns on the
//! first group that matches, so order is part of the behavior.

use crate::error::LexiconError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// One canonical term and its alternates, all lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub term: String,
    pub alternates: Vec<String>,
}

/// Synonym table plus SKU prefix table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexicon {
    synonyms: Vec<SynonymGroup>,
    /// Upper-case SKU prefix -> lower-case descriptive terms.
    sku_patterns: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LexiconFile {
    #[serde(default)]
    synonyms: Vec<(String, Vec<String>)>,
    #[serde(default)]
    sku_patterns: HashMap<String, Vec<String>>,
}

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Drinkware
    ("mug", &["cup", "tumbler", "automug", "travel mug", "coffee mug"]),
    ("flask", &["bottle", "vacuum flask", "thermos", "vacuum bottle"]),
    ("bottle", &["flask", "vacuum bottle", "water bottle", "drink bottle"]),
    ("tumbler", &["mug", "cup", "travel mug"]),
    ("cup", &["mug", "tumbler", "coffee cup"]),
    // Bags
    ("bag", &["tote", "backpack", "carry bag", "shopping bag", "laptop bag"]),
    ("tote", &["bag", "tote bag", "carry bag", "shopping bag"]),
    ("backpack", &["bag", "laptop bag", "carry bag"]),
    ("jute", &["jute bag", "eco bag", "natural bag"]),
    // Stationery
    ("notebook", &["journal", "notepad", "diary", "writing pad"]),
    ("pen", &["ballpoint", "writing pen", "stylus"]),
    ("journal", &["notebook", "diary", "writing pad"]),
    // Materials
    ("steel", &["stainless steel", "metal", "stainless"]),
    ("bamboo", &["eco", "sustainable", "natural"]),
    ("eco", &["sustainable", "green", "bamboo", "recycled"]),
];

const BUILTIN_SKU_PATTERNS: &[(&str, &[&str])] = &[
    ("AM", &["automug"]),
    ("NB", &["notebook"]),
    ("VF", &["vacuum flask"]),
    ("JB", &["jute bag"]),
    ("NW", &["non-woven"]),
    ("CB", &["canvas bag"]),
    ("EC", &["eco-friendly"]),
    ("BP", &["backpack"]),
    ("MB", &["messenger bag"]),
    ("MUG", &["mug"]),
    ("BAG", &["tote bag", "shopping bag"]),
    ("PEN", &["pen"]),
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new(
        BUILTIN_SYNONYMS.iter().map(|(term, alts)| {
            (
                term.to_string(),
                alts.iter().map(|a| a.to_string()).collect(),
            )
        }),
        BUILTIN_SKU_PATTERNS.iter().map(|(prefix, terms)| {
            (
                prefix.to_string(),
                terms.iter().map(|t| t.to_string()).collect(),
            )
        }),
    )
});

impl Lexicon {
    /// Build a lexicon, normalizing case: terms lower, SKU prefixes upper.
    pub fn new(
        synonyms: impl IntoIterator<Item = (String, Vec<String>)>,
        sku_patterns: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        let synonyms = synonyms
            .into_iter()
            .map(|(term, alternates)| SynonymGroup {
                term: term.trim().to_lowercase(),
                alternates: alternates
                    .into_iter()
                    .map(|a| a.trim().to_lowercase())
                    .filter(|a| !a.is_empty())
                    .collect(),
            })
            .collect();

        let sku_patterns = sku_patterns
            .into_iter()
            .map(|(prefix, terms)| {
                (
                    prefix.trim().to_uppercase(),
                    terms
                        .into_iter()
                        .map(|t| t.trim().to_lowercase())
                        .filter(|t| !t.is_empty())
                        .collect(),
                )
            })
            .collect();

        Self {
            synonyms,
            sku_patterns,
        }
    }

    /// The storefront's default vocabulary (drinkware, bags, stationery, materials).
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// An empty lexicon: synonym and SKU pattern rules never fire.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        if let Some(index) = file.synonyms.iter().position(|(t, _)| t.trim().is_empty()) {
            return Err(LexiconError::EmptyTerm { index });
        }
        Ok(Self::new(file.synonyms, file.sku_patterns))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            synonym_groups = lexicon.synonyms.len(),
            sku_patterns = lexicon.sku_patterns.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Synonym groups in table order.
    pub fn synonyms(&self) -> &[SynonymGroup] {
        &self.synonyms
    }

    /// Descriptive terms for an SKU prefix. Lookup is case-insensitive.
    pub fn sku_terms(&self, prefix: &str) -> Option<&[String]> {
        if prefix.is_empty() {
            return None;
        }
        self.sku_patterns
            .get(&prefix.to_uppercase())
            .map(Vec::as_slice)
    }

    pub fn sku_pattern_count(&self) -> usize {
        self.sku_patterns.len()
    }
}
