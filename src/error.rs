// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time errors.
//!
//! Searching never fails. Reading catalogs and lexicons from disk can, and
//! those failures are reported with enough context to fix the input file.

use std::path::PathBuf;

/// Errors raised while loading or mutating a [`crate::Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("product '{id}' has an empty SKU")]
    EmptySku { id: String },

    #[error("duplicate SKU '{sku}' (products '{first}' and '{second}')")]
    DuplicateSku {
        sku: String,
        first: String,
        second: String,
    },

    #[error("product '{id}' has invalid price {price} (must be finite and >= 0)")]
    InvalidPrice { id: String, price: f64 },
}

/// Errors raised while loading a custom [`crate::Lexicon`].
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("synonym group #{index} has an empty canonical term")]
    EmptyTerm { index: usize },
}
