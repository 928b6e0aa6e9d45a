// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catalog-search command-line interface.
//!
//! Three subcommands: `search` to run a query against catalog JSON files,
//! `inspect` to summarize a catalog, and `suggest` to show query completions.
//! `search --json` prints the full response, the same shape the storefront
//! consumes.

pub mod display;

use catalog_search::{ProductFilters, SortMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Search and rank a corporate-gifts product catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog comes from.
#[derive(Args)]
pub struct CatalogArgs {
    /// Products JSON (bare array or {"Product": [...]})
    #[arg(short, long)]
    pub products: PathBuf,

    /// Categories JSON (array of {id, name, slug})
    #[arg(short, long)]
    pub categories: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and print ranked results
    Search {
        /// Search query (empty lists the whole catalog)
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Only products in this category id
        #[arg(long)]
        category: Option<String>,

        /// Sort mode for empty queries
        #[arg(long, default_value = "default")]
        sort: SortMode,

        /// 1-based page number (omit to return every result)
        #[arg(long)]
        page: Option<usize>,

        /// Results per page
        #[arg(long, default_value_t = catalog_search::DEFAULT_PER_PAGE)]
        per_page: usize,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Required tag (repeatable; every tag must be present)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only products in stock
        #[arg(long)]
        in_stock: bool,

        /// Custom lexicon JSON instead of the built-in synonyms
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog: counts, orphaned categories, price range
    Inspect {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Show query completions for a prefix
    Suggest {
        /// Partially typed query
        prefix: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Custom lexicon JSON instead of the built-in synonyms
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

/// Build filters from the search flags. Boolean flags only ever narrow.
pub fn filters_from_args(
    category: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    tags: Vec<String>,
    featured: bool,
    in_stock: bool,
) -> ProductFilters {
    ProductFilters {
        category_id: category,
        min_price,
        max_price,
        tags,
        featured: featured.then_some(true),
        in_stock: in_stock.then_some(true),
    }
}
