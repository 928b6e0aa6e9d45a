// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use catalog_search::{explain, Catalog, Lexicon, SearchEngine, SearchRequest, SearchResponse};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{filters_from_args, CatalogArgs, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            query,
            catalog,
            category,
            sort,
            page,
            per_page,
            min_price,
            max_price,
            tags,
            featured,
            in_stock,
            lexicon,
            json,
        } => {
            let engine = SearchEngine::with_lexicon(
                load_catalog(&catalog)?,
                load_lexicon(lexicon.as_deref())?,
            );
            let mut request = SearchRequest::new(query)
                .with_filters(filters_from_args(category, min_price, max_price, tags, featured, in_stock))
                .with_sort(sort);
            request.per_page = per_page;
            request.page = page;

            let response = engine.search(&request);
            if json {
                let out = serde_json::to_string_pretty(&response).context("failed to serialize response")?;
                println!("{}", out);
            } else {
                print_response(&engine, &response);
            }
        }
        Commands::Inspect { catalog } => {
            let catalog = load_catalog(&catalog)?;
            print_inspect(&catalog);
        }
        Commands::Suggest {
            prefix,
            catalog,
            lexicon,
        } => {
            let engine = SearchEngine::with_lexicon(
                load_catalog(&catalog)?,
                load_lexicon(lexicon.as_deref())?,
            );
            for suggestion in engine.suggest(&prefix) {
                println!("{}", suggestion);
            }
        }
    }
    Ok(())
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    Catalog::from_paths(&args.products, args.categories.as_deref())
        .with_context(|| format!("failed to load catalog from {}", args.products.display()))
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => Lexicon::from_path(path)
            .with_context(|| format!("failed to load lexicon from {}", path.display())),
        None => Ok(Lexicon::builtin().clone()),
    }
}

fn print_response(engine: &SearchEngine, response: &SearchResponse) {
    let catalog = engine.catalog();
    let heading = if response.query.trim().is_empty() {
        "ALL PRODUCTS".to_string()
    } else {
        format!("RESULTS FOR \"{}\"", response.query.trim())
    };

    section_top(&heading);
    row(&format!(
        " {} found in {}",
        themed(Tone::Info, &[BOLD], &response.total_results.to_string()),
        timing_ms(response.execution_time)
    ));
    if let Some(page) = response.page {
        row(&format!(
            " page {} of {} ({} per page)",
            page.page, page.total_pages, page.per_page
        ));
    }

    if !response.results.is_empty() {
        section_mid("MATCHES");
        row(&format!(
            " {}  {}  {}  {}  {}",
            pad_right("SCORE", 5),
            pad_right("MATCH", 11),
            pad_right("SKU", 12),
            pad_right("NAME", 34),
            pad_left("PRICE", 9),
        ));
        for entry in &response.results {
            let product = &entry.product;
            let rule = explain(product, catalog.category_of(product), &response.query, engine.lexicon())
                .map(|r| themed(Tone::Muted, &[DIM], &format!(" [{}]", r)))
                .unwrap_or_default();
            let star = if product.featured { "★ " } else { "" };
            row(&format!(
                " {}  {}  {}  {}  {}{}",
                pad_right(&score_value(entry.relevance_score), 5),
                pad_right(&match_type_label(entry.match_type.as_str()), 11),
                pad_right(&truncate(&product.sku, 12), 12),
                pad_right(&truncate(&format!("{}{}", star, product.name), 34), 34),
                pad_left(&price(product.price), 9),
                rule,
            ));
            if let Some(snippet) = &entry.snippet {
                row(&format!("        {}", themed(Tone::Muted, &[], &truncate(snippet, BOX_WIDTH - 9))));
            }
        }
    }

    if !response.filters.categories.is_empty() || !response.filters.tags.is_empty() {
        section_mid("FACETS");
        for facet in &response.filters.categories {
            row(&format!(" {} {}", pad_right(&facet.name, 30), facet.count));
        }
        if let Some(range) = response.filters.price_range {
            row(&format!(" price {} – {}", price(range.min), price(range.max)));
        }
        if !response.filters.tags.is_empty() {
            let tags: Vec<String> = response
                .filters
                .tags
                .iter()
                .map(|t| format!("{} ({})", t.name, t.count))
                .collect();
            row(&format!(" tags: {}", truncate(&tags.join(", "), BOX_WIDTH - 8)));
        }
    }

    if !response.suggestions.is_empty() {
        section_mid("DID YOU MEAN");
        row(&format!(" {}", themed(Tone::Related, &[], &response.suggestions.join(", "))));
    }
    section_bot();
}

fn print_inspect(catalog: &Catalog) {
    section_top("CATALOG");
    row(&format!(" products     {}", catalog.len()));
    row(&format!(" categories   {}", catalog.categories().len()));
    row(&format!(
        " featured     {}",
        catalog.products().iter().filter(|p| p.featured).count()
    ));
    row(&format!(
        " in stock     {}",
        catalog.products().iter().filter(|p| p.in_stock).count()
    ));

    let mut prices = catalog.products().iter().map(|p| p.price);
    if let Some(first) = prices.next() {
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        row(&format!(" price range  {} – {}", price(min), price(max)));
    }

    section_mid("CATEGORIES");
    for category in catalog.categories() {
        let count = catalog
            .products()
            .iter()
            .filter(|p| p.category_id == category.id)
            .count();
        row(&format!(
            " {} {} {}",
            pad_right(&category.id, 24),
            pad_right(&truncate(&category.name, 40), 40),
            pad_left(&count.to_string(), 6)
        ));
    }

    let orphans = catalog.orphaned_category_ids();
    if !orphans.is_empty() {
        section_mid("ORPHANED CATEGORY REFERENCES");
        for id in orphans {
            row(&format!(" {}", themed(Tone::Error, &[], id)));
        }
    }
    section_bot();
}
