// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory catalog store.
//!
//! Products and categories are loaded once, validated, and then only read by
//! the search path. The store checks what the scorer relies on (non-empty,
//! unique SKUs and sane prices) so search itself never has to fail.

use crate::error::CatalogError;
use crate::types::{Category, Product};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Products JSON as exported by the storefront: either a bare array or the
/// `{"Product": [...]}` table wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsFile {
    Bare(Vec<Product>),
    Wrapped {
        #[serde(rename = "Product")]
        products: Vec<Product>,
    },
}

impl From<ProductsFile> for Vec<Product> {
    fn from(file: ProductsFile) -> Self {
        match file {
            ProductsFile::Bare(products) => products,
            ProductsFile::Wrapped { products } => products,
        }
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Products plus the categories they reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    /// Category id → index into `categories`.
    category_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(products.len());
        for product in &products {
            validate(product)?;
            if let Some(first) = seen.insert(product.sku.as_str(), product.id.as_str()) {
                return Err(CatalogError::DuplicateSku {
                    sku: product.sku.clone(),
                    first: first.to_string(),
                    second: product.id.clone(),
                });
            }
        }

        let category_index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        let catalog = Self {
            products,
            categories,
            category_index,
        };
        for orphan in catalog.orphaned_category_ids() {
            tracing::warn!(category_id = %orphan, "products reference an unknown category");
        }
        Ok(catalog)
    }

    /// Parse products and categories from JSON text.
    pub fn from_json_str(products_json: &str, categories_json: Option<&str>) -> Result<Self, CatalogError> {
        let products: ProductsFile = serde_json::from_str(products_json)?;
        let categories: Vec<Category> = match categories_json {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };
        Self::new(products.into(), categories)
    }

    /// Load products (and optionally categories) from JSON files.
    pub fn from_paths(
        products_path: impl AsRef<Path>,
        categories_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let products_path = products_path.as_ref();
        let products_json = read(products_path)?;
        let categories_json = categories_path.map(read).transpose()?;

        let catalog = Self::from_json_str(&products_json, categories_json.as_deref())?;
        tracing::debug!(
            path = %products_path.display(),
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// The category a product belongs to, if it resolves.
    pub fn category_of(&self, product: &Product) -> Option<&Category> {
        self.category(&product.category_id)
    }

    /// Category ids referenced by products but missing from the category list,
    /// sorted and deduplicated.
    pub fn orphaned_category_ids(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .products
            .iter()
            .map(|p| p.category_id.as_str())
            .filter(|id| !self.category_index.contains_key(*id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        orphans.sort_unstable();
        orphans
    }

    /// Add one product, keeping SKUs unique.
    pub fn insert_product(&mut self, product: Product) -> Result<(), CatalogError> {
        validate(&product)?;
        if let Some(existing) = self.products.iter().find(|p| p.sku == product.sku) {
            return Err(CatalogError::DuplicateSku {
                sku: product.sku.clone(),
                first: existing.id.clone(),
                second: product.id.clone(),
            });
        }
        if !self.category_index.contains_key(&product.category_id) {
            tracing::warn!(
                sku = %product.sku,
                category_id = %product.category_id,
                "inserted product references an unknown category"
            );
        }
        self.products.push(product);
        Ok(())
    }
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    if product.sku.trim().is_empty() {
        return Err(CatalogError::EmptySku {
            id: product.id.clone(),
        });
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::InvalidPrice {
            id: product.id.clone(),
            price: product.price,
        });
    }
    Ok(())
}
