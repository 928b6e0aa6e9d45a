//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, Product, Specifications};

/// Create a product with the given identity and defaults everywhere else.
///
/// The id is derived from the SKU, the product is in stock and not featured.
///
/// This is the canonical implementation used across all tests.
pub fn make_product(sku: &str, name: &str, category_id: &str, price: f64) -> Product {
    Product {
        id: format!("p-{}", sku.to_lowercase()),
        sku: sku.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: String::new(),
        short_description: String::new(),
        category_id: category_id.to_string(),
        tags: vec![],
        specifications: Specifications::default(),
        price,
        featured: false,
        rating: 0.0,
        in_stock: true,
        created_at: None,
    }
}

/// Create a product with a material specification.
pub fn make_product_with_material(
    sku: &str,
    name: &str,
    category_id: &str,
    material: &str,
) -> Product {
    let mut product = make_product(sku, name, category_id, 10.0);
    product.specifications.material = Some(material.to_string());
    product
}

/// Create a category.
pub fn make_category(id: &str, name: &str, slug: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}
