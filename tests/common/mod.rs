//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalog_search::testing::make_product_with_material;
use catalog_search::{Catalog, Category, Product, SearchEngine};
use std::sync::LazyLock;

// Re-export canonical test utilities from catalog_search::testing
pub use catalog_search::testing::{make_category, make_product};

// ============================================================================
// FIXTURES
// ============================================================================

fn product(
    sku: &str,
    name: &str,
    category_id: &str,
    material: &str,
    tags: &[&str],
    price: f64,
) -> Product {
    let mut product = make_product_with_material(sku, name, category_id, material);
    product.price = price;
    product.tags = tags.iter().map(|t| t.to_string()).collect();
    product
}

/// The two-product catalog the storefront's search scenarios are written
/// against: a notebook and a vacuum flask.
pub fn scenario_catalog() -> Catalog {
    Catalog::new(
        vec![
            product(
                "NB47",
                "Classic Notebook",
                "notebooks",
                "PU Leather",
                &["notebook", "eco"],
                12.0,
            ),
            product(
                "VF10",
                "Vacuum Flask",
                "vacuum-flask",
                "Stainless Steel",
                &["flask"],
                25.0,
            ),
        ],
        scenario_categories(),
    )
    .unwrap()
}

pub fn scenario_categories() -> Vec<Category> {
    vec![
        make_category("notebooks", "Notebooks", "notebooks"),
        make_category("vacuum-flask", "Vacuum Flasks", "vacuum-flask"),
    ]
}

/// A broader gifts catalog covering every scoring rule.
pub fn gifts_catalog() -> Catalog {
    let mut products = vec![
        product("AM-101", "Automug Travel Mug", "drinkware", "Stainless Steel", &["mug", "travel"], 14.5),
        product("AM-102", "Ceramic Coffee Mug", "drinkware", "Ceramic", &["mug"], 6.0),
        product("VF-1001", "Vacuum Flask 500ml", "drinkware", "Stainless Steel", &["flask", "insulated"], 22.0),
        product("JB-20", "Jute Shopping Bag", "bags", "Jute", &["eco", "bag"], 4.5),
        product("NW-7", "Non-Woven Carry Bag", "bags", "Non-Woven Polypropylene", &["bag"], 1.2),
        product("BP-3", "Laptop Backpack", "bags", "Polyester", &["bag", "laptop"], 35.0),
        product("NB-47", "Classic Notebook", "stationery", "PU Leather", &["notebook", "eco"], 12.0),
        product("PEN-9", "Bamboo Ballpoint", "stationery", "Bamboo", &["pen", "eco"], 2.5),
        product("TM-5", "Steel Tumbler", "drinkware", "Stainless Steel", &["tumbler"], 11.0),
    ];

    products[1].short_description = "Dishwasher safe and glossy".to_string();
    products[2].featured = true;
    products[2].specifications.features = Some("Keeps drinks hot for 12 hours".to_string());
    products[3].description = "A sturdy natural fibre tote for groceries".to_string();
    products[5].specifications.size = Some("15 inch".to_string());
    products[7].specifications.printing_type = Some("Laser engraving".to_string());
    products[8].created_at = Some("2024-06-01".to_string());
    products[0].created_at = Some("2023-01-15".to_string());

    Catalog::new(
        products,
        vec![
            make_category("drinkware", "Drinkware", "drinkware"),
            make_category("bags", "Bags", "bags"),
            make_category("stationery", "Stationery", "stationery"),
        ],
    )
    .unwrap()
}

static GIFTS_ENGINE: LazyLock<SearchEngine> = LazyLock::new(|| SearchEngine::new(gifts_catalog()));

/// Shared engine over [`gifts_catalog`].
pub fn gifts_engine() -> &'static SearchEngine {
    &GIFTS_ENGINE
}

pub fn skus(response: &catalog_search::SearchResponse) -> Vec<&str> {
    response.results.iter().map(|r| r.product.sku.as_str()).collect()
}
