//! Products and categories JSON files.

use catalog_search::{Catalog, CatalogError, SearchEngine, SearchRequest};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PRODUCTS: &str = r#"{
  "Product": [
    {
      "id": "p1", "sku": "NB47", "name": "Classic Notebook", "slug": "classic-notebook",
      "description": "A5 ruled notebook with a PU leather cover",
      "shortDescription": "Everyday notebook",
      "categoryId": "notebooks", "tags": ["notebook", "eco"],
      "specifications": {"material": "PU Leather", "size": "A5", "pages": "160"},
      "price": 12, "featured": true, "rating": 4.6, "inStock": true,
      "createdAt": "2024-02-01T09:00:00Z", "moq": 50
    },
    {
      "id": "p2", "sku": "VF10", "name": "Vacuum Flask", "categoryId": "vacuum-flask",
      "specifications": {"material": "Stainless Steel"}, "price": 25
    }
  ]
}"#;

const CATEGORIES: &str = r#"[
  {"id": "notebooks", "name": "Notebooks", "slug": "notebooks"},
  {"id": "vacuum-flask", "name": "Vacuum Flasks", "slug": "vacuum-flask"}
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_wrapped_products_with_categories() {
    let dir = TempDir::new().unwrap();
    let products = write(&dir, "products.json", PRODUCTS);
    let categories = write(&dir, "categories.json", CATEGORIES);

    let catalog = Catalog::from_paths(&products, Some(categories.as_path())).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories().len(), 2);
    assert!(catalog.orphaned_category_ids().is_empty());

    let notebook = &catalog.products()[0];
    assert_eq!(notebook.short_description, "Everyday notebook");
    assert_eq!(notebook.specifications.size.as_deref(), Some("A5"));
    assert_eq!(notebook.rating, 4.6);

    let flask = &catalog.products()[1];
    assert!(flask.in_stock);
    assert!(!flask.featured);
    assert!(flask.tags.is_empty());
}

#[test]
fn test_load_bare_array_without_categories() {
    let dir = TempDir::new().unwrap();
    let products = write(
        &dir,
        "products.json",
        r#"[{"id":"1","sku":"AM-1","name":"Automug","categoryId":"mugs","price":9.5}]"#,
    );
    let catalog = Catalog::from_paths(&products, None).unwrap();
    assert_eq!(catalog.orphaned_category_ids(), vec!["mugs"]);

    let response = SearchEngine::new(catalog).search(&SearchRequest::new("automug"));
    assert_eq!(response.total_results, 1);
    assert!(response.filters.categories.is_empty());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let err = Catalog::from_paths(&missing, None).unwrap_err();
    match &err {
        CatalogError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_duplicate_sku_in_file() {
    let dir = TempDir::new().unwrap();
    let products = write(
        &dir,
        "products.json",
        r#"[{"id":"a","sku":"X-1","name":"A","categoryId":"c","price":1},
            {"id":"b","sku":"X-1","name":"B","categoryId":"c","price":2}]"#,
    );
    let err = Catalog::from_paths(&products, None).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSku { ref sku, .. } if sku == "X-1"));
}

#[test]
fn test_negative_price_in_file() {
    let dir = TempDir::new().unwrap();
    let products = write(
        &dir,
        "products.json",
        r#"[{"id":"a","sku":"X-1","name":"A","categoryId":"c","price":-3}]"#,
    );
    assert!(matches!(
        Catalog::from_paths(&products, None),
        Err(CatalogError::InvalidPrice { .. })
    ));
}
