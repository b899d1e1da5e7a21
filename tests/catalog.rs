use std::time::Duration;

use aims_store::{
    error::AppError,
    models::ProductCategory,
    services::catalog_service::{Catalog, CatalogQuery, ProductSortBy, SortOrder},
};

fn catalog() -> Catalog {
    Catalog::with_sample_data(Duration::ZERO)
}

#[tokio::test]
async fn list_without_filters_returns_newest_first() {
    let products = catalog().list(&CatalogQuery::default()).await;

    assert_eq!(products.len(), 4);
    for pair in products.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn search_matches_title_and_description_case_insensitively() {
    let by_title = catalog()
        .list(&CatalogQuery {
            q: Some("abbey".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "cd-abbey-road");

    let by_description = catalog()
        .list(&CatalogQuery {
            q: Some("GHIBLI".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, "dvd-spirited-away");
}

#[tokio::test]
async fn category_filter_and_price_sort_compose() {
    let products = catalog()
        .list(&CatalogQuery {
            category: Some(ProductCategory::Book),
            ..Default::default()
        })
        .await;
    assert!(products.iter().all(|p| p.category == ProductCategory::Book));

    let cheapest_first = catalog()
        .list(&CatalogQuery {
            sort_by: Some(ProductSortBy::Price),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        })
        .await;
    for pair in cheapest_first.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
}

#[tokio::test]
async fn empty_query_string_is_ignored() {
    let products = catalog()
        .list(&CatalogQuery {
            q: Some(String::new()),
            ..Default::default()
        })
        .await;
    assert_eq!(products.len(), 4);
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    match catalog().get("ghost").await {
        Err(AppError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
