use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductCategory},
};

#[derive(Debug, Clone, Copy, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum ProductSortBy {
    #[default]
    CreatedAt,
    Price,
    Title,
}

#[derive(Debug, Default)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<ProductCategory>,
    pub sort_by: Option<ProductSortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Mocked product catalog: an in-memory array behind a simulated network
/// delay. Calls always resolve; there is no cancellation.
pub struct Catalog {
    products: Vec<Product>,
    delay: Duration,
}

impl Catalog {
    pub fn new(products: Vec<Product>, delay: Duration) -> Self {
        Self { products, delay }
    }

    pub async fn list(&self, query: &CatalogQuery) -> Vec<Product> {
        tokio::time::sleep(self.delay).await;

        let needle = query
            .q
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match &needle {
                Some(needle) => {
                    p.title.to_lowercase().contains(needle)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                }
                None => true,
            })
            .filter(|p| match query.category {
                Some(category) => p.category == category,
                None => true,
            })
            .cloned()
            .collect();

        let sort_by = query.sort_by.unwrap_or_default();
        let sort_order = query.sort_order.unwrap_or_default();
        items.sort_by(|a, b| {
            let ord = match sort_by {
                ProductSortBy::CreatedAt => a.created_at.cmp(&b.created_at),
                ProductSortBy::Price => a.price.cmp(&b.price),
                ProductSortBy::Title => a.title.cmp(&b.title),
            };
            match sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        items
    }

    pub async fn get(&self, id: &str) -> AppResult<Product> {
        tokio::time::sleep(self.delay).await;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    /// Small seeded media inventory for demos and tests.
    pub fn with_sample_data(delay: Duration) -> Self {
        let seeded = |days: i64| Utc.timestamp_opt(1_700_000_000 + days * 86_400, 0).unwrap();
        let products = vec![
            Product {
                id: "book-clean-code".into(),
                title: "Clean Code".into(),
                category: ProductCategory::Book,
                price: 120_000,
                quantity: 25,
                description: Some("A handbook of agile software craftsmanship".into()),
                image_url: None,
                created_at: seeded(0),
            },
            Product {
                id: "cd-abbey-road".into(),
                title: "Abbey Road".into(),
                category: ProductCategory::Cd,
                price: 250_000,
                quantity: 12,
                description: Some("The Beatles, 1969".into()),
                image_url: None,
                created_at: seeded(1),
            },
            Product {
                id: "dvd-spirited-away".into(),
                title: "Spirited Away".into(),
                category: ProductCategory::Dvd,
                price: 180_000,
                quantity: 8,
                description: Some("Studio Ghibli, 2001".into()),
                image_url: None,
                created_at: seeded(2),
            },
            Product {
                id: "lp-kind-of-blue".into(),
                title: "Kind of Blue".into(),
                category: ProductCategory::Lp,
                price: 450_000,
                quantity: 3,
                description: Some("Miles Davis, 1959".into()),
                image_url: None,
                created_at: seeded(3),
            },
        ];
        Self::new(products, delay)
    }
}
