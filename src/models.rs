use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Book,
    Cd,
    Dvd,
    Lp,
}

/// Catalog record. Cart lines embed a full copy of this captured at
/// add-time, so later catalog edits do not reach into an existing cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: ProductCategory,
    pub price: i64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    /// Derived, never trusted from storage: recomputed before every save.
    #[serde(rename = "totalPriceExcludingVAT")]
    pub total_price_excluding_vat: i64,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_price_excluding_vat: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    ProductManager,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub province: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    // Plaintext by design: the account list is mock data, not a credential store.
    pub password: String,
    pub roles: Vec<Role>,
    pub address: Option<Address>,
}

impl UserAccount {
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}
