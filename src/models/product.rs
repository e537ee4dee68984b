use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub finn_query: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub mpns: Vec<String>,
    #[serde(default)]
    pub gtins: Vec<String>,
    #[serde(default)]
    pub retailers: Vec<Retailer>,
    pub category: Option<Category>,
}

/// Category facets assigned by the ingestion job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub main: i32,
    pub sub: i32,
    pub product: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Retailer {
    pub name: String,
    pub price: Decimal,
    pub sku: String,
    pub url: String,
    pub category: String,
}

/// Row shape of the `products` table, before the code and retailer tables
/// are joined in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub finn_query: Option<String>,
    pub brand: Option<String>,
    pub description: String,
    pub image: String,
    pub category: Option<Json<Category>>,
}

impl ProductRow {
    pub fn into_product(
        self,
        mpns: Vec<String>,
        gtins: Vec<String>,
        retailers: Vec<Retailer>,
    ) -> Product {
        Product {
            id: self.id,
            name: self.name,
            finn_query: self.finn_query,
            brand: self.brand,
            description: self.description,
            image: self.image,
            mpns,
            gtins,
            retailers,
            category: self.category.map(|Json(category)| category),
        }
    }
}

/// What the listing page needs from a product.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub description: String,
    pub image: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Validated body of `PATCH /api/products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinnQueryUpdate {
    pub finn_query: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
}
