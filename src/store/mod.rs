//! Storage seam between the HTTP handlers and the persisted catalog.
//!
//! [`PgStore`] is the production backend. [`MemoryStore`] keeps everything in
//! process and backs local runs and the test suite.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{FinnAd, Product, ProductSummary, UrlKeyRecord},
    utils::url_key::UrlKey,
};

pub use memory::{MemoryStore, SeedData};
pub use postgres::PgStore;

/// Outcome of the guarded finn query write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryUpdate {
    Applied,
    ProductMissing,
}

#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Short backend name reported by `/health/ready`.
    fn backend(&self) -> &'static str;

    /// Up to `size` products in random order.
    async fn sample_products(&self, size: i64) -> Result<Vec<ProductSummary>>;

    /// One product with its codes and retailer offers joined in.
    async fn find_product(&self, id: i32) -> Result<Option<Product>>;

    async fn find_ads_for_product(&self, product_id: i32) -> Result<Vec<FinnAd>>;

    /// Sets the product's finn query and upserts `record` as one unit.
    /// When the product does not exist nothing is written.
    async fn update_finn_query(
        &self,
        product_id: i32,
        finn_query: &str,
        record: &UrlKeyRecord,
    ) -> Result<QueryUpdate>;

    async fn find_url_key(&self, key: &UrlKey) -> Result<Option<UrlKeyRecord>>;

    async fn check_health(&self) -> Result<()>;
}
