use async_trait::async_trait;
use sqlx::PgPool;

use super::{CatalogStore, QueryUpdate};
use crate::{
    database,
    error::Result,
    models::{FinnAd, Product, ProductSummary, UrlKeyRecord},
    queries::{finn_ad_queries, product_queries, url_queries},
    utils::url_key::UrlKey,
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn sample_products(&self, size: i64) -> Result<Vec<ProductSummary>> {
        product_queries::sample_products(&self.pool, size).await
    }

    async fn find_product(&self, id: i32) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn find_ads_for_product(&self, product_id: i32) -> Result<Vec<FinnAd>> {
        finn_ad_queries::find_by_product_id(&self.pool, product_id).await
    }

    async fn update_finn_query(
        &self,
        product_id: i32,
        finn_query: &str,
        record: &UrlKeyRecord,
    ) -> Result<QueryUpdate> {
        let mut tx = self.pool.begin().await?;

        if !product_queries::set_finn_query(&mut tx, product_id, finn_query).await? {
            tx.rollback().await?;
            return Ok(QueryUpdate::ProductMissing);
        }

        url_queries::upsert(&mut tx, record).await?;

        tx.commit().await?;
        Ok(QueryUpdate::Applied)
    }

    async fn find_url_key(&self, key: &UrlKey) -> Result<Option<UrlKeyRecord>> {
        url_queries::find_by_key(&self.pool, key).await
    }

    async fn check_health(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
