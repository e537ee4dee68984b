use std::{collections::BTreeMap, path::Path};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{CatalogStore, QueryUpdate};
use crate::{
    error::{AppError, Result},
    models::{FinnAd, Product, ProductSummary, UrlKeyRecord},
    utils::url_key::UrlKey,
};

/// Catalog content loaded into a [`MemoryStore`] at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub finn_ads: Vec<FinnAd>,
}

#[derive(Debug, Default)]
struct Collections {
    products: BTreeMap<i32, Product>,
    finn_ads: Vec<FinnAd>,
    urls: BTreeMap<UrlKey, UrlKeyRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let products = seed
            .products
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        Self {
            inner: RwLock::new(Collections {
                products,
                finn_ads: seed.finn_ads,
                urls: BTreeMap::new(),
            }),
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::ConfigError(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;

        let seed: SeedData = serde_json::from_str(&raw).map_err(|e| {
            AppError::ConfigError(format!("Invalid seed file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            "Loaded {} products and {} finn ads from {}",
            seed.products.len(),
            seed.finn_ads.len(),
            path.display()
        );

        Ok(Self::from_seed(seed))
    }

    /// Snapshot of every url key record, ordered by key.
    pub async fn url_keys(&self) -> Vec<UrlKeyRecord> {
        self.inner.read().await.urls.values().cloned().collect()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn sample_products(&self, size: i64) -> Result<Vec<ProductSummary>> {
        let size = usize::try_from(size).unwrap_or(0);
        let inner = self.inner.read().await;

        Ok(inner
            .products
            .values()
            .take(size)
            .map(ProductSummary::from)
            .collect())
    }

    async fn find_product(&self, id: i32) -> Result<Option<Product>> {
        Ok(self.inner.read().await.products.get(&id).cloned())
    }

    async fn find_ads_for_product(&self, product_id: i32) -> Result<Vec<FinnAd>> {
        let inner = self.inner.read().await;

        let mut ads: Vec<FinnAd> = inner
            .finn_ads
            .iter()
            .filter(|ad| ad.product_id == product_id)
            .cloned()
            .collect();
        ads.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(ads)
    }

    async fn update_finn_query(
        &self,
        product_id: i32,
        finn_query: &str,
        record: &UrlKeyRecord,
    ) -> Result<QueryUpdate> {
        let mut inner = self.inner.write().await;

        let Some(product) = inner.products.get_mut(&product_id) else {
            return Ok(QueryUpdate::ProductMissing);
        };
        product.finn_query = Some(finn_query.to_string());

        inner.urls.insert(record.id.clone(), record.clone());

        Ok(QueryUpdate::Applied)
    }

    async fn find_url_key(&self, key: &UrlKey) -> Result<Option<UrlKeyRecord>> {
        Ok(self.inner.read().await.urls.get(key).cloned())
    }

    async fn check_health(&self) -> Result<()> {
        Ok(())
    }
}
