use crate::{
    error::{AppError, Result},
    models::{FinnQueryUpdate, UrlKeyRecord},
    store::{CatalogStore, QueryUpdate},
    utils::url_key::derive_url_key,
};

/// Builds the `urls` entry that ties a product id to its marketplace search.
pub fn url_key_record(product_id: &str, domain: &str) -> UrlKeyRecord {
    UrlKeyRecord {
        id: derive_url_key(product_id),
        domain: domain.to_string(),
        url: product_id.to_string(),
    }
}

/// Stores the new finn query and refreshes the product's url key record.
pub async fn update_finn_query(
    store: &dyn CatalogStore,
    product_id: i32,
    update: &FinnQueryUpdate,
    domain: &str,
) -> Result<UrlKeyRecord> {
    let record = url_key_record(&product_id.to_string(), domain);

    match store
        .update_finn_query(product_id, &update.finn_query, &record)
        .await?
    {
        QueryUpdate::Applied => {
            tracing::info!(
                "Finn query for product {} set, url key {}",
                product_id,
                record.id
            );
            Ok(record)
        }
        QueryUpdate::ProductMissing => Err(AppError::NotFound("Product not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::Product,
        store::{MemoryStore, SeedData},
    };

    fn store_with_product(id: i32) -> MemoryStore {
        MemoryStore::from_seed(SeedData {
            products: vec![Product {
                id,
                name: "Sony WH-1000XM5".to_string(),
                finn_query: None,
                brand: Some("Sony".to_string()),
                description: String::new(),
                image: String::new(),
                mpns: vec![],
                gtins: vec![],
                retailers: vec![],
                category: None,
            }],
            finn_ads: vec![],
        })
    }

    fn update(query: &str) -> FinnQueryUpdate {
        FinnQueryUpdate {
            finn_query: query.to_string(),
        }
    }

    #[test]
    fn record_is_keyed_by_derived_id() {
        let record = url_key_record("42", "finn.no");

        assert_eq!(record.id, derive_url_key("42"));
        assert_eq!(record.domain, "finn.no");
        assert_eq!(record.url, "42");
    }

    #[tokio::test]
    async fn applies_update_and_tracks_url() {
        let store = store_with_product(42);
        let record = update_finn_query(&store, 42, &update("xm5"), "finn.no")
            .await
            .unwrap();

        assert_eq!(
            store.find_url_key(&record.id).await.unwrap(),
            Some(url_key_record("42", "finn.no"))
        );
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let store = store_with_product(42);
        let err = update_finn_query(&store, 7, &update("xm5"), "finn.no")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.url_keys().await.is_empty());
    }
}
