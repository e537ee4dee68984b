use crate::utils::url_key::UrlKey;

/// Entry in the `urls` table that tells the crawler which marketplace
/// search belongs to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlKeyRecord {
    pub id: UrlKey,
    pub domain: String,
    pub url: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlKeyRow {
    pub id: String,
    pub domain: String,
    pub url: String,
}
