use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    error::Result,
    models::{UrlKeyRecord, UrlKeyRow},
    utils::url_key::UrlKey,
};

pub async fn upsert(tx: &mut Transaction<'_, Postgres>, record: &UrlKeyRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO urls (id, domain, url)
         VALUES ($1, $2, $3)
         ON CONFLICT (id) DO UPDATE
         SET domain = EXCLUDED.domain, url = EXCLUDED.url, updated_at = NOW()",
    )
    .bind(record.id.as_str())
    .bind(&record.domain)
    .bind(&record.url)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

pub async fn find_by_key(pool: &PgPool, key: &UrlKey) -> Result<Option<UrlKeyRecord>> {
    let row = sqlx::query_as::<_, UrlKeyRow>("SELECT id, domain, url FROM urls WHERE id = $1")
        .bind(key.as_str())
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(UrlKeyRecord {
            id: UrlKey::parse(&row.id)?,
            domain: row.domain,
            url: row.url,
        })
    })
    .transpose()
}
