use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    error::Result,
    models::{Product, ProductRow, ProductSummary, Retailer},
};

pub async fn sample_products(pool: &PgPool, size: i64) -> Result<Vec<ProductSummary>> {
    let products = sqlx::query_as::<_, ProductSummary>(
        "SELECT id, name, brand, description, image
         FROM products
         ORDER BY random()
         LIMIT $1",
    )
    .bind(size)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(
        "SELECT id, name, finn_query, brand, description, image, category
         FROM products
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mpns = sqlx::query_scalar::<_, String>(
        "SELECT mpn FROM product_mpns WHERE product_id = $1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let gtins = sqlx::query_scalar::<_, String>(
        "SELECT gtin FROM product_gtins WHERE product_id = $1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let retailers = sqlx::query_as::<_, Retailer>(
        "SELECT name, price, sku, url, category
         FROM product_retailers
         WHERE product_id = $1
         ORDER BY position, id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(row.into_product(mpns, gtins, retailers)))
}

/// Returns `false` when no product has the given id.
pub async fn set_finn_query(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
    finn_query: &str,
) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE products
         SET finn_query = $1, updated_at = NOW()
         WHERE id = $2",
    )
    .bind(finn_query)
    .bind(id)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected() == 1)
}
