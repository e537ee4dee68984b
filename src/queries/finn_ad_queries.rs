use sqlx::PgPool;

use crate::{
    error::Result,
    models::{FinnAd, FinnAdRow},
};

pub async fn find_by_product_id(pool: &PgPool, product_id: i32) -> Result<Vec<FinnAd>> {
    let rows = sqlx::query_as::<_, FinnAdRow>(
        "SELECT id, ad_id, product_id, heading, location, lat, lon, price_amount,
                price_currency, image_url, image_path, image_height, image_width,
                image_aspect_ratio, timestamp
         FROM finn_ads
         WHERE product_id = $1
         ORDER BY timestamp DESC",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(FinnAd::from).collect())
}
