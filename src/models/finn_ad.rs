use serde::{Deserialize, Serialize};

/// A marketplace listing scraped from finn.no and linked to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinnAd {
    pub id: String,
    pub ad_id: i64,
    pub product_id: i32,
    pub heading: String,
    pub location: Option<String>,
    pub coordinates: Coordinates,
    pub price: Price,
    pub image: Option<AdImage>,
    /// Milliseconds since the unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: i64,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdImage {
    pub url: String,
    pub path: String,
    pub height: i32,
    pub width: i32,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FinnAdRow {
    pub id: String,
    pub ad_id: i64,
    pub product_id: i32,
    pub heading: String,
    pub location: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub price_amount: i64,
    pub price_currency: String,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub image_height: Option<i32>,
    pub image_width: Option<i32>,
    pub image_aspect_ratio: Option<f64>,
    pub timestamp: i64,
}

impl From<FinnAdRow> for FinnAd {
    fn from(row: FinnAdRow) -> Self {
        let image = row.image_url.map(|url| AdImage {
            url,
            path: row.image_path.unwrap_or_default(),
            height: row.image_height.unwrap_or_default(),
            width: row.image_width.unwrap_or_default(),
            aspect_ratio: row.image_aspect_ratio.unwrap_or_default(),
        });

        FinnAd {
            id: row.id,
            ad_id: row.ad_id,
            product_id: row.product_id,
            heading: row.heading,
            location: row.location,
            coordinates: Coordinates {
                lat: row.lat,
                lon: row.lon,
            },
            price: Price {
                amount: row.price_amount,
                currency_code: row.price_currency,
            },
            image,
            timestamp: row.timestamp,
        }
    }
}
