use chrono::{DateTime, Utc};

use super::layout::html_escape;
use crate::models::FinnAd;

pub fn render_finn_ads(ads: &[FinnAd], ad_url: &str) -> String {
    let items: String = ads.iter().map(|ad| render_finn_ad(ad, ad_url)).collect();

    let list = if ads.is_empty() {
        r#"<p class="empty-state">No ads found for this product.</p>"#.to_string()
    } else {
        items
    };

    format!(
        r#"<section class="finn-ad-list">
    <h2>Finn Ads</h2>
    {}
</section>"#,
        list
    )
}

fn render_finn_ad(ad: &FinnAd, ad_url: &str) -> String {
    let image = match &ad.image {
        Some(image) => format!(
            r#"<img src="{}" alt="Ad Image" class="finn-ad-image">"#,
            html_escape(&image.url)
        ),
        None => r#"<div class="finn-ad-image placeholder"></div>"#.to_string(),
    };

    let posted = DateTime::<Utc>::from_timestamp_millis(ad.timestamp)
        .map(|ts| format!(r#"<time datetime="{}">{}</time>"#, ts.to_rfc3339(), ts.format("%d.%m.%Y")))
        .unwrap_or_default();

    format!(
        r#"
<a href="{}{}" target="_blank" rel="noopener" class="finn-ad-item">
    {}
    <div class="finn-ad-content">
        <h3 class="finn-ad-heading">{}</h3>
        <p class="finn-ad-price">{} {}</p>
        <p class="finn-ad-location">{} {}</p>
    </div>
</a>"#,
        html_escape(ad_url),
        ad.ad_id,
        image,
        html_escape(&ad.heading),
        ad.price.amount,
        html_escape(&ad.price.currency_code),
        html_escape(ad.location.as_deref().unwrap_or("")),
        posted
    )
}
