use super::layout::{html_escape, page};
use crate::models::ProductSummary;

pub fn render_index(products: &[ProductSummary]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    let body = if products.is_empty() {
        r#"<p class="empty-state">No products yet.</p>"#.to_string()
    } else {
        format!(r#"<section class="product-list">{}</section>"#, cards)
    };

    page("Products", &body)
}

fn render_product_card(product: &ProductSummary) -> String {
    format!(
        r#"
<a href="/products/{}" class="product-card">
    <div class="product-image">
        <img src="{}" alt="{}" loading="lazy">
    </div>
    <div class="product-info">
        <h2>{}</h2>
        <p>Brand: {}</p>
        <p>Description: {}</p>
    </div>
</a>"#,
        product.id,
        html_escape(&product.image),
        html_escape(&product.name),
        html_escape(&product.name),
        html_escape(product.brand.as_deref().unwrap_or("")),
        html_escape(&product.description)
    )
}
