use super::{
    finn_ads::render_finn_ads,
    layout::{html_escape, page},
};
use crate::models::{Category, FinnAd, Product, Retailer};

/// Read-only product page served at `/product/{id}`.
pub fn render_product(product: &Product) -> String {
    page(&product.name, &render_details(product, ""))
}

/// Operator page served at `/products/{id}`: the product, the finn query
/// editor and the ads found for it.
pub fn render_product_with_ads(product: &Product, ads: &[FinnAd], ad_url: &str) -> String {
    let extra = format!(
        "{}\n{}",
        render_query_form(product),
        render_finn_ads(ads, ad_url)
    );

    page(&product.name, &render_details(product, &extra))
}

fn render_details(product: &Product, extra: &str) -> String {
    format!(
        r#"<article class="product-details" data-product-id="{id}">
    <h1>{name}</h1>
    <div class="product-image">
        <img src="{image}" alt="{name}">
    </div>
    <div class="product-info">
        <h2>Description:</h2>
        <p>{description}</p>
        <h2>Brand:</h2>
        <p>{brand}</p>
        <h2>MPNs:</h2>
        {mpns}
        <h2>GTINs:</h2>
        {gtins}
        <h2>Retailers:</h2>
        {retailers}
        <h2>Category:</h2>
        {category}
    </div>
    {extra}
</article>"#,
        id = product.id,
        name = html_escape(&product.name),
        image = html_escape(&product.image),
        description = html_escape(&product.description),
        brand = html_escape(product.brand.as_deref().unwrap_or("")),
        mpns = render_codes(&product.mpns),
        gtins = render_codes(&product.gtins),
        retailers = render_retailers(&product.retailers),
        category = render_category(product.category.as_ref()),
        extra = extra,
    )
}

fn render_codes(codes: &[String]) -> String {
    let items: String = codes
        .iter()
        .map(|code| format!("<li>{}</li>", html_escape(code)))
        .collect();

    format!("<ul>{}</ul>", items)
}

fn render_retailers(retailers: &[Retailer]) -> String {
    let items: String = retailers
        .iter()
        .map(|retailer| {
            format!(
                r#"
<li>
    <h3>{}</h3>
    <p>Price: {}</p>
    <p>SKU: {}</p>
    <p>URL: <a href="{}">{}</a></p>
    <p>Category: {}</p>
</li>"#,
                html_escape(&retailer.name),
                retailer.price,
                html_escape(&retailer.sku),
                html_escape(&retailer.url),
                html_escape(&retailer.url),
                html_escape(&retailer.category)
            )
        })
        .collect();

    format!("<ul>{}</ul>", items)
}

fn render_category(category: Option<&Category>) -> String {
    match category {
        Some(c) => format!(
            "<p>Main: {}, Sub: {}, Product: {}</p>",
            c.main, c.sub, c.product
        ),
        None => "<p>Category undefined</p>".to_string(),
    }
}

fn render_query_form(product: &Product) -> String {
    format!(
        r#"<form id="finn-query-form" data-product-id="{id}">
    <label for="finnQuery">Finn Query: </label>
    <input type="text" id="finnQuery" name="finn_query" value="{query}">
    <button type="submit">Set</button>
</form>
<script>
document.getElementById("finn-query-form").addEventListener("submit", async (event) => {{
    event.preventDefault();
    const query = document.getElementById("finnQuery").value;
    try {{
        const response = await fetch("/api/products/{id}", {{
            method: "PATCH",
            headers: {{ "Content-Type": "application/json" }},
            body: JSON.stringify({{ finn_query: query }}),
        }});
        if (response.ok) {{
            alert("Successfully set query");
        }} else {{
            const body = await response.json();
            alert("Failed to update query " + body.message);
        }}
    }} catch (error) {{
        alert("Failed to update query " + error);
    }}
}});
</script>"#,
        id = product.id,
        query = html_escape(product.finn_query.as_deref().unwrap_or("")),
    )
}
