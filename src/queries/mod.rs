pub mod finn_ad_queries;
pub mod product_queries;
pub mod url_queries;
