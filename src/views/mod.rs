//! Server-rendered HTML for the catalog pages.

pub mod finn_ads;
pub mod index;
pub mod layout;
pub mod product;
