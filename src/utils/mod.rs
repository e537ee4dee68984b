pub mod extractors;
pub mod url_key;
