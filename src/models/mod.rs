mod finn_ad;
mod product;
mod url_key;

pub use finn_ad::*;
pub use product::*;
pub use url_key::*;
