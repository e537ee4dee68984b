use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};

pub const URL_KEY_LEN: usize = 24;

/// 96-bit identifier derived from an arbitrary string, in the 24 hex
/// character form of a 12-byte object id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlKey(String);

impl UrlKey {
    /// Accepts a key read back from storage. Anything but 24 lowercase hex
    /// characters is rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let valid = value.len() == URL_KEY_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if !valid {
            return Err(AppError::InternalError(format!(
                "Malformed url key: {:?}",
                value
            )));
        }

        Ok(UrlKey(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of the UTF-8 bytes, truncated to the first 24 hex characters.
pub fn derive_url_key(value: &str) -> UrlKey {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(URL_KEY_LEN);
    UrlKey(digest)
}
