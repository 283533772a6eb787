//! URL record entity.

use crate::utils::token;

/// A stored URL with its store-assigned identifier.
///
/// Records are write-once: `id` is assigned on insertion and never changes,
/// and there is exactly one record per distinct `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, url: String) -> Self {
        Self { id, url }
    }

    /// Returns the radix-36 token derived from the record id.
    ///
    /// Store ids are strictly positive, so the conversion to `u64` is lossless.
    pub fn token(&self) -> String {
        token::encode(self.id.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = UrlRecord::new(1, "https://example.com/a".to_string());

        assert_eq!(record.id, 1);
        assert_eq!(record.url, "https://example.com/a");
    }

    #[test]
    fn test_record_token() {
        assert_eq!(UrlRecord::new(1, String::new()).token(), "1");
        assert_eq!(UrlRecord::new(36, String::new()).token(), "10");
        assert_eq!(UrlRecord::new(i64::MAX, String::new()).token(), "1y2p0ij32e8e7");
    }
}
