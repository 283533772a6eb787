//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored URL and its store-assigned identifier
//!
//! The short token is derived from the record id and never stored, see
//! [`UrlRecord::token`].

pub mod url_record;

pub use url_record::UrlRecord;
