//! Utility functions for token encoding, URL checks and error classification.
//!
//! - [`token`] - Radix-36 encoding and decoding of record identifiers
//! - [`url_check`] - Absolute URL checks and base URL normalization
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod token;
pub mod url_check;
