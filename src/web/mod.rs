//! Web layer for the browser-facing front end.
//!
//! The front end itself is a set of static files; this layer only serves
//! them and provides the default page for unmatched requests.
//!
//! # Modules
//!
//! - [`fallback`] - Static directory service with `index.html` fallback

pub mod fallback;

pub use fallback::{FallbackService, fall_through, serve_static, static_fallback};
