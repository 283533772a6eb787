//! Domain layer containing business entities and storage contracts.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Shortening Flow
//!
//! 1. The store inserts the URL unless it is already present
//! 2. The record is read back by URL to obtain its id
//! 3. The id is encoded as a radix-36 token (see [`crate::utils::token`])

pub mod entities;
pub mod repositories;
