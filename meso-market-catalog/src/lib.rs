//! Storefront data model types, URL slugs, and platform token handling.
//!
//! This crate defines the domain model for the item storefront without any
//! database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `meso-market-db` for persistence.

pub mod platform;
pub mod slug;
pub mod types;

pub use platform::{
    display_platform, join_platforms, normalize_platform, primary_platform, split_platforms,
    KNOWN_PLATFORMS,
};
pub use slug::slugify;
pub use types::*;
