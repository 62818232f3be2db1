//! Domain crate for the sonic-notes site: the episode data model, the
//! read-only catalog with its derived views, the filter/ranking operations
//! behind the episodes and popular pages, and the config surface.

pub mod catalog;
pub mod config;
pub mod episode;
pub mod platform;
pub mod query;

pub use catalog::Catalog;
pub use episode::Episode;
