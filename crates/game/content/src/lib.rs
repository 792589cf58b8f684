//! Data-driven content for Orlog matches.
//!
//! This crate houses the standard favor catalog and loaders for RON/TOML data:
//! - Favor catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is read by the runtime when a match is set up and never changes
//! while a match is running.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, FavorCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, FavorCatalogFile, FavorLoader};
