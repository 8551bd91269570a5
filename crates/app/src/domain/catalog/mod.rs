//! Catalog of sellable product variants and its default seeding.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod seed;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::*;
