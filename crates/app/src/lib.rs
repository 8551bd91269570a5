//! Storefront administrative backend: catalog seeding, per-admin daily
//! counters, admin identities and API token authentication.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
