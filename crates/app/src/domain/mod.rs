//! Storefront Domain Concerns

pub mod admins;
pub mod catalog;
pub mod counters;
