//! Shared fixtures for database-backed tests.

mod context;

pub(crate) use context::TestContext;
