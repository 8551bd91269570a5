//! Counter Handlers

pub(crate) mod get;
pub(crate) mod increment;
pub(crate) mod index;
