//! Admin API token authentication

mod errors;
mod hasher;
mod models;
pub mod openbao;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use hasher::{MockTokenHasher, TokenHasher, TokenHasherError};
pub use models::*;
pub use openbao::{OpenBaoConfig, OpenBaoTransit};
pub use repository::PgAuthRepository;
pub use service::*;
pub use token::*;
