//! Keyed hashing of token verifier input.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenHasherError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The key service returned a non-2xx response or an unexpected body.
    #[error("unexpected response from key service: {0}")]
    UnexpectedResponse(String),
}

/// Computes and checks keyed HMACs without exposing the key to this process.
#[automock]
#[async_trait]
pub trait TokenHasher: Send + Sync {
    /// Opaque verifier to persist for `input`.
    async fn hmac(&self, input: &[u8]) -> Result<String, TokenHasherError>;

    /// Whether `hmac` was produced for `input` by the same key.
    async fn verify(&self, input: &[u8], hmac: &str) -> Result<bool, TokenHasherError>;
}
