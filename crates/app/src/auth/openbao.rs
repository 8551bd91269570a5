//! OpenBao Transit backed token hasher.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::auth::{TokenHasher, TokenHasherError};

/// Configuration for connecting to an OpenBao instance.
#[derive(Debug, Clone)]
pub struct OpenBaoConfig {
    /// OpenBao server address, e.g. `"http://localhost:8200"`.
    pub addr: String,

    /// OpenBao authentication token.
    pub token: String,

    /// Transit key name used for token HMACs.
    pub transit_key: String,
}

/// Transit HMAC client. The HMAC key never leaves OpenBao.
#[derive(Debug, Clone)]
pub struct OpenBaoTransit {
    config: OpenBaoConfig,
    http: Client,
}

impl OpenBaoTransit {
    #[must_use]
    pub fn new(config: OpenBaoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/v1/transit/{operation}/{}",
            self.config.addr.trim_end_matches('/'),
            self.config.transit_key
        )
    }

    async fn post<T: DeserializeOwned>(
        &self,
        operation: &str,
        body: Value,
    ) -> Result<T, TokenHasherError> {
        let response = self
            .http
            .post(self.endpoint(operation))
            .header("X-Vault-Token", &self.config.token)
            .json(&body)
            .send()
            .await?;

        debug!(operation, status = %response.status(), "transit response");

        parse_response(operation, response).await
    }
}

#[async_trait]
impl TokenHasher for OpenBaoTransit {
    async fn hmac(&self, input: &[u8]) -> Result<String, TokenHasherError> {
        let envelope: Envelope<HmacData> = self
            .post("hmac", json!({ "input": BASE64.encode(input) }))
            .await?;

        Ok(envelope.data.hmac)
    }

    async fn verify(&self, input: &[u8], hmac: &str) -> Result<bool, TokenHasherError> {
        let envelope: Envelope<VerifyData> = self
            .post(
                "verify",
                json!({ "input": BASE64.encode(input), "hmac": hmac }),
            )
            .await?;

        Ok(envelope.data.valid)
    }
}

async fn parse_response<T: DeserializeOwned>(
    operation: &str,
    response: Response,
) -> Result<T, TokenHasherError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(TokenHasherError::UnexpectedResponse(format!(
            "{operation} request failed with status {status}: {text}"
        )));
    }

    Ok(response.json().await?)
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct HmacData {
    hmac: String,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    valid: bool,
}
