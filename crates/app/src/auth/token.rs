//! API token formatting, parsing, and HMAC input construction.
//!
//! Tokens look like `sf_v1_{token uuid, simple}.{64 hex chars of secret}`.

use std::{fmt, fmt::Write as _, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::admins::records::AdminUuid;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "sf";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Secret half of a token; zeroed on drop and redacted in debug output.
#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }

    fn to_hex(&self) -> String {
        self.bytes
            .iter()
            .fold(String::with_capacity(API_TOKEN_SECRET_BYTES * 2), |mut hex, byte| {
                let _infallible = write!(hex, "{byte:02x}");
                hex
            })
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != API_TOKEN_SECRET_BYTES * 2 || !hex.is_ascii() {
            return None;
        }

        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).ok()?;
            *byte = u8::from_str_radix(pair, 16).ok()?;
        }

        Some(Self { bytes })
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
    pub secret: ApiTokenSecret,
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_api_token(
    token_uuid: Uuid,
    version: ApiTokenVersion,
    secret: &ApiTokenSecret,
) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        secret.to_hex()
    )
}

/// Split a raw bearer token into its identifier, version, and secret.
///
/// # Errors
///
/// Returns an error when any segment is missing or malformed.
pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (identifier, secret_hex) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let mut segments = identifier.splitn(3, '_');

    let (Some(API_TOKEN_PREFIX), Some(version), Some(token_uuid)) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Err(ApiTokenError::InvalidFormat);
    };

    let version = version.parse::<ApiTokenVersion>()?;
    let token_uuid = Uuid::try_parse(token_uuid).map_err(|_| ApiTokenError::InvalidFormat)?;
    let secret =
        ApiTokenSecret::from_hex(secret_hex).ok_or(ApiTokenError::InvalidSecretEncoding)?;

    Ok(ParsedApiToken {
        token_uuid,
        version,
        secret,
    })
}

/// Build the canonical HMAC input bytes for a token.
///
/// Format: `{token_uuid_hex}:{version_i16_decimal}:{admin_uuid_hex}:{secret_hex}`
#[must_use]
pub fn build_verifier_input(
    token_uuid: &Uuid,
    version: ApiTokenVersion,
    admin_uuid: &AdminUuid,
    secret: &ApiTokenSecret,
) -> Vec<u8> {
    format!(
        "{}:{}:{}:{}",
        token_uuid.simple(),
        version.as_i16(),
        admin_uuid.into_uuid().simple(),
        secret.to_hex(),
    )
    .into_bytes()
}
