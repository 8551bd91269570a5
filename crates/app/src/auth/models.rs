//! Auth data models.

use std::fmt;

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::ApiTokenVersion, domain::admins::records::AdminUuid};

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// Admin that owns this API token.
    pub admin_uuid: AdminUuid,

    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// Keyed HMAC verifier for the token secret material.
    pub token_hash: String,
}

/// API token metadata persisted in storage. Never carries the secret.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub admin_uuid: AdminUuid,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
}

/// Lifecycle state of a stored token at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenStatus {
    Active,
    Expired,
    Revoked,
}

impl fmt::Display for ApiTokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        })
    }
}

impl ApiTokenMetadata {
    /// Revocation wins over expiry.
    #[must_use]
    pub fn status_at(&self, now: Timestamp) -> ApiTokenStatus {
        if self.revoked_at.is_some() {
            ApiTokenStatus::Revoked
        } else if self.expires_at <= now {
            ApiTokenStatus::Expired
        } else {
            ApiTokenStatus::Active
        }
    }
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: Uuid,
    pub admin_uuid: AdminUuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
