//! Auth service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenVersion, AuthServiceError, IssuedApiToken, NewApiToken,
        TokenHasher, build_verifier_input, format_api_token, generate_api_token_secret,
        parse_api_token, repository::PgAuthRepository,
    },
    domain::admins::records::AdminUuid,
};

#[derive(Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
    hasher: Arc<dyn TokenHasher>,
}

impl fmt::Debug for PgAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgAuthService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, hasher: Arc<dyn TokenHasher>) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
            hasher,
        }
    }

    /// Issue a new API token for the given admin.
    ///
    /// The raw token is only ever returned here; storage keeps the HMAC.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidExpiry`] when `expires_at` is not in
    /// the future, [`AuthServiceError::UnknownAdmin`] when the admin does not
    /// exist, or an error if HMAC computation or insertion fails.
    #[tracing::instrument(name = "auth.issue_api_token", skip(self), err)]
    pub async fn issue_api_token(
        &self,
        admin: AdminUuid,
        expires_at: Timestamp,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        if expires_at <= Timestamp::now() {
            return Err(AuthServiceError::InvalidExpiry);
        }

        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let verifier_input = build_verifier_input(&token_uuid, version, &admin, &secret);

        let token_hash = self.hasher.hmac(&verifier_input).await?;

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                admin_uuid: admin,
                version,
                token_hash,
                expires_at,
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        admin: AdminUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens_by_admin(admin).await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self
            .repository
            .revoke_api_token(token_uuid)
            .await?
            .is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<AdminUuid, AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|error| {
            debug!("rejecting malformed bearer token: {error}");

            AuthServiceError::NotFound
        })?;

        let token = self
            .repository
            .find_active_api_token(parsed.token_uuid, parsed.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let verifier_input = build_verifier_input(
            &parsed.token_uuid,
            token.version,
            &token.admin_uuid,
            &parsed.secret,
        );

        if !self
            .hasher
            .verify(&verifier_input, &token.token_hash)
            .await?
        {
            return Err(AuthServiceError::NotFound);
        }

        // Authentication succeeds even when this write fails.
        if let Err(error) = self
            .repository
            .touch_api_token_last_used(parsed.token_uuid)
            .await
        {
            warn!(token_uuid = %parsed.token_uuid, "failed to record token use: {error}");
        }

        Ok(token.admin_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the admin that owns it.
    ///
    /// Every rejection (malformed, unknown, revoked, expired, bad secret)
    /// surfaces as [`AuthServiceError::NotFound`].
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<AdminUuid, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use crate::{auth::MockTokenHasher, test::TestContext};

    use super::*;

    /// Reversible stand-in for the transit HMAC.
    fn fake_hmac(input: &[u8]) -> String {
        format!("hmac:{}", String::from_utf8_lossy(input))
    }

    fn fake_hasher() -> MockTokenHasher {
        let mut hasher = MockTokenHasher::new();

        hasher
            .expect_hmac()
            .returning(|input| Ok(fake_hmac(input)));

        hasher
            .expect_verify()
            .returning(|input, hmac| Ok(fake_hmac(input) == hmac));

        hasher
    }

    fn service(ctx: &TestContext, hasher: MockTokenHasher) -> PgAuthService {
        PgAuthService::new(ctx.db.pool().clone(), Arc::new(hasher))
    }

    fn next_week() -> Timestamp {
        Timestamp::now()
            .checked_add(SignedDuration::from_hours(24 * 7))
            .expect("timestamp in range")
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_its_admin() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let issued = auth.issue_api_token(ctx.admin_uuid, next_week()).await?;

        assert!(issued.token.starts_with("sf_v1_"));
        assert_eq!(issued.metadata.admin_uuid, ctx.admin_uuid);
        assert!(issued.metadata.last_used_at.is_none());

        let admin = auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(admin, ctx.admin_uuid);

        let tokens = auth.list_api_tokens(ctx.admin_uuid).await?;

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].last_used_at.is_some(), "use should be recorded");

        Ok(())
    }

    #[tokio::test]
    async fn stored_hash_never_contains_the_raw_token() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let issued = auth.issue_api_token(ctx.admin_uuid, next_week()).await?;

        let stored: String =
            sqlx::query_scalar("SELECT token_hash FROM admin_api_tokens WHERE uuid = $1")
                .bind(issued.metadata.uuid)
                .fetch_one(ctx.db.pool())
                .await?;

        assert!(!stored.contains(&issued.token));

        Ok(())
    }

    #[tokio::test]
    async fn past_expiry_is_rejected_before_hashing() {
        let ctx = TestContext::new().await;
        let mut hasher = MockTokenHasher::new();

        hasher.expect_hmac().never();

        let auth = service(&ctx, hasher);
        let yesterday = Timestamp::now()
            .checked_sub(SignedDuration::from_hours(24))
            .expect("timestamp in range");

        let result = auth.issue_api_token(ctx.admin_uuid, yesterday).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidExpiry)),
            "expected InvalidExpiry, got {result:?}"
        );
    }

    #[tokio::test]
    async fn issuing_for_unknown_admin_fails() {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let result = auth.issue_api_token(AdminUuid::new(), next_week()).await;

        assert!(
            matches!(result, Err(AuthServiceError::UnknownAdmin)),
            "expected UnknownAdmin, got {result:?}"
        );
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let issued = auth.issue_api_token(ctx.admin_uuid, next_week()).await?;

        assert!(auth.revoke_api_token(issued.metadata.uuid).await?);
        assert!(
            !auth.revoke_api_token(issued.metadata.uuid).await?,
            "second revoke should report nothing to revoke"
        );

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn expired_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let issued = auth.issue_api_token(ctx.admin_uuid, next_week()).await?;

        sqlx::query(
            "UPDATE admin_api_tokens SET expires_at = now() - interval '1 minute' WHERE uuid = $1",
        )
        .bind(issued.metadata.uuid)
        .execute(ctx.db.pool())
        .await?;

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_rejected_without_lookup() {
        let ctx = TestContext::new().await;
        let mut hasher = MockTokenHasher::new();

        hasher.expect_verify().never();

        let auth = service(&ctx, hasher);

        for token in ["", "Bearer", "sf_v1_nope.abcd", "lt_v1_x.y"] {
            let result = auth.authenticate_bearer(token).await;

            assert!(
                matches!(result, Err(AuthServiceError::NotFound)),
                "{token:?} should be rejected, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn failed_verification_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let issuer = service(&ctx, fake_hasher());
        let issued = issuer.issue_api_token(ctx.admin_uuid, next_week()).await?;

        let mut hasher = MockTokenHasher::new();

        hasher.expect_verify().once().returning(|_, _| Ok(false));

        let result = service(&ctx, hasher)
            .authenticate_bearer(&issued.token)
            .await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn token_of_deleted_admin_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = service(&ctx, fake_hasher());

        let issued = auth.issue_api_token(ctx.admin_uuid, next_week()).await?;

        sqlx::query("UPDATE admins SET deleted_at = now() WHERE uuid = $1")
            .bind(ctx.admin_uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }
}
