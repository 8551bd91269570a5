//! Counters service.

use std::future::Future;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::error;

use crate::domain::{
    admins::records::AdminUuid,
    counters::{
        CounterDay, errors::CountersServiceError, records::DailyCounterRecord,
        repository::PgCountersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCountersService {
    repository: PgCountersRepository,
}

impl PgCountersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCountersRepository::new(pool),
        }
    }
}

#[async_trait]
impl CountersService for PgCountersService {
    async fn increment(
        &self,
        admin: AdminUuid,
        day: CounterDay,
    ) -> Result<DailyCounterRecord, CountersServiceError> {
        let repository = &self.repository;

        retry_once_on_conflict(admin, day, move || async move {
            repository
                .increment(admin, day)
                .await
                .map_err(CountersServiceError::from)
        })
        .await
    }

    async fn get_count(
        &self,
        admin: AdminUuid,
        day: CounterDay,
    ) -> Result<u64, CountersServiceError> {
        Ok(self
            .repository
            .get_counter(admin, day)
            .await?
            .map_or(0, |counter| counter.count))
    }

    async fn list_counters(
        &self,
        admin: AdminUuid,
    ) -> Result<Vec<DailyCounterRecord>, CountersServiceError> {
        Ok(self.repository.list_counters(admin).await?)
    }
}

/// Run `attempt`, and run it one more time if it reports a duplicate
/// `(admin, day)` row. The upsert resolves that conflict itself, so reaching
/// the second attempt means something bypassed it.
async fn retry_once_on_conflict<F, Fut>(
    admin: AdminUuid,
    day: CounterDay,
    mut attempt: F,
) -> Result<DailyCounterRecord, CountersServiceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<DailyCounterRecord, CountersServiceError>>,
{
    match attempt().await {
        Err(CountersServiceError::AlreadyExists) => {
            error!(%admin, %day, "duplicate counter row outside the upsert, retrying increment");

            attempt().await
        }
        result => result,
    }
}

#[automock]
#[async_trait]
pub trait CountersService: Send + Sync {
    /// Atomically count one event for `admin` on `day` and return the
    /// post-increment row. The row is created at 1 when absent.
    async fn increment(
        &self,
        admin: AdminUuid,
        day: CounterDay,
    ) -> Result<DailyCounterRecord, CountersServiceError>;

    /// Current count for `admin` on `day`; zero when nothing was counted.
    async fn get_count(&self, admin: AdminUuid, day: CounterDay)
    -> Result<u64, CountersServiceError>;

    /// Every counter row of `admin`, most recent day first.
    async fn list_counters(
        &self,
        admin: AdminUuid,
    ) -> Result<Vec<DailyCounterRecord>, CountersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{domain::counters::records::CounterUuid, test::TestContext};

    use super::*;

    fn day(raw: &str) -> CounterDay {
        raw.parse().expect("test day should parse")
    }

    fn counter(admin: AdminUuid, today: CounterDay, count: u64) -> DailyCounterRecord {
        DailyCounterRecord {
            uuid: CounterUuid::new(),
            admin_uuid: admin,
            day: today,
            count,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn duplicate_row_conflict_is_retried_once() -> TestResult {
        let admin = AdminUuid::new();
        let today = day("2026-05-01");
        let calls = AtomicUsize::new(0);
        let attempts = &calls;

        let record = retry_once_on_conflict(admin, today, move || async move {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CountersServiceError::AlreadyExists)
            } else {
                Ok(counter(admin, today, 2))
            }
        })
        .await?;

        assert_eq!(record.count, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2, "expected exactly one retry");

        Ok(())
    }

    #[tokio::test]
    async fn second_conflict_is_returned_to_the_caller() {
        let today = day("2026-05-01");
        let calls = AtomicUsize::new(0);
        let attempts = &calls;

        let result = retry_once_on_conflict(AdminUuid::new(), today, move || async move {
            attempts.fetch_add(1, Ordering::SeqCst);

            Err(CountersServiceError::AlreadyExists)
        })
        .await;

        assert!(
            matches!(result, Err(CountersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2, "retry must stop after one attempt");
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let today = day("2026-05-01");
        let calls = AtomicUsize::new(0);
        let attempts = &calls;

        let result = retry_once_on_conflict(AdminUuid::new(), today, move || async move {
            attempts.fetch_add(1, Ordering::SeqCst);

            Err(CountersServiceError::InvalidReference)
        })
        .await;

        assert!(
            matches!(result, Err(CountersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1, "only conflicts are retried");
    }

    #[tokio::test]
    async fn first_increment_creates_row_with_count_one() -> TestResult {
        let ctx = TestContext::new().await;

        let counter = ctx
            .counters
            .increment(ctx.admin_uuid, day("2026-05-01"))
            .await?;

        assert_eq!(counter.count, 1);
        assert_eq!(counter.admin_uuid, ctx.admin_uuid);
        assert_eq!(counter.day, day("2026-05-01"));

        Ok(())
    }

    #[tokio::test]
    async fn sequential_increments_return_post_increment_counts() -> TestResult {
        let ctx = TestContext::new().await;
        let today = day("2026-05-01");

        let mut counts = Vec::new();

        for _ in 0..3 {
            counts.push(ctx.counters.increment(ctx.admin_uuid, today).await?.count);
        }

        assert_eq!(counts, [1, 2, 3]);
        assert_eq!(ctx.counters.get_count(ctx.admin_uuid, today).await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn increments_reuse_the_same_row() -> TestResult {
        let ctx = TestContext::new().await;
        let today = day("2026-05-01");

        let first = ctx.counters.increment(ctx.admin_uuid, today).await?;
        let second = ctx.counters.increment(ctx.admin_uuid, today).await?;

        assert_eq!(first.uuid, second.uuid);
        assert_eq!(first.created_at, second.created_at);
        assert!(second.updated_at >= first.updated_at);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_lose_no_updates() -> TestResult {
        const CALLERS: u64 = 25;

        let ctx = TestContext::new().await;
        let today = day("2026-05-02");

        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let counters = ctx.counters.clone();
                let admin = ctx.admin_uuid;

                tokio::spawn(async move { counters.increment(admin, today).await })
            })
            .collect();

        let mut seen = Vec::new();

        for handle in handles {
            seen.push(handle.await??.count);
        }

        seen.sort_unstable();

        assert_eq!(seen, (1..=CALLERS).collect::<Vec<_>>());
        assert_eq!(ctx.counters.get_count(ctx.admin_uuid, today).await?, CALLERS);
        assert_eq!(ctx.counters.list_counters(ctx.admin_uuid).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn different_days_count_independently() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.counters.increment(ctx.admin_uuid, day("2026-05-01")).await?;
        ctx.counters.increment(ctx.admin_uuid, day("2026-05-02")).await?;
        ctx.counters.increment(ctx.admin_uuid, day("2026-05-02")).await?;

        let counters = ctx.counters.list_counters(ctx.admin_uuid).await?;
        let summary: Vec<(String, u64)> = counters
            .iter()
            .map(|counter| (counter.day.to_string(), counter.count))
            .collect();

        assert_eq!(
            summary,
            [("2026-05-02".to_string(), 2), ("2026-05-01".to_string(), 1)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn different_admins_count_independently() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_admin("Second Admin").await;
        let today = day("2026-05-01");

        ctx.counters.increment(ctx.admin_uuid, today).await?;
        ctx.counters.increment(ctx.admin_uuid, today).await?;
        let other_counter = ctx.counters.increment(other, today).await?;

        assert_eq!(other_counter.count, 1);
        assert_eq!(ctx.counters.get_count(ctx.admin_uuid, today).await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn get_count_without_row_is_zero() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(
            ctx.counters
                .get_count(ctx.admin_uuid, day("2026-01-01"))
                .await?,
            0
        );

        Ok(())
    }

    #[tokio::test]
    async fn increment_for_unknown_admin_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .counters
            .increment(AdminUuid::new(), day("2026-05-01"))
            .await;

        assert!(
            matches!(result, Err(CountersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn storage_rejects_a_second_row_for_the_same_admin_and_day() -> TestResult {
        let ctx = TestContext::new().await;
        let today = day("2026-05-03");

        ctx.counters.increment(ctx.admin_uuid, today).await?;

        let duplicate = sqlx::query(
            "INSERT INTO daily_counters (uuid, admin_uuid, day, count) VALUES ($1, $2, $3::date, 1)",
        )
        .bind(uuid::Uuid::now_v7())
        .bind(ctx.admin_uuid.into_uuid())
        .bind(today.to_string())
        .execute(ctx.db.pool())
        .await;

        let error = CountersServiceError::from(duplicate.expect_err("duplicate row must fail"));

        assert!(
            matches!(error, CountersServiceError::AlreadyExists),
            "expected AlreadyExists, got {error:?}"
        );

        Ok(())
    }
}
