//! Counters Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    admins::records::AdminUuid,
    counters::{
        CounterDay,
        records::{CounterUuid, DailyCounterRecord},
    },
};

const INCREMENT_COUNTER_SQL: &str = include_str!("sql/increment_counter.sql");
const GET_COUNTER_SQL: &str = include_str!("sql/get_counter.sql");
const LIST_COUNTERS_SQL: &str = include_str!("sql/list_counters.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCountersRepository {
    pool: PgPool,
}

impl PgCountersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the row at 1 or bump the existing one, in a single statement.
    #[tracing::instrument(
        name = "counters.repository.increment",
        skip(self),
        fields(admin_uuid = %admin, day = %day),
        err
    )]
    pub(crate) async fn increment(
        &self,
        admin: AdminUuid,
        day: CounterDay,
    ) -> Result<DailyCounterRecord, sqlx::Error> {
        query_as::<Postgres, DailyCounterRecord>(INCREMENT_COUNTER_SQL)
            .bind(CounterUuid::new().into_uuid())
            .bind(admin.into_uuid())
            .bind(SqlxDate::from(day.into_date()))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_counter(
        &self,
        admin: AdminUuid,
        day: CounterDay,
    ) -> Result<Option<DailyCounterRecord>, sqlx::Error> {
        query_as::<Postgres, DailyCounterRecord>(GET_COUNTER_SQL)
            .bind(admin.into_uuid())
            .bind(SqlxDate::from(day.into_date()))
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_counters(
        &self,
        admin: AdminUuid,
    ) -> Result<Vec<DailyCounterRecord>, sqlx::Error> {
        query_as::<Postgres, DailyCounterRecord>(LIST_COUNTERS_SQL)
            .bind(admin.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DailyCounterRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let count_i64: i64 = row.try_get("count")?;

        let count = u64::try_from(count_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: CounterUuid::from_uuid(row.try_get("uuid")?),
            admin_uuid: AdminUuid::from_uuid(row.try_get("admin_uuid")?),
            day: CounterDay::from_date(row.try_get::<SqlxDate, _>("day")?.to_jiff()),
            count,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
