//! Daily Counter Records

use jiff::Timestamp;

use crate::{
    domain::{admins::records::AdminUuid, counters::CounterDay},
    uuids::TypedUuid,
};

/// Daily Counter UUID
pub type CounterUuid = TypedUuid<DailyCounterRecord>;

/// One row per admin per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCounterRecord {
    pub uuid: CounterUuid,
    pub admin_uuid: AdminUuid,
    pub day: CounterDay,
    pub count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
