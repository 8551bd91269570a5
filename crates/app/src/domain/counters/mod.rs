//! Per-admin daily counters.

pub mod day;
pub mod errors;
pub mod quota;
pub mod records;
mod repository;
pub mod service;

pub use day::{CounterDay, CounterDayError};
pub use errors::CountersServiceError;
pub use quota::{DailyQuota, QuotaDecision};
pub use service::*;
