//! Quota Config

use clap::Args;
use jiff::tz::TimeZone;

/// Daily test payment quota settings.
#[derive(Debug, Args)]
pub struct QuotaConfig {
    /// Test payments allowed per admin per day
    #[arg(long, env = "TEST_PAYMENT_DAILY_LIMIT", default_value_t = 20)]
    pub daily_limit: u64,

    /// IANA time zone that decides where a day starts
    #[arg(long, env = "COUNTER_TIME_ZONE", default_value = "Asia/Kolkata")]
    pub time_zone: String,
}

impl QuotaConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        TimeZone::get(&self.time_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_time_zone_is_rejected() {
        let config = QuotaConfig {
            daily_limit: 1,
            time_zone: "Mars/Olympus_Mons".to_string(),
        };

        assert!(config.time_zone().is_err(), "bogus zone should not resolve");
    }

    #[test]
    fn utc_resolves() {
        let config = QuotaConfig {
            daily_limit: 1,
            time_zone: "UTC".to_string(),
        };

        assert!(config.time_zone().is_ok(), "UTC should resolve");
    }
}
