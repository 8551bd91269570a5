//! Daily quota evaluation over post-increment counts.

/// Upper bound on counted events per admin per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuota {
    limit: u64,
}

/// Outcome of checking a post-increment count against a quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Allowed { remaining: u64 },
    Exceeded { limit: u64 },
}

impl DailyQuota {
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Evaluate `count`, the value returned by the increment that recorded
    /// the current event. Rejects when `count > limit`.
    #[must_use]
    pub const fn check(self, count: u64) -> QuotaDecision {
        if count > self.limit {
            QuotaDecision::Exceeded { limit: self.limit }
        } else {
            QuotaDecision::Allowed {
                remaining: self.limit - count,
            }
        }
    }
}

impl QuotaDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}
