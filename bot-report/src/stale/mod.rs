//! Stale issue classification.
//!
//! An issue is stale when it has been open too long, or when nobody has
//! commented on it for too long.

use crate::elapsed::elapsed_since;
use crate::issues::Issue;
use chrono::{DateTime, TimeDelta, Utc};

/// Collector tag for issues reported without being stale.
pub const ACTIVE_TAG: &str = "active";

/// Why an issue was classified as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// Open longer than the maximum age.
    Aged,
    /// No comment within the silence window.
    Unanswered,
}

impl StaleReason {
    /// Returns the collector tag for this reason.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aged => "stale",
            Self::Unanswered => "no-recent-comment",
        }
    }
}

/// Thresholds beyond which an issue is reported as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleCriteria {
    /// Maximum time since the issue was opened.
    pub max_age: TimeDelta,
    /// Maximum time since the last comment.
    pub max_silence: TimeDelta,
}

impl StaleCriteria {
    /// Builds criteria from whole day counts.
    #[must_use]
    pub fn from_days(max_age_days: u32, max_silence_days: u32) -> Self {
        Self {
            max_age: TimeDelta::days(i64::from(max_age_days)),
            max_silence: TimeDelta::days(i64::from(max_silence_days)),
        }
    }

    /// Classifies an issue at `now`. Age takes precedence over silence.
    #[must_use]
    pub fn classify(&self, issue: &Issue, now: DateTime<Utc>) -> Option<StaleReason> {
        if elapsed_since(issue.created_at, now) > self.max_age {
            Some(StaleReason::Aged)
        } else if elapsed_since(issue.last_comment, now) > self.max_silence {
            Some(StaleReason::Unanswered)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn issue(age_days: i64, silence_days: i64) -> Issue {
        Issue {
            number: 1,
            title: "Sample".to_string(),
            html_url: "https://github.com/acme/repo/issues/1".to_string(),
            created_at: now() - TimeDelta::days(age_days),
            last_comment: now() - TimeDelta::days(silence_days),
        }
    }

    #[test]
    fn classifies_aged_issue() {
        let criteria = StaleCriteria::from_days(30, 7);
        assert_eq!(
            criteria.classify(&issue(31, 1), now()),
            Some(StaleReason::Aged)
        );
    }

    #[test]
    fn classifies_unanswered_issue() {
        let criteria = StaleCriteria::from_days(30, 7);
        assert_eq!(
            criteria.classify(&issue(10, 8), now()),
            Some(StaleReason::Unanswered)
        );
    }

    #[test]
    fn age_takes_precedence() {
        let criteria = StaleCriteria::from_days(30, 7);
        assert_eq!(
            criteria.classify(&issue(40, 20), now()),
            Some(StaleReason::Aged)
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        let criteria = StaleCriteria::from_days(30, 7);
        assert_eq!(criteria.classify(&issue(30, 7), now()), None);
    }

    #[test]
    fn future_timestamps_are_fresh() {
        let criteria = StaleCriteria::from_days(1, 1);
        assert_eq!(criteria.classify(&issue(-5, -5), now()), None);
    }

    #[test]
    fn tags() {
        assert_eq!(StaleReason::Aged.as_str(), "stale");
        assert_eq!(StaleReason::Unanswered.as_str(), "no-recent-comment");
    }
}
