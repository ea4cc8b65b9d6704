use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::error::{PortalError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub fn parse_target(starts_at: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(starts_at)
        .map_err(|e| PortalError::Config(format!("invalid exam start '{starts_at}': {e}")))
}

/// Time remaining until `target`, or `None` once it has passed
pub fn time_left(now: DateTime<Utc>, target: DateTime<FixedOffset>) -> Option<TimeLeft> {
    let remaining = target.with_timezone(&Utc) - now;
    if remaining <= chrono::Duration::zero() {
        return None;
    }
    let total = remaining.num_seconds();
    Some(TimeLeft {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    })
}
