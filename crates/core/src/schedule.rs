//! Server-assigned timestamps and the end-date rules applied on create.
//!
//! Tasks get a completion date one calendar month after creation and
//! projects an end date one calendar year after start, unless the caller
//! supplies one. A supplied date must not precede its start.

use chrono::{Months, SubsecRound, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default task lifetime when `completedAt` is omitted.
pub const TASK_DEFAULT_SPAN: Months = Months::new(1);

/// Default project lifetime when `endDate` is omitted.
pub const PROJECT_DEFAULT_SPAN: Months = Months::new(12);

/// Current time truncated to microseconds, the precision of `TIMESTAMPTZ`.
///
/// Using this for every server-assigned timestamp keeps the value returned
/// by create identical to the one read back later.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Resolve the end of an interval that starts at `start`.
///
/// `supplied` wins when present, provided it is not earlier than `start`;
/// otherwise `start + span` is returned. Month arithmetic clamps to the
/// last valid day (Jan 31 + 1 month is the last day of February).
pub fn resolve_end(
    start: Timestamp,
    supplied: Option<Timestamp>,
    span: Months,
    field: &'static str,
    reference: &'static str,
) -> Result<Timestamp, CoreError> {
    match supplied {
        Some(end) if end < start => Err(CoreError::DateOrder { field, reference }),
        Some(end) => Ok(end),
        None => start.checked_add_months(span).ok_or_else(|| {
            CoreError::Internal(format!("{field} default overflows the calendar"))
        }),
    }
}

/// `completedAt` for a task created at `created_at`.
pub fn task_completion(
    created_at: Timestamp,
    supplied: Option<Timestamp>,
) -> Result<Timestamp, CoreError> {
    resolve_end(
        created_at,
        supplied,
        TASK_DEFAULT_SPAN,
        "completedAt",
        "createdAt",
    )
}

/// `endDate` for a project started at `start_date`.
pub fn project_end(
    start_date: Timestamp,
    supplied: Option<Timestamp>,
) -> Result<Timestamp, CoreError> {
    resolve_end(
        start_date,
        supplied,
        PROJECT_DEFAULT_SPAN,
        "endDate",
        "startDate",
    )
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Timelike};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }

    // -- task_completion -----------------------------------------------------

    #[test]
    fn task_defaults_to_one_month_later() {
        let created = at(2024, 3, 15);
        assert_eq!(task_completion(created, None).unwrap(), at(2024, 4, 15));
    }

    #[test]
    fn task_default_clamps_to_month_end() {
        let created = at(2024, 1, 31);
        assert_eq!(task_completion(created, None).unwrap(), at(2024, 2, 29));
    }

    #[test]
    fn task_keeps_supplied_later_date() {
        let created = at(2024, 3, 15);
        let supplied = created + Duration::days(3);
        assert_eq!(task_completion(created, Some(supplied)).unwrap(), supplied);
    }

    #[test]
    fn task_accepts_date_equal_to_creation() {
        let created = at(2024, 3, 15);
        assert_eq!(task_completion(created, Some(created)).unwrap(), created);
    }

    #[test]
    fn task_rejects_date_before_creation() {
        let created = at(2024, 3, 15);
        let err = task_completion(created, Some(created - Duration::seconds(1))).unwrap_err();
        assert_matches!(
            err,
            CoreError::DateOrder {
                field: "completedAt",
                reference: "createdAt"
            }
        );
        assert_eq!(
            err.to_string(),
            "completedAt should not be earlier than createdAt"
        );
    }

    // -- project_end ---------------------------------------------------------

    #[test]
    fn project_defaults_to_one_year_later() {
        let start = at(2023, 6, 1);
        assert_eq!(project_end(start, None).unwrap(), at(2024, 6, 1));
    }

    #[test]
    fn project_default_from_leap_day() {
        let start = at(2024, 2, 29);
        assert_eq!(project_end(start, None).unwrap(), at(2025, 2, 28));
    }

    #[test]
    fn project_rejects_end_before_start() {
        let start = at(2023, 6, 1);
        assert_matches!(
            project_end(start, Some(at(2023, 5, 31))),
            Err(CoreError::DateOrder {
                field: "endDate",
                ..
            })
        );
    }
}
