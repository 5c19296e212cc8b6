//! The historical query endpoint: fetch filtered attendance rows and group
//! them into sessions.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    error::AppError,
    models::attendance::{HistoryRow, Session, SessionStudent},
    repositories::attendance::HistoryFilters,
    state::AppState,
    utils::date::parse_date,
};

/// Optional query parameters of `GET /api/history`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub course_id: Option<i64>,
    pub year: Option<i32>,
    pub division: Option<String>,
    pub date: Option<String>,
    pub shift: Option<String>,
}

impl TryFrom<HistoryQuery> for HistoryFilters {
    type Error = AppError;

    fn try_from(query: HistoryQuery) -> Result<Self, Self::Error> {
        let date = query.date.as_deref().map(parse_date).transpose()?;
        Ok(HistoryFilters {
            course_id: query.course_id,
            year: query.year,
            division: query.division,
            date,
            shift: query.shift,
        })
    }
}

/// `GET /api/history`: attendance history grouped into one session per
/// (course, date, shift). No matches is an empty list, not an error.
pub async fn query_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<Session>>, AppError> {
    let filters = HistoryFilters::try_from(params)?;
    let rows = state
        .attendance_repo
        .fetch_history(&state.pool, &filters)
        .await?;
    Ok(Json(group_sessions(rows)))
}

/// Partitions flat history rows into sessions keyed by (course, date,
/// shift). Session order follows the first occurrence of each key and the
/// entries within a session keep fetch order.
pub fn group_sessions(rows: Vec<HistoryRow>) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();
    let mut index: HashMap<(i64, chrono::NaiveDate, String), usize> = HashMap::new();

    for row in rows {
        let key = (row.course_id, row.date, row.shift.clone());
        let position = *index.entry(key).or_insert_with(|| {
            sessions.push(Session {
                course_id: row.course_id,
                year: row.year,
                division: row.division.clone(),
                date: row.date,
                shift: row.shift.clone(),
                students: Vec::new(),
            });
            sessions.len() - 1
        });
        sessions[position].students.push(SessionStudent {
            student_id: row.student_id,
            first_names: row.first_names,
            last_names: row.last_names,
            status: row.status,
        });
    }

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::AttendanceStatus;
    use chrono::NaiveDate;

    fn row(
        course_id: i64,
        date: &str,
        shift: &str,
        student_id: i64,
        status: AttendanceStatus,
    ) -> HistoryRow {
        HistoryRow {
            course_id,
            year: 3,
            division: "B".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            shift: shift.to_string(),
            student_id,
            first_names: format!("First{student_id}"),
            last_names: format!("Last{student_id}"),
            status,
        }
    }

    #[test]
    fn groups_one_session_per_course_date_shift() {
        let rows = vec![
            row(1, "2024-03-05", "morning", 10, AttendanceStatus::Present),
            row(1, "2024-03-05", "morning", 11, AttendanceStatus::Absent),
            row(2, "2024-03-05", "morning", 12, AttendanceStatus::Late),
            row(1, "2024-03-04", "morning", 10, AttendanceStatus::Late),
        ];

        let sessions = group_sessions(rows);

        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].course_id, 1);
        assert_eq!(sessions[0].students.len(), 2);
        assert_eq!(sessions[1].course_id, 2);
        assert_eq!(sessions[2].date.to_string(), "2024-03-04");
    }

    #[test]
    fn different_shifts_of_the_same_day_never_merge() {
        let rows = vec![
            row(1, "2024-03-05", "morning", 10, AttendanceStatus::Present),
            row(1, "2024-03-05", "afternoon", 10, AttendanceStatus::Absent),
        ];

        let sessions = group_sessions(rows);

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].shift, "morning");
        assert_eq!(sessions[1].shift, "afternoon");
    }

    #[test]
    fn session_order_follows_first_occurrence_and_entries_keep_fetch_order() {
        let rows = vec![
            row(2, "2024-03-05", "morning", 20, AttendanceStatus::Present),
            row(1, "2024-03-05", "morning", 10, AttendanceStatus::Present),
            row(2, "2024-03-05", "morning", 21, AttendanceStatus::Late),
        ];

        let sessions = group_sessions(rows);

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].course_id, 2);
        let ids: Vec<i64> = sessions[0].students.iter().map(|s| s.student_id).collect();
        assert_eq!(ids, vec![20, 21]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(group_sessions(Vec::new()).is_empty());
    }

    #[test]
    fn filters_reject_malformed_date() {
        let query = HistoryQuery {
            date: Some("not-a-date".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            HistoryFilters::try_from(query),
            Err(AppError::InvalidFormat(_))
        ));
    }

    #[test]
    fn filters_accept_both_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for raw in ["05/03/2024", "2024-03-05"] {
            let query = HistoryQuery {
                date: Some(raw.to_string()),
                ..Default::default()
            };
            let filters = HistoryFilters::try_from(query).unwrap();
            assert_eq!(filters.date, Some(expected));
        }
    }
}
