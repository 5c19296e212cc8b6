//! Attendance repository: the replace-style batch write and the joined
//! history fetch.
//!
//! The trait can be mocked with mockall; use `MockAttendanceRepositoryTrait`
//! in tests to exercise handlers without a database.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::AppError;
use crate::models::attendance::{AttendanceWrite, HistoryRow};
use crate::repositories::transaction::{begin_transaction, commit_transaction};

/// Optional filters of the history fetch. `course_id` wins over
/// `year`/`division` when both are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilters {
    pub course_id: Option<i64>,
    pub year: Option<i32>,
    pub division: Option<String>,
    pub date: Option<NaiveDate>,
    pub shift: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepositoryTrait: Send + Sync {
    /// Replaces the attendance of the given students for one (date, shift):
    /// deletes their existing rows, then inserts the submitted batch, both
    /// inside a single transaction. Students not in the batch are left
    /// untouched. Returns the number of inserted rows.
    async fn replace_for_date_shift(
        &self,
        db: &PgPool,
        date: NaiveDate,
        shift: &str,
        entries: &[AttendanceWrite],
    ) -> Result<u64, AppError>;

    /// Fetches attendance rows joined with student and course metadata,
    /// ordered by date descending, then course year/division, shift, and
    /// student last names.
    async fn fetch_history(
        &self,
        db: &PgPool,
        filters: &HistoryFilters,
    ) -> Result<Vec<HistoryRow>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AttendanceRepository;

impl AttendanceRepository {
    pub fn new() -> Self {
        Self
    }
}

const HISTORY_SELECT: &str = "SELECT c.id AS course_id, c.year, c.division, \
     a.date, a.shift, s.id AS student_id, s.first_names, s.last_names, a.status \
     FROM attendance_records a \
     JOIN students s ON s.id = a.student_id \
     JOIN course_roster r ON r.student_id = s.id \
     JOIN courses c ON c.id = r.course_id";

#[async_trait]
impl AttendanceRepositoryTrait for AttendanceRepository {
    async fn replace_for_date_shift(
        &self,
        db: &PgPool,
        date: NaiveDate,
        shift: &str,
        entries: &[AttendanceWrite],
    ) -> Result<u64, AppError> {
        let ids: Vec<i64> = entries.iter().map(|e| e.student_id).collect();

        let mut tx = begin_transaction(db).await?;

        sqlx::query(
            "DELETE FROM attendance_records \
             WHERE student_id = ANY($1) AND date = $2 AND shift = $3",
        )
        .bind(&ids)
        .bind(date)
        .bind(shift)
        .execute(tx.as_mut())
        .await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO attendance_records (student_id, date, shift, status) ");
        builder.push_values(entries, |mut row, entry| {
            row.push_bind(entry.student_id)
                .push_bind(date)
                .push_bind(shift)
                .push_bind(entry.status.as_str());
        });
        let inserted = builder.build().execute(tx.as_mut()).await?.rows_affected();

        commit_transaction(tx).await?;
        Ok(inserted)
    }

    async fn fetch_history(
        &self,
        db: &PgPool,
        filters: &HistoryFilters,
    ) -> Result<Vec<HistoryRow>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(HISTORY_SELECT);
        let mut has_where = false;
        let mut and_where = |builder: &mut QueryBuilder<Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(course_id) = filters.course_id {
            and_where(&mut builder);
            builder.push("c.id = ").push_bind(course_id);
        } else {
            if let Some(year) = filters.year {
                and_where(&mut builder);
                builder.push("c.year = ").push_bind(year);
            }
            if let Some(division) = &filters.division {
                and_where(&mut builder);
                builder.push("c.division = ").push_bind(division.clone());
            }
        }
        if let Some(date) = filters.date {
            and_where(&mut builder);
            builder.push("a.date = ").push_bind(date);
        }
        if let Some(shift) = &filters.shift {
            and_where(&mut builder);
            builder.push("a.shift = ").push_bind(shift.clone());
        }
        builder.push(" ORDER BY a.date DESC, c.year, c.division, a.shift, s.last_names");

        let rows = builder.build_query_as::<HistoryRow>().fetch_all(db).await?;
        Ok(rows)
    }
}
