//! Course listing and roster lookup.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::course::Course;
use crate::models::student::RosterStudent;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepositoryTrait: Send + Sync {
    /// All courses, ordered by year level then division label.
    async fn list(&self, db: &PgPool) -> Result<Vec<Course>, AppError>;

    /// The students enrolled in one course. Rows whose role is not
    /// `student` are excluded; an unknown course id yields an empty list.
    async fn roster(&self, db: &PgPool, course_id: i64) -> Result<Vec<RosterStudent>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CourseRepository;

impl CourseRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CourseRepositoryTrait for CourseRepository {
    async fn list(&self, db: &PgPool) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, Course>(
            "SELECT id, year, division FROM courses ORDER BY year, division",
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    async fn roster(&self, db: &PgPool, course_id: i64) -> Result<Vec<RosterStudent>, AppError> {
        let rows = sqlx::query_as::<_, RosterStudent>(
            "SELECT s.id, s.first_names, s.last_names \
             FROM course_roster r \
             JOIN students s ON r.student_id = s.id \
             WHERE r.course_id = $1 AND s.role = 'student' \
             ORDER BY s.last_names, s.first_names",
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
