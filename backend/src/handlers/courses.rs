//! Course and roster lookup endpoints consumed by the dashboard to populate
//! filter options and per-course student lists.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{course::Course, student::RosterStudent},
    state::AppState,
};

/// `GET /api/courses`: every course, ordered by year then division.
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.course_repo.list(&state.pool).await?;
    Ok(Json(courses))
}

/// `GET /api/courses/{id}/roster`: the students enrolled in one course.
pub async fn course_roster(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Json<Vec<RosterStudent>>, AppError> {
    let roster = state.course_repo.roster(&state.pool, course_id).await?;
    Ok(Json(roster))
}
