//! The attendance write endpoint.

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppJson},
    models::attendance::{AttendanceWrite, SubmitAttendanceRequest, SubmitAttendanceResponse},
    state::AppState,
    utils::date::parse_date,
    validation::rules::validate_shift,
};

/// `POST /api/attendance`: replaces the attendance of the submitted students
/// for one (date, shift).
///
/// Entries without a positive student id are dropped before persistence,
/// mirroring the behavior the legacy clients rely on; a batch that reduces
/// to nothing is rejected rather than silently accepted.
pub async fn submit_attendance(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitAttendanceRequest>,
) -> Result<Json<SubmitAttendanceResponse>, AppError> {
    let raw_date = payload.date.ok_or(AppError::MissingField("date"))?;
    let shift = payload.shift.ok_or(AppError::MissingField("shift"))?;
    let entries = payload.entries.ok_or(AppError::MissingField("entries"))?;

    if entries.is_empty() {
        return Err(AppError::EmptyBatch("No entries to save".to_string()));
    }

    let date = parse_date(&raw_date)?;
    validate_shift(&shift).map_err(|e| AppError::Validation(vec![format!("shift: {}", e.code)]))?;

    let writes: Vec<AttendanceWrite> = entries
        .iter()
        .filter_map(|entry| match entry.student_id {
            Some(id) if id > 0 => Some(AttendanceWrite {
                student_id: id,
                status: entry.status,
            }),
            _ => None,
        })
        .collect();

    if writes.is_empty() {
        return Err(AppError::EmptyBatch(
            "No valid student ids in entries".to_string(),
        ));
    }

    let inserted = state
        .attendance_repo
        .replace_for_date_shift(&state.pool, date, &shift, &writes)
        .await?;

    tracing::debug!(%date, shift, inserted, "attendance batch saved");

    Ok(Json(SubmitAttendanceResponse {
        message: "Attendance saved".to_string(),
        inserted,
    }))
}

/// JSON 405 for non-POST access, so misdirected clients get a structured
/// error instead of an empty response.
pub async fn reject_non_post() -> AppError {
    AppError::MethodNotAllowed("Method not allowed: use POST to submit attendance".to_string())
}
