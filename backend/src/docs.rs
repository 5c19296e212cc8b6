#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    models::{
        attendance::{
            AttendanceStatus, Session, SessionStudent, SubmitAttendanceRequest,
            SubmitAttendanceResponse, SubmitEntry,
        },
        course::Course,
        student::RosterStudent,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        submit_attendance_doc,
        query_history_doc,
        list_courses_doc,
        course_roster_doc
    ),
    components(schemas(
        AttendanceStatus,
        SubmitEntry,
        SubmitAttendanceRequest,
        SubmitAttendanceResponse,
        Session,
        SessionStudent,
        Course,
        RosterStudent,
        ErrorResponse
    )),
    tags(
        (name = "attendance", description = "Attendance submission and history"),
        (name = "courses", description = "Course and roster lookup")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "attendance",
    request_body = SubmitAttendanceRequest,
    responses(
        (status = 200, description = "Batch saved", body = SubmitAttendanceResponse),
        (status = 400, description = "Missing field, empty batch or malformed date", body = ErrorResponse),
        (status = 405, description = "Wrong verb", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
fn submit_attendance_doc() {}

#[utoipa::path(
    get,
    path = "/api/history",
    tag = "attendance",
    params(
        ("courseId" = Option<i64>, Query, description = "Course filter; wins over year/division"),
        ("year" = Option<i32>, Query, description = "Year level filter"),
        ("division" = Option<String>, Query, description = "Division label filter"),
        ("date" = Option<String>, Query, description = "Date filter, DD/MM/YYYY or YYYY-MM-DD"),
        ("shift" = Option<String>, Query, description = "Shift filter")
    ),
    responses(
        (status = 200, description = "Sessions grouped by (course, date, shift)", body = [Session]),
        (status = 400, description = "Malformed date filter", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
fn query_history_doc() {}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses(
        (status = 200, description = "All courses ordered by year and division", body = [Course]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
fn list_courses_doc() {}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/roster",
    tag = "courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Students enrolled in the course", body = [RosterStudent]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
fn course_roster_doc() {}
