//! Attendance rows, the write payload, and the derived session shapes
//! returned by the history endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Closed set of attendance statuses stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Returns the canonical snake_case representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            // primary canonical values
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            // tolerate the legacy Spanish wire values
            "presente" => Ok(AttendanceStatus::Present),
            "ausente" => Ok(AttendanceStatus::Absent),
            "tarde" | "tardanza" | "llegada tarde" => Ok(AttendanceStatus::Late),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["present", "absent", "late"],
            )),
        }
    }
}

/// Database representation of a single attendance mark.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub shift: String,
    pub status: AttendanceStatus,
}

/// One entry of a submission batch. `student_id` stays optional because the
/// legacy client is allowed to send rows without an id; those are dropped
/// before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntry {
    pub student_id: Option<i64>,
    pub status: AttendanceStatus,
}

/// Payload of `POST /api/attendance`. Fields are optional so that absence
/// is reported as a structured `MISSING_FIELD` error instead of a
/// deserialization failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttendanceRequest {
    pub date: Option<String>,
    pub shift: Option<String>,
    pub entries: Option<Vec<SubmitEntry>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitAttendanceResponse {
    pub message: String,
    pub inserted: u64,
}

/// Validated entry handed to the write repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceWrite {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// Flat row produced by the history fetch: attendance joined with student
/// and course metadata.
#[derive(Debug, Clone, FromRow)]
pub struct HistoryRow {
    pub course_id: i64,
    pub year: i32,
    pub division: String,
    pub date: NaiveDate,
    pub shift: String,
    pub student_id: i64,
    pub first_names: String,
    pub last_names: String,
    pub status: AttendanceStatus,
}

/// Per-student entry of a session, in fetch order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStudent {
    pub student_id: i64,
    pub first_names: String,
    pub last_names: String,
    pub status: AttendanceStatus,
}

/// Derived grouping of attendance entries by (course, date, shift). Never
/// persisted; built fresh on every history query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub course_id: i64,
    pub year: i32,
    pub division: String,
    pub date: NaiveDate,
    pub shift: String,
    pub students: Vec<SessionStudent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_canonical_snake_case() {
        let v = serde_json::to_value(AttendanceStatus::Late).unwrap();
        assert_eq!(v, serde_json::json!("late"));
    }

    #[test]
    fn status_accepts_canonical_values() {
        for (raw, expected) in [
            ("\"present\"", AttendanceStatus::Present),
            ("\"absent\"", AttendanceStatus::Absent),
            ("\"late\"", AttendanceStatus::Late),
        ] {
            let s: AttendanceStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn status_accepts_legacy_spanish_values() {
        for (raw, expected) in [
            ("\"presente\"", AttendanceStatus::Present),
            ("\"ausente\"", AttendanceStatus::Absent),
            ("\"tarde\"", AttendanceStatus::Late),
            ("\"tardanza\"", AttendanceStatus::Late),
            ("\"llegada tarde\"", AttendanceStatus::Late),
        ] {
            let s: AttendanceStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<AttendanceStatus>("\"asleep\"").is_err());
    }

    #[test]
    fn submit_request_uses_camel_case_wire_names() {
        let payload: SubmitAttendanceRequest = serde_json::from_str(
            r#"{"date":"2024-03-05","shift":"morning","entries":[{"studentId":7,"status":"present"}]}"#,
        )
        .unwrap();
        let entries = payload.entries.unwrap();
        assert_eq!(entries[0].student_id, Some(7));
        assert_eq!(entries[0].status, AttendanceStatus::Present);
    }
}
