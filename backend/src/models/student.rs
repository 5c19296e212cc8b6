use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Roster projection of a student: identity plus display names. Student
/// rows themselves are provisioned by administrative tooling outside this
/// service; only roster reads are exposed here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterStudent {
    pub id: i64,
    pub first_names: String,
    pub last_names: String,
}
