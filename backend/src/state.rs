use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    repositories::{
        attendance::{AttendanceRepository, AttendanceRepositoryTrait},
        course::{CourseRepository, CourseRepositoryTrait},
    },
};

/// Shared application state handed to every handler.
///
/// Repositories are carried as trait objects so tests can swap in doubles
/// without touching the router wiring.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub attendance_repo: Arc<dyn AttendanceRepositoryTrait>,
    pub course_repo: Arc<dyn CourseRepositoryTrait>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config,
            attendance_repo: Arc::new(AttendanceRepository::new()),
            course_repo: Arc::new(CourseRepository::new()),
        }
    }

    pub fn with_repositories(
        pool: DbPool,
        config: Config,
        attendance_repo: Arc<dyn AttendanceRepositoryTrait>,
        course_repo: Arc<dyn CourseRepositoryTrait>,
    ) -> Self {
        Self {
            pool,
            config,
            attendance_repo,
            course_repo,
        }
    }
}
