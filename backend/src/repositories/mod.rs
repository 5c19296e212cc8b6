pub mod attendance;
pub mod course;
pub mod transaction;

pub use attendance::{AttendanceRepository, AttendanceRepositoryTrait, HistoryFilters};
pub use course::{CourseRepository, CourseRepositoryTrait};
