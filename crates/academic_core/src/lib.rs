//! Core domain logic for in-memory academic records.
//! Students, courses and enrollments plus the aggregates derived from them.

pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod report;
pub mod service;

pub use error::{RecordError, RecordResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId, GradeLookup};
pub use model::enrollment::{Enrollment, EnrollmentId};
pub use model::student::{Student, StudentId};
pub use model::Grade;
pub use registry::EnrollmentRegistry;
pub use report::{CourseGrade, CourseSummary, RosterReport, StudentSummary};
pub use service::roster_service::Roster;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
