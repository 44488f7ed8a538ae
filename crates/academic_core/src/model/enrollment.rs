//! Enrollment join record.
//!
//! # Responsibility
//! - Link exactly one student to one course with a creation timestamp.
//! - Append every new enrollment to the caller-provided registry.
//!
//! # Invariants
//! - Student id, course id and timestamp are fixed at construction.
//! - Construction always records the enrollment in the registry.

use crate::model::course::{Course, CourseId};
use crate::model::student::{Student, StudentId};
use crate::registry::EnrollmentRegistry;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for one enrollment.
pub type EnrollmentId = Uuid;

/// Immutable join record between one student and one course.
///
/// Enrollments are small value types; the student, the course and the
/// registry each keep their own copy and compare them by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    id: EnrollmentId,
    student_id: StudentId,
    course_id: CourseId,
    enrolled_at: DateTime<Local>,
}

impl Enrollment {
    /// Creates an enrollment stamped with the current wall-clock time and
    /// records it in `registry`.
    ///
    /// Reached only through `Student::enroll`, which attaches the result to
    /// both the student and the course.
    pub(crate) fn new(student: &Student, course: &Course, registry: &mut EnrollmentRegistry) -> Self {
        Self::with_timestamp(student, course, Local::now(), registry)
    }

    /// Creates an enrollment with a caller-provided timestamp.
    ///
    /// Reached only through `Student::enroll_at`.
    pub(crate) fn with_timestamp(
        student: &Student,
        course: &Course,
        enrolled_at: DateTime<Local>,
        registry: &mut EnrollmentRegistry,
    ) -> Self {
        let enrollment = Self {
            id: Uuid::new_v4(),
            student_id: student.id(),
            course_id: course.id(),
            enrolled_at,
        };
        registry.record(enrollment);
        enrollment
    }

    /// Stable identity used for ownership checks and grade lookups.
    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    /// Student this enrollment belongs to.
    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// Course this enrollment references.
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Returns the full creation timestamp.
    pub fn get_enrollment_date(&self) -> DateTime<Local> {
        self.enrolled_at
    }

    /// Returns the calendar date of creation, time of day discarded.
    pub fn enrollment_day(&self) -> NaiveDate {
        self.enrolled_at.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::Enrollment;
    use crate::model::course::Course;
    use crate::model::student::Student;
    use crate::registry::EnrollmentRegistry;
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn construction_records_in_registry() {
        let mut registry = EnrollmentRegistry::new();
        let student = Student::new("Alice");
        let course = Course::new("Math");

        let enrollment = Enrollment::new(&student, &course, &mut registry);

        assert_eq!(enrollment.student_id(), student.id());
        assert_eq!(enrollment.course_id(), course.id());
        assert!(registry.contains(enrollment.id()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn enrollment_day_drops_time_of_day() {
        let mut registry = EnrollmentRegistry::new();
        let student = Student::new("Alice");
        let course = Course::new("Math");
        let stamp = Local
            .with_ymd_and_hms(2024, 9, 2, 23, 15, 0)
            .single()
            .expect("unambiguous local time");

        let enrollment = Enrollment::with_timestamp(&student, &course, stamp, &mut registry);

        assert_eq!(enrollment.get_enrollment_date(), stamp);
        assert_eq!(
            enrollment.enrollment_day(),
            NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date")
        );
    }
}
