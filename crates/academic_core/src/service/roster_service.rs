//! Roster use-case service.
//!
//! # Responsibility
//! - Own students, courses and their shared enrollment registry.
//! - Expose id-keyed entry points so callers never juggle borrows.
//!
//! # Invariants
//! - Ids are validated before any mutation; a rejected call changes nothing.
//! - Students and courses are listed in creation order.

use crate::error::{RecordError, RecordResult};
use crate::model::course::{Course, CourseId, GradeLookup};
use crate::model::enrollment::{Enrollment, EnrollmentId};
use crate::model::student::{Student, StudentId};
use crate::model::Grade;
use crate::registry::EnrollmentRegistry;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::BTreeMap;

/// In-memory academic record: students, courses and their enrollments.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    courses: Vec<Course>,
    registry: EnrollmentRegistry,
}

impl Roster {
    /// Creates an empty roster with its own registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student and returns its generated ID.
    pub fn add_student(&mut self, name: impl Into<String>) -> StudentId {
        let student = Student::new(name);
        let id = student.id();
        self.students.push(student);
        info!("event=student_add module=service status=ok student={id}");
        id
    }

    /// Adds a course and returns its generated ID.
    pub fn add_course(&mut self, title: impl Into<String>) -> CourseId {
        let course = Course::new(title);
        let id = course.id();
        self.courses.push(course);
        info!("event=course_add module=service status=ok course={id}");
        id
    }

    /// Looks up one student by id.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    /// Looks up one course by id.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    /// All students in creation order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in creation order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Registry holding every enrollment made through this roster.
    pub fn registry(&self) -> &EnrollmentRegistry {
        &self.registry
    }

    /// Enrolls a student in a course.
    ///
    /// # Errors
    /// - `RecordError::InvalidArgument` when either id is unknown. No
    ///   enrollment is created in that case.
    pub fn enroll(&mut self, student_id: StudentId, course_id: CourseId) -> RecordResult<Enrollment> {
        let course_index = self.course_index(course_id)?;
        let student_index = self.student_index(student_id)?;

        let student = &mut self.students[student_index];
        let course = &mut self.courses[course_index];
        Ok(student.enroll(course, &mut self.registry))
    }

    /// Records a grade for one of the student's enrollments.
    ///
    /// # Errors
    /// - `RecordError::InvalidArgument` when `student_id` is unknown.
    /// - `RecordError::InvalidState` when the enrollment is not owned by the
    ///   student.
    pub fn add_grade(
        &mut self,
        student_id: StudentId,
        enrollment_id: EnrollmentId,
        grade: Grade,
    ) -> RecordResult<()> {
        let student_index = self.student_index(student_id)?;
        self.students[student_index].add_grade(enrollment_id, grade)
    }

    /// Mean grade of one course, `Ok(None)` when nothing is graded.
    pub fn course_average_grade(&self, course_id: CourseId) -> RecordResult<Option<f64>> {
        let course = self.require_course(course_id)?;
        Ok(course.average_grade(self))
    }

    /// Top student of one course, `Ok(None)` when nothing is graded.
    pub fn course_top_student(&self, course_id: CourseId) -> RecordResult<Option<&Student>> {
        let course = self.require_course(course_id)?;
        Ok(course
            .top_student(self)
            .and_then(|student_id| self.student(student_id)))
    }

    /// Course with the most enrollments across the registry.
    pub fn most_popular_course(&self) -> Option<&Course> {
        self.registry
            .most_popular_course()
            .and_then(|course_id| self.course(course_id))
    }

    /// Enrollment counts per calendar date across the registry.
    pub fn enrollments_per_day(&self) -> BTreeMap<NaiveDate, usize> {
        self.registry.aggregate_enrollments_per_day()
    }

    fn require_course(&self, course_id: CourseId) -> RecordResult<&Course> {
        let index = self.course_index(course_id)?;
        Ok(&self.courses[index])
    }

    fn student_index(&self, student_id: StudentId) -> RecordResult<usize> {
        self.students
            .iter()
            .position(|student| student.id() == student_id)
            .ok_or_else(|| {
                warn!("event=lookup module=service status=rejected student={student_id}");
                RecordError::invalid_argument(format!("unknown student id: {student_id}"))
            })
    }

    fn course_index(&self, course_id: CourseId) -> RecordResult<usize> {
        self.courses
            .iter()
            .position(|course| course.id() == course_id)
            .ok_or_else(|| {
                warn!("event=lookup module=service status=rejected course={course_id}");
                RecordError::invalid_argument(format!("unknown course id: {course_id}"))
            })
    }
}

impl GradeLookup for Roster {
    fn recorded_grade(&self, enrollment: &Enrollment) -> Option<Grade> {
        self.students.as_slice().recorded_grade(enrollment)
    }
}
