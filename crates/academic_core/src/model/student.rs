//! Student entity and per-student aggregates.
//!
//! # Responsibility
//! - Own the student's enrollment sequence and grade book.
//! - Create enrollments and keep both sides of the link in sync.
//!
//! # Invariants
//! - Enrollments are append-only, in insertion order.
//! - Every graded enrollment id is present in the enrollment sequence.
//! - Re-grading overwrites in place; grade book order is first-grade order.

use crate::error::{RecordError, RecordResult};
use crate::model::course::{Course, CourseId};
use crate::model::enrollment::{Enrollment, EnrollmentId};
use crate::model::Grade;
use crate::registry::EnrollmentRegistry;
use chrono::{DateTime, Local};
use log::{debug, warn};
use uuid::Uuid;

/// Stable identifier for one student.
pub type StudentId = Uuid;

/// Student with its own enrollments and grade book.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    enrollments: Vec<Enrollment>,
    grades: Vec<(EnrollmentId, Grade)>,
}

impl Student {
    /// Creates a student with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a student with a caller-provided stable ID.
    pub fn with_id(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enrollments: Vec::new(),
            grades: Vec::new(),
        }
    }

    /// Stable identity of this student.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Display name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolls this student in `course`, stamped with the current time.
    ///
    /// The new enrollment is appended to this student, to `course` and to
    /// `registry`, in that order, and returned.
    pub fn enroll(&mut self, course: &mut Course, registry: &mut EnrollmentRegistry) -> Enrollment {
        let enrollment = Enrollment::new(self, course, registry);
        self.attach(course, enrollment)
    }

    /// Enrolls this student in `course` with a caller-provided timestamp.
    ///
    /// Used by import paths where the enrollment date already exists. Links
    /// both sides and the registry exactly like `enroll`.
    pub fn enroll_at(
        &mut self,
        course: &mut Course,
        enrolled_at: DateTime<Local>,
        registry: &mut EnrollmentRegistry,
    ) -> Enrollment {
        let enrollment = Enrollment::with_timestamp(self, course, enrolled_at, registry);
        self.attach(course, enrollment)
    }

    fn attach(&mut self, course: &mut Course, enrollment: Enrollment) -> Enrollment {
        self.enrollments.push(enrollment);
        course.add_enrollment(enrollment);
        debug!(
            "event=enroll module=model status=ok student={} course={} enrollment={}",
            self.id,
            course.id(),
            enrollment.id()
        );
        enrollment
    }

    /// Returns a copy of the enrollment sequence.
    pub fn get_enrollments(&self) -> Vec<Enrollment> {
        self.enrollments.clone()
    }

    /// Records or overwrites the grade for one of this student's enrollments.
    ///
    /// # Errors
    /// - `RecordError::InvalidState` when `enrollment_id` is not owned by
    ///   this student. The grade book is left untouched.
    pub fn add_grade(&mut self, enrollment_id: EnrollmentId, grade: Grade) -> RecordResult<()> {
        if !self.owns(enrollment_id) {
            warn!(
                "event=add_grade module=model status=rejected student={} enrollment={}",
                self.id, enrollment_id
            );
            return Err(RecordError::invalid_state(format!(
                "enrollment {enrollment_id} does not belong to this student"
            )));
        }

        match self.grades.iter_mut().find(|(id, _)| *id == enrollment_id) {
            Some(entry) => entry.1 = grade,
            None => self.grades.push((enrollment_id, grade)),
        }
        debug!(
            "event=add_grade module=model status=ok student={} enrollment={}",
            self.id, enrollment_id
        );
        Ok(())
    }

    /// Returns the recorded grade for one enrollment, if any.
    pub fn grade_for(&self, enrollment_id: EnrollmentId) -> Option<Grade> {
        self.grades
            .iter()
            .find(|(id, _)| *id == enrollment_id)
            .map(|(_, grade)| *grade)
    }

    /// Returns whether `enrollment_id` is in this student's sequence.
    pub fn owns(&self, enrollment_id: EnrollmentId) -> bool {
        self.enrollments
            .iter()
            .any(|enrollment| enrollment.id() == enrollment_id)
    }

    /// Number of enrollments, graded or not.
    pub fn course_count(&self) -> usize {
        self.enrollments.len()
    }

    /// Number of enrollments with a recorded grade.
    pub fn graded_count(&self) -> usize {
        self.grades.len()
    }

    /// Mean of all recorded grades, `None` when nothing is graded.
    pub fn aggregate_average_grade(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: Grade = self.grades.iter().map(|(_, grade)| grade).sum();
        Some(total / self.grades.len() as f64)
    }

    /// Highest recorded grade, `None` when nothing is graded.
    pub fn highest_grade(&self) -> Option<Grade> {
        self.grades.iter().map(|(_, grade)| *grade).reduce(Grade::max)
    }

    /// Pairs each graded course with its grade, in grade-book order.
    ///
    /// Two graded enrollments in the same course collapse to one entry at
    /// the position of the first; the one graded later in grade-book order
    /// supplies the value.
    pub fn courses_by_grade(&self) -> Vec<(CourseId, Grade)> {
        let mut by_course: Vec<(CourseId, Grade)> = Vec::with_capacity(self.grades.len());
        for (enrollment_id, grade) in &self.grades {
            let Some(enrollment) = self
                .enrollments
                .iter()
                .find(|enrollment| enrollment.id() == *enrollment_id)
            else {
                continue;
            };
            let course_id = enrollment.course_id();
            match by_course.iter_mut().find(|(id, _)| *id == course_id) {
                Some(entry) => entry.1 = *grade,
                None => by_course.push((course_id, *grade)),
            }
        }
        by_course
    }
}

#[cfg(test)]
mod tests {
    use super::Student;
    use crate::error::RecordError;
    use crate::model::course::Course;
    use crate::registry::EnrollmentRegistry;
    use chrono::{Local, TimeZone};

    #[test]
    fn regrade_overwrites_without_adding_entry() {
        let mut registry = EnrollmentRegistry::new();
        let mut student = Student::new("Alice");
        let mut course = Course::new("Math");
        let enrollment = student.enroll(&mut course, &mut registry);

        student.add_grade(enrollment.id(), 60.0).expect("first grade");
        student.add_grade(enrollment.id(), 85.0).expect("regrade");

        assert_eq!(student.graded_count(), 1);
        assert_eq!(student.grade_for(enrollment.id()), Some(85.0));
    }

    #[test]
    fn duplicate_course_keeps_last_graded_value() {
        let mut registry = EnrollmentRegistry::new();
        let mut student = Student::new("Alice");
        let mut course = Course::new("Math");
        let first = student.enroll(&mut course, &mut registry);
        let second = student.enroll(&mut course, &mut registry);

        student.add_grade(first.id(), 55.0).expect("grade first attempt");
        student.add_grade(second.id(), 75.0).expect("grade retake");

        assert_eq!(student.courses_by_grade(), vec![(course.id(), 75.0)]);
    }

    #[test]
    fn courses_by_grade_follows_grading_order() {
        let mut registry = EnrollmentRegistry::new();
        let mut student = Student::new("Alice");
        let mut courses: Vec<Course> = (0..12).map(|i| Course::new(format!("C{i}"))).collect();
        let enrollments: Vec<_> = courses
            .iter_mut()
            .map(|course| student.enroll(course, &mut registry))
            .collect();

        // Grade in reverse enrollment order so grading order is what counts.
        for (grade, enrollment) in enrollments.iter().rev().enumerate() {
            student
                .add_grade(enrollment.id(), grade as f64)
                .expect("grade own enrollment");
        }
        // Regrading keeps the original position.
        student
            .add_grade(enrollments[11].id(), 99.0)
            .expect("regrade first graded");

        let expected: Vec<_> = courses
            .iter()
            .rev()
            .enumerate()
            .map(|(grade, course)| (course.id(), if grade == 0 { 99.0 } else { grade as f64 }))
            .collect();
        assert_eq!(student.courses_by_grade(), expected);
    }

    #[test]
    fn enroll_at_links_both_sides_with_given_timestamp() {
        let mut registry = EnrollmentRegistry::new();
        let mut student = Student::new("Alice");
        let mut course = Course::new("Math");
        let stamp = Local
            .with_ymd_and_hms(2024, 9, 2, 10, 30, 0)
            .single()
            .expect("unambiguous local time");

        let enrollment = student.enroll_at(&mut course, stamp, &mut registry);

        assert_eq!(enrollment.get_enrollment_date(), stamp);
        assert_eq!(student.get_enrollments(), vec![enrollment]);
        assert_eq!(course.get_enrollments(), vec![enrollment]);
        assert_eq!(registry.snapshot(), vec![enrollment]);
    }

    #[test]
    fn rejected_grade_leaves_grade_book_unchanged() {
        let mut registry = EnrollmentRegistry::new();
        let mut alice = Student::new("Alice");
        let mut bob = Student::new("Bob");
        let mut course = Course::new("Math");
        let bobs = bob.enroll(&mut course, &mut registry);

        let err = alice
            .add_grade(bobs.id(), 100.0)
            .expect_err("foreign enrollment must be rejected");

        assert!(matches!(err, RecordError::InvalidState(_)));
        assert!(err.to_string().contains("does not belong to this student"));
        assert_eq!(alice.graded_count(), 0);
        assert_eq!(alice.aggregate_average_grade(), None);
    }
}
