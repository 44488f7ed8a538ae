//! Course entity and per-course aggregates.
//!
//! # Responsibility
//! - Keep the sequence of enrollments referencing this course.
//! - Compute grade aggregates by reading grades from owning students.
//!
//! # Invariants
//! - Enrollments are append-only, in insertion order.
//! - Enrollments without a recorded grade are excluded from aggregates.

use crate::model::enrollment::Enrollment;
use crate::model::student::{Student, StudentId};
use crate::model::Grade;
use uuid::Uuid;

/// Stable identifier for one course.
pub type CourseId = Uuid;

/// Read access to grades, which live on the owning student.
pub trait GradeLookup {
    /// Returns the grade recorded for `enrollment`, if any.
    fn recorded_grade(&self, enrollment: &Enrollment) -> Option<Grade>;
}

impl GradeLookup for Student {
    fn recorded_grade(&self, enrollment: &Enrollment) -> Option<Grade> {
        if enrollment.student_id() != self.id() {
            return None;
        }
        self.grade_for(enrollment.id())
    }
}

impl GradeLookup for [Student] {
    fn recorded_grade(&self, enrollment: &Enrollment) -> Option<Grade> {
        self.iter()
            .find(|student| student.id() == enrollment.student_id())?
            .grade_for(enrollment.id())
    }
}

/// Course with the enrollments that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    enrollments: Vec<Enrollment>,
}

impl Course {
    /// Creates a course with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a course with a caller-provided stable ID.
    pub fn with_id(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            enrollments: Vec::new(),
        }
    }

    /// Stable identity of this course.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Title given at construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an enrollment to this course.
    ///
    /// Called by `Student::enroll`. The enrollment's course id is not
    /// checked against this course.
    pub fn add_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Returns a copy of the enrollment sequence.
    pub fn get_enrollments(&self) -> Vec<Enrollment> {
        self.enrollments.clone()
    }

    /// Number of enrollments recorded against this course.
    pub fn student_count(&self) -> usize {
        self.enrollments.len()
    }

    /// Mean grade over graded enrollments, `None` when none are graded.
    ///
    /// `grades` must cover every student enrolled in this course; an
    /// enrollment whose student it cannot resolve is treated as ungraded.
    /// `Roster::course_average_grade` always passes the full roster.
    pub fn average_grade<L>(&self, grades: &L) -> Option<f64>
    where
        L: GradeLookup + ?Sized,
    {
        let recorded: Vec<Grade> = self
            .enrollments
            .iter()
            .filter_map(|enrollment| grades.recorded_grade(enrollment))
            .collect();
        if recorded.is_empty() {
            return None;
        }
        Some(recorded.iter().sum::<Grade>() / recorded.len() as f64)
    }

    /// Student holding the highest grade, `None` when none are graded.
    ///
    /// Ties keep the earliest enrollment in sequence order. As with
    /// `average_grade`, `grades` must cover every enrolled student;
    /// `Roster::course_top_student` always does.
    pub fn top_student<L>(&self, grades: &L) -> Option<StudentId>
    where
        L: GradeLookup + ?Sized,
    {
        let mut top: Option<&Enrollment> = None;
        let mut top_grade = Grade::NEG_INFINITY;
        for enrollment in &self.enrollments {
            let Some(grade) = grades.recorded_grade(enrollment) else {
                continue;
            };
            if grade > top_grade {
                top_grade = grade;
                top = Some(enrollment);
            }
        }
        top.map(Enrollment::student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Course, GradeLookup};
    use crate::model::student::Student;
    use crate::registry::EnrollmentRegistry;

    #[test]
    fn ungraded_enrollments_do_not_count() {
        let mut registry = EnrollmentRegistry::new();
        let mut course = Course::new("Math");
        let mut alice = Student::new("Alice");
        let mut bob = Student::new("Bob");
        let graded = alice.enroll(&mut course, &mut registry);
        bob.enroll(&mut course, &mut registry);
        alice.add_grade(graded.id(), 64.0).expect("grade alice");

        let students = vec![alice, bob];
        assert_eq!(course.student_count(), 2);
        assert_eq!(course.average_grade(students.as_slice()), Some(64.0));
    }

    #[test]
    fn top_student_tie_keeps_earliest_enrollment() {
        let mut registry = EnrollmentRegistry::new();
        let mut course = Course::new("Math");
        let mut alice = Student::new("Alice");
        let mut bob = Student::new("Bob");
        let first = alice.enroll(&mut course, &mut registry);
        let second = bob.enroll(&mut course, &mut registry);
        bob.add_grade(second.id(), 88.0).expect("grade bob");
        alice.add_grade(first.id(), 88.0).expect("grade alice");

        let alice_id = alice.id();
        let students = vec![alice, bob];
        assert_eq!(course.top_student(students.as_slice()), Some(alice_id));
    }

    #[test]
    fn partial_lookup_only_sees_covered_students() {
        let mut registry = EnrollmentRegistry::new();
        let mut course = Course::new("Math");
        let mut alice = Student::new("Alice");
        let mut bob = Student::new("Bob");
        let alices = alice.enroll(&mut course, &mut registry);
        let bobs = bob.enroll(&mut course, &mut registry);
        alice.add_grade(alices.id(), 90.0).expect("grade alice");
        bob.add_grade(bobs.id(), 70.0).expect("grade bob");

        assert_eq!(course.average_grade(&bob), Some(70.0));
        let students = vec![alice, bob];
        assert_eq!(course.average_grade(students.as_slice()), Some(80.0));
    }

    #[test]
    fn student_lookup_ignores_foreign_enrollments() {
        let mut registry = EnrollmentRegistry::new();
        let mut course = Course::new("Math");
        let mut alice = Student::new("Alice");
        let bob = Student::new("Bob");
        let enrollment = alice.enroll(&mut course, &mut registry);
        alice.add_grade(enrollment.id(), 70.0).expect("grade alice");

        assert_eq!(alice.recorded_grade(&enrollment), Some(70.0));
        assert_eq!(bob.recorded_grade(&enrollment), None);
    }

    #[test]
    fn zero_grade_still_wins_over_no_grade() {
        let mut registry = EnrollmentRegistry::new();
        let mut course = Course::new("Math");
        let mut alice = Student::new("Alice");
        let enrollment = alice.enroll(&mut course, &mut registry);
        alice.add_grade(enrollment.id(), 0.0).expect("grade alice");

        assert_eq!(course.top_student(&alice), Some(alice.id()));
        assert_eq!(course.average_grade(&alice), Some(0.0));
    }
}
