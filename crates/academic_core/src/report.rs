//! Read-only aggregate report for presentation layers.
//!
//! # Responsibility
//! - Snapshot every aggregate of a roster into one serializable value.
//! - Resolve ids to names/titles so callers need no further lookups.
//!
//! # Invariants
//! - Missing aggregates serialize as `null`, never as zero.
//! - Students and courses keep roster creation order.

use crate::model::course::{Course, CourseId};
use crate::model::student::{Student, StudentId};
use crate::model::Grade;
use crate::service::roster_service::Roster;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Grade of one student in one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGrade {
    pub course_id: CourseId,
    pub title: String,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub id: StudentId,
    pub name: String,
    pub course_count: usize,
    pub average_grade: Option<f64>,
    pub highest_grade: Option<Grade>,
    /// One entry per graded course, in grading order.
    pub grades: Vec<CourseGrade>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub student_count: usize,
    pub average_grade: Option<f64>,
    /// Name of the top student.
    pub top_student: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub students: Vec<StudentSummary>,
    pub courses: Vec<CourseSummary>,
    /// Keyed by ISO date (`YYYY-MM-DD`).
    pub enrollments_per_day: BTreeMap<NaiveDate, usize>,
    /// Title of the most popular course.
    pub most_popular_course: Option<String>,
}

impl RosterReport {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster
                .students()
                .iter()
                .map(|student| summarize_student(roster, student))
                .collect(),
            courses: roster
                .courses()
                .iter()
                .map(|course| summarize_course(roster, course))
                .collect(),
            enrollments_per_day: roster.enrollments_per_day(),
            most_popular_course: roster
                .most_popular_course()
                .map(|course| course.title().to_string()),
        }
    }
}

fn summarize_student(roster: &Roster, student: &Student) -> StudentSummary {
    let grades = student
        .courses_by_grade()
        .into_iter()
        .map(|(course_id, grade)| CourseGrade {
            course_id,
            title: roster
                .course(course_id)
                .map(|course| course.title().to_string())
                .unwrap_or_default(),
            grade,
        })
        .collect();

    StudentSummary {
        id: student.id(),
        name: student.name().to_string(),
        course_count: student.course_count(),
        average_grade: student.aggregate_average_grade(),
        highest_grade: student.highest_grade(),
        grades,
    }
}

fn summarize_course(roster: &Roster, course: &Course) -> CourseSummary {
    CourseSummary {
        id: course.id(),
        title: course.title().to_string(),
        student_count: course.student_count(),
        average_grade: course.average_grade(roster),
        top_student: course
            .top_student(roster)
            .and_then(|student_id| roster.student(student_id))
            .map(|student| student.name().to_string()),
    }
}
