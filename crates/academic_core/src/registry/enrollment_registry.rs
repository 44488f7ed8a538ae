//! Caller-owned, append-only collection of enrollments.

use crate::model::course::CourseId;
use crate::model::enrollment::{Enrollment, EnrollmentId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Creation-ordered record of all enrollments made against it.
///
/// Each roster owns one registry, so separate rosters (and separate tests)
/// never observe each other's enrollments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentRegistry {
    entries: Vec<Enrollment>,
}

impl EnrollmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one enrollment; called only by enrollment construction.
    pub(crate) fn record(&mut self, enrollment: Enrollment) {
        self.entries.push(enrollment);
    }

    /// Number of enrollments ever recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no enrollment has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Enrollment> {
        self.entries.iter()
    }

    /// Returns whether `enrollment_id` was recorded here.
    pub fn contains(&self, enrollment_id: EnrollmentId) -> bool {
        self.get(enrollment_id).is_some()
    }

    /// Looks up one enrollment by id.
    pub fn get(&self, enrollment_id: EnrollmentId) -> Option<&Enrollment> {
        self.entries
            .iter()
            .find(|enrollment| enrollment.id() == enrollment_id)
    }

    /// Returns a copy of all entries in creation order.
    pub fn snapshot(&self) -> Vec<Enrollment> {
        self.entries.clone()
    }

    /// Counts enrollments per calendar date of creation.
    ///
    /// Dates without enrollments are absent rather than zero.
    pub fn aggregate_enrollments_per_day(&self) -> BTreeMap<NaiveDate, usize> {
        let mut per_day = BTreeMap::new();
        for enrollment in &self.entries {
            *per_day.entry(enrollment.enrollment_day()).or_insert(0) += 1;
        }
        per_day
    }

    /// Enrollment count per course, ordered by first appearance.
    pub fn enrollment_counts_by_course(&self) -> Vec<(CourseId, usize)> {
        let mut counts: Vec<(CourseId, usize)> = Vec::new();
        let mut positions: HashMap<CourseId, usize> = HashMap::new();
        for enrollment in &self.entries {
            let course_id = enrollment.course_id();
            match positions.get(&course_id) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(course_id, counts.len());
                    counts.push((course_id, 1));
                }
            }
        }
        counts
    }

    /// Course with the most enrollments, `None` for an empty registry.
    ///
    /// On a tie, the course that appears first in the registry wins.
    pub fn most_popular_course(&self) -> Option<CourseId> {
        let mut best: Option<(CourseId, usize)> = None;
        for (course_id, count) in self.enrollment_counts_by_course() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((course_id, count));
            }
        }
        best.map(|(course_id, _)| course_id)
    }
}
