//! In-memory academic record model.
//!
//! # Responsibility
//! - Define students, courses and the enrollments linking them.
//! - Compute per-student and per-course aggregates on demand.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`-backed id.
//! - An enrollment is present in its student's sequence, its course's
//!   sequence and the registry it was created with.
//! - Nothing is ever removed; aggregates are recomputed on every call.

pub mod course;
pub mod enrollment;
pub mod student;

/// Numeric outcome recorded for one enrollment.
pub type Grade = f64;
