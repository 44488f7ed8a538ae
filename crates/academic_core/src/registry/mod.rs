//! Enrollment registry.
//!
//! # Responsibility
//! - Hold every enrollment created against one roster, in creation order.
//! - Answer registry-wide aggregates (per-day counts, most popular course).
//!
//! # Invariants
//! - The registry is append-only; entries are never removed or reordered.
//! - Only enrollment construction appends to a registry.

pub mod enrollment_registry;

pub use enrollment_registry::EnrollmentRegistry;
