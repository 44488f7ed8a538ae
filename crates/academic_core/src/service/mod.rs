//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the entity graph behind id-keyed entry points.
//! - Keep presentation layers decoupled from ownership details.

pub mod roster_service;
