//! Domain Layer
//!
//! The alignment engine itself: pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - ProjectFact, PurposeProfile, AlignmentVerdict, reports
//! - `value_objects/` - Vocabulary, ScoringPolicy, DomainFocus, Level
//! - `services/` - extraction rules, purpose analyzer, scorer, detector, planner
//! - `ports/` - the `ProjectSource` boundary to the file system
//!
//! Dependency order, leaves first: extraction and purpose analysis, then the
//! per-file scorer, then the detector and cleanup planner.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
