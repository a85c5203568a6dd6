//! Command handlers for the `aligner` binary.

pub mod analyze;
pub mod purpose;
pub mod scan;
