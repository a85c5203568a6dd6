//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local project walker and atomic report writer

pub mod fs;

pub use fs::{atomic_write, LocalProjectSource};
