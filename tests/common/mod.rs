//! Common test utilities for Aligner CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus CLI helpers
//! - Fixtures: reusable project file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
