//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - command line definition
//! - `factory` - wires the local-disk project source into the analyze use case

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_analyze_use_case, resolve_config, ConcreteAnalyzeUseCase};
