//! File System Implementations

mod walker;
mod writer;

pub use walker::LocalProjectSource;
pub use writer::atomic_write;
