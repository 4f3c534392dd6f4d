//! Backends module - File operations
//!
//! Provides:
//! - scan: Streaming fuzzy search over a directory tree with walkdir

pub mod scan;
