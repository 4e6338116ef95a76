//! Shared utilities for buildplan.
//!
//! Cross-cutting concerns used by the other buildplan crates: the error
//! type, filesystem and path helpers, hashing, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
