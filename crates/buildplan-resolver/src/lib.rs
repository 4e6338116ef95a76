//! Build configuration resolver: turns a loaded settings tree into a
//! deterministic [`plan::ResolvedBuildPlan`].
//!
//! Resolution is a single synchronous pass. Any violated ordering or
//! consistency rule aborts it; no partial plan is produced.

pub mod evaluation;
pub mod layout;
pub mod plan;
pub mod plugin_order;
pub mod resolver;
