//! Core data types for buildplan.
//!
//! This crate defines the declarative side of a build: the `Buildplan.toml`
//! settings tree, plugin identifiers, SDK levels and build targets, Java
//! compatibility levels, dependency declarations, values supplied by the
//! cross-platform framework, local properties, and global configuration.
//!
//! Nothing here resolves or validates cross-project rules; that happens in
//! `buildplan-resolver`.

/// Name of the settings file at the build root.
pub const SETTINGS_FILE: &str = "Buildplan.toml";

/// Name of the secrets file loaded for `${env:VAR}` interpolation.
pub const ENV_FILE: &str = ".buildplan.env";

/// Name of the machine-local properties file written by the framework tooling.
pub const LOCAL_PROPERTIES_FILE: &str = "local.properties";

pub mod build_root;
pub mod compatibility;
pub mod config;
pub mod dependency;
pub mod framework;
pub mod plugin;
pub mod properties;
pub mod repository;
pub mod settings;
