//! CLI argument definitions for buildplan.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "buildplan",
    version,
    about = "Resolve declarative Android build settings into a build plan",
    long_about = "buildplan reads Buildplan.toml (plugins, SDK levels, Java compatibility, \
                  dependencies, output directories) and emits a deterministic build plan \
                  for the external toolchain."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a Buildplan.toml in the current directory
    Init {
        /// Application name used for the namespace and application id
        #[arg(short, long, default_value = "app")]
        name: String,
    },

    /// Resolve the settings and write the build plan
    Resolve {
        /// Print the plan to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Validate the settings without writing a plan
    Check,

    /// Remove the resolved root output directory
    Clean,

    /// Show values loaded from .buildplan.env
    Env {
        /// Show values instead of masking them
        #[arg(long)]
        reveal: bool,
    },
}

/// Parse CLI arguments from the process environment.
pub fn parse() -> Cli {
    Cli::parse()
}
