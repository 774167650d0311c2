//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Options for the interactive session.
#[derive(Debug, Default, Args)]
pub struct ShellArgs {
    /// Stop at the first failed command instead of reporting it and continuing
    #[arg(long)]
    pub strict: bool,

    /// Load flights from this JSON file before the first prompt
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
