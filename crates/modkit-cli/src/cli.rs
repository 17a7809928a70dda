//! CLI argument definitions for modkit.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modkit",
    version,
    about = "Inspect and validate a host application's installed mod set",
    long_about = "Modkit discovers the mods installed under a host's mods directory, \
                  validates their declared requirements and conflicts, and computes \
                  the dependency-first load order the host will use."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Mods directory to scan (defaults to `mods-dir` from Modkit.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the mod set and print its load order
    Check,

    /// List the discovered mods
    List {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the requirement tree
    Tree {
        /// Maximum depth
        #[arg(long)]
        depth: Option<u32>,
        /// Show the requirement chain leading to a mod
        #[arg(long)]
        why: Option<String>,
        /// Show what requires a mod instead of what it requires
        #[arg(long)]
        dependents: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
