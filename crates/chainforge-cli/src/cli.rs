//! CLI type definitions
//!
//! Paths left off the command line are prompted for interactively.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chainforge")]
#[command(about = "ChainForge - Greedy Addition Chain Builder", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file, used when it exists
    #[arg(short, long, global = true, default_value = "chainforge.toml")]
    pub config: PathBuf,

    /// Suppress the banner and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an addition chain for a target file
    Solve {
        /// Target file to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Chain file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Residual paths the pathfinder may enqueue per estimate
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Stop after this many seconds
        #[arg(long)]
        time_limit: Option<u64>,

        /// Stop after this many actions
        #[arg(long)]
        step_limit: Option<u64>,
    },

    /// Check a chain file against a target file
    Verify {
        /// Target file to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Chain file to replay
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a random target file
    Generate {
        /// Target file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of targets
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Value every target is built on
        #[arg(long)]
        base: Option<u64>,

        /// RNG seed for reproducible files
        #[arg(long)]
        seed: Option<u64>,
    },
}
