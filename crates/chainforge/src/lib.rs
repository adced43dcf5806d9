//! ChainForge - A Greedy Addition Chain Builder in Rust
//!
//! Reads a set of target numbers, builds an addition chain from `1` that
//! reaches all of them, and writes it out in a form the verifier can replay.
//!
//! # Example
//!
//! ```rust
//! use chainforge::prelude::*;
//!
//! let result = ChainBuilder::new().build([2, 3]).unwrap();
//! assert_eq!(format_chain(result.chain.actions()), "2\n1 1\n2 1\n");
//! ```

// Core types
pub use chainforge_core::{Action, AdditionChain, ChainForgeError, Result, SEED_VALUE};

// Configuration
pub use chainforge_config::{
    ChainConfig, ConfigError, GeneratorConfig, PathfinderConfig, TerminationConfig,
};

// Builder
pub use chainforge_solver::{
    BuildResult, ChainBuilder, ChainStats, CostEstimator, ResidualPathfinder,
};
pub use chainforge_solver::termination;

// File formats
pub use chainforge_io::{
    format_chain, parse_chain, parse_targets, read_chain, read_targets, verify, verify_actions,
    write_chain_file, ChainFile, InputGenerator, VerifySummary,
};

#[cfg(feature = "console")]
pub use chainforge_console::init as init_console;

mod solver;
pub use solver::{generate_file, solve_file, verify_files};

pub mod prelude {
    pub use super::{Action, AdditionChain, ChainForgeError, Result};
    pub use super::{BuildResult, ChainBuilder, ChainConfig};
    pub use super::{format_chain, read_targets, verify};
    pub use super::{generate_file, solve_file, verify_files};
}
