//! File formats for ChainForge.
//!
//! This crate reads and writes the plain-text files the tools exchange:
//! - Target files: a count line followed by one target per line
//! - Chain files: an action count followed by `addend1 addend2` lines
//! - Verification of a chain file against a target file
//! - Random target file generation
//!
//! # Example
//!
//! ```
//! use chainforge_core::Action;
//! use chainforge_io::{format_chain, parse_chain, parse_targets, verify};
//!
//! let targets = parse_targets("1\n2\n").unwrap();
//! let text = format_chain(&[Action::new(1, 1)]);
//! assert_eq!(text, "1\n1 1\n");
//!
//! let chain = parse_chain(&text).unwrap();
//! assert!(verify(&targets, &chain).is_ok());
//! ```

pub mod generate;
pub mod input;
pub mod output;
pub mod verify;

pub use generate::InputGenerator;
pub use input::{parse_targets, read_targets};
pub use output::{format_chain, parse_chain, read_chain, write_chain, write_chain_file, ChainFile};
pub use verify::{verify, verify_actions, VerifySummary};
