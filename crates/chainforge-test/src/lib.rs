//! Shared test fixtures for ChainForge crates.
//!
//! This crate provides data and pure checks for testing. It does NOT depend on
//! `chainforge-solver` so the solver can use it as a dev-dependency.
//!
//! - [`targets`] - Fixed and seeded random target sets
//! - [`replay`] - Replays chains against the seed basis and checks them
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! chainforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use chainforge_test::replay::assert_valid_chain;
//! use chainforge_test::targets::seeded_targets;
//! ```

pub mod replay;
pub mod targets;

// Re-export commonly used items at crate root for convenience
pub use replay::{assert_valid_chain, replay_basis};
pub use targets::{seeded_targets, target_set};
