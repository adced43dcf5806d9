//! ChainForge Core - Core types for addition chain construction
//!
//! This crate provides the fundamental types shared by every ChainForge crate:
//! - [`Action`] for a single addition step
//! - [`AdditionChain`] for the ordered result of a build
//! - [`ChainForgeError`] for every failure the tools report

pub mod action;
pub mod error;

pub use action::{Action, AdditionChain};
pub use error::{ChainForgeError, Result};

/// The value every basis starts from.
pub const SEED_VALUE: u64 = 1;
