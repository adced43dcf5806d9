//! ChainForge Solver Engine
//!
//! This crate provides the greedy addition chain builder:
//! - The action pool and frontier expansion
//! - Residual pathfinding and candidate pricing
//! - The build loop and its scope
//! - Termination conditions
//! - Build statistics

pub mod builder;
pub mod catalog;
pub mod estimator;
pub mod pathfinder;
pub mod scope;
pub mod stats;
pub mod termination;

pub use builder::{BuildResult, ChainBuilder};
pub use catalog::ActionPool;
pub use estimator::{CostEstimator, PricingSummary};
pub use pathfinder::{PathEstimate, ResidualPathfinder};
pub use scope::BuildScope;
pub use stats::ChainStats;
pub use termination::{OrTermination, StepCountTermination, Termination, TimeTermination};
