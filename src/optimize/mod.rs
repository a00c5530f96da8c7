//! Multi-stage optimization driver.
//!
//! Approximates full multi-objective Pareto dominance with a sequence of
//! cheap 2D filters: the metric order is consumed two ids at a time and
//! each stage keeps the front of the previous stage's survivors.
//!
//! # Key Types
//!
//! - [`OptimizeConfig`]: parallelism and invalid-design handling
//! - [`OptimizeRunner`]: executes the stages
//! - [`OptimizeResult`]: final front plus every intermediate front
//!
//! Stages are strictly sequential; only the pairwise pass inside a stage
//! may run in parallel.

mod config;
mod runner;

pub use config::{InvalidDesignPolicy, OptimizeConfig};
pub use runner::{OptimizeResult, OptimizeRunner, StageRecord};
