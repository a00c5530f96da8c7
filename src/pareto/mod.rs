//! Pareto front extraction and ranking.
//!
//! # Algorithms
//!
//! - [`pareto_front`]: domination-count filter, the only filter this crate
//!   offers. Order-independent and valid for any strict partial order.
//! - [`sort_fronts`]: non-dominated sorting into successive fronts
//!   (Deb et al., 2002).
//! - [`update_ranks`] / [`RankedSet`]: incremental per-layer rank counters,
//!   a secondary selection signal that never removes designs.
//!
//! Every function takes the dominance definition as a
//! [`DominanceRule`](crate::dominance::DominanceRule) and returns a new
//! collection; inputs are never filtered in place.

mod filter;
mod rank;
mod sort;

pub use filter::{domination_counts, pareto_front, pareto_front_indices, pareto_front_with};
pub use rank::{update_ranks, RankedSet};
pub use sort::{sort_fronts, FrontSort};
