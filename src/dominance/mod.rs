//! Dominance evaluation.
//!
//! Pure comparison functions of `(a, b, pair or layers)`. Nothing here
//! reads or writes state on the designs themselves.
//!
//! # Definitions
//!
//! - [`compare_pair`]: 2D dominance. A side wins when it is strictly
//!   better on both metrics of a [`DomRel`](crate::design::DomRel).
//! - [`compare_multi`]: multi-pair dominance over a metric order consumed
//!   two ids at a time, combined per [`MoSemantics`].
//! - [`compare_layered`]: Multiple Dominance Relations. Layers are tried
//!   in priority order and the first decisive layer wins.
//!
//! [`DominanceRule`] selects one of these for the Pareto filter.
//!
//! All three are strict partial orders: irreflexive, antisymmetric, and
//! possibly leaving two designs mutually non-dominated.

mod layered;
mod multi;
mod pair;
mod rule;

pub use layered::{compare_layered, dominates_layered};
pub use multi::{compare_multi, default_order, dominates_multi, stage_pairs, MoSemantics};
pub use pair::{compare_pair, dominates_pair, Dominance};
pub use rule::DominanceRule;
