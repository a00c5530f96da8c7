//! Data model: metrics, designs and dominance relations.
//!
//! # Key Types
//!
//! - [`MetricRegistry`] / [`MetricId`]: name ↔ stable numeric id mapping
//! - [`PerfMetric`]: one value of a design, with its [`Sense`]
//! - [`Design`]: a candidate solution with identity id and rank counters
//! - [`DomRel`]: an ordered metric pair; one priority layer of comparison
//!
//! Designs never store which metric pair is being compared. Every
//! evaluation in [`crate::dominance`] takes the pair or layers as an
//! explicit argument.

mod batch;
mod metric;
mod types;

pub use batch::{check_against, screen_batch, screen_batch_with, validate_batch, Rejected};
pub(crate) use batch::ensure_same_sense;
pub use metric::{MetricId, MetricRegistry, PerfMetric, Sense};
pub use types::{Design, DomRel};
