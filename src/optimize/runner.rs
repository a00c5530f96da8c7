//! Staged Pareto reduction.
//!
//! [`OptimizeRunner`] narrows a design collection stage by stage:
//! each stage filters the previous stage's front under one
//! [`DominanceRule`], and every intermediate front is kept for audit.
//!
//! # Algorithm
//!
//! 1. Check the batch (fail or skip per [`InvalidDesignPolicy`])
//! 2. Split the metric order into pairs `(o[0], o[1]), (o[2], o[3]), …`;
//!    an odd order adds a last stage on `(o[n-2], o[n-1])`
//! 3. For each pair, keep the domination-count front of the working set
//! 4. The last front is the result
//!
//! A design surviving every stage is non-dominated within the sequential
//! narrowing. It is not guaranteed to be non-dominated in the joint space
//! of all metrics; stages use only cheap 2D comparisons.

use std::iter;

use tracing::{debug, info, warn};

use super::config::{InvalidDesignPolicy, OptimizeConfig};
use crate::design::{screen_batch_with, validate_batch, Design, DomRel, Rejected};
use crate::dominance::{stage_pairs, DominanceRule};
use crate::error::{MdrError, Result};
use crate::pareto::pareto_front_with;

/// One filtering stage of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct StageRecord {
    /// Zero-based stage position.
    pub index: usize,
    /// Dominance definition applied in this stage.
    pub rule: DominanceRule,
    /// Size of the working set entering the stage.
    pub input_len: usize,
    /// Designs kept by the stage.
    pub front: Vec<Design>,
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult {
    /// Final front (same as the last stage's front, or the input when
    /// no stage ran).
    pub front: Vec<Design>,

    /// Designs entering the first stage, after screening.
    pub input: Vec<Design>,

    /// Stages in execution order.
    pub stages: Vec<StageRecord>,

    /// Designs dropped under [`InvalidDesignPolicy::Skip`].
    pub rejected: Vec<Rejected>,
}

impl OptimizeResult {
    /// The chain of collections: the unfiltered input first, then each
    /// stage's front. The last entry equals [`front`](Self::front).
    pub fn fronts(&self) -> Vec<&[Design]> {
        iter::once(self.input.as_slice())
            .chain(self.stages.iter().map(|s| s.front.as_slice()))
            .collect()
    }

    /// Ids of the final front, in order.
    pub fn front_ids(&self) -> Vec<usize> {
        self.front.iter().map(Design::id).collect()
    }

    /// Number of stages executed.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Executes staged Pareto reduction.
///
/// # Usage
///
/// ```
/// use u_mdr::design::{Design, Sense};
/// use u_mdr::optimize::{OptimizeConfig, OptimizeRunner};
///
/// let designs = vec![
///     Design::from_values(0, &[1.0, 4.0, 2.0, 2.0], Sense::Minimize),
///     Design::from_values(1, &[4.0, 1.0, 1.0, 1.0], Sense::Minimize),
///     Design::from_values(2, &[5.0, 5.0, 0.0, 0.0], Sense::Minimize),
/// ];
///
/// let result = OptimizeRunner::run(&designs, &[0, 1, 2, 3], &OptimizeConfig::default()).unwrap();
/// assert_eq!(result.stage_count(), 2);
/// assert_eq!(result.front_ids(), vec![1]);
/// ```
pub struct OptimizeRunner;

impl OptimizeRunner {
    /// Runs pairwise stages over `metric_order`.
    ///
    /// # Errors
    ///
    /// - [`MdrError::DimensionMismatch`] if `metric_order.len()` differs
    ///   from the per-design metric count
    /// - [`MdrError::OrderTooShort`] for a one-metric batch
    /// - [`MdrError::MissingMetric`] if the order names an id the designs
    ///   do not carry
    /// - batch and comparison errors under [`InvalidDesignPolicy::Fail`]
    ///
    /// Under [`InvalidDesignPolicy::Skip`] the order itself is the
    /// reference: designs whose metric count or ids do not match it are
    /// rejected, whatever their position in the batch.
    ///
    /// An empty collection yields an empty result with no stages.
    pub fn run(
        designs: &[Design],
        metric_order: &[usize],
        config: &OptimizeConfig,
    ) -> Result<OptimizeResult> {
        let (input, rejected) = prepare(designs, config, |d| fits_order(d, metric_order))?;
        let Some(reference) = input.first() else {
            return Ok(empty_result(rejected));
        };

        if metric_order.len() != reference.metric_count() {
            return Err(MdrError::DimensionMismatch {
                order_len: metric_order.len(),
                metric_count: reference.metric_count(),
            });
        }
        for &metric in metric_order {
            reference.require_metric(metric)?;
        }

        let rules = stage_pairs(metric_order)?
            .into_iter()
            .map(DominanceRule::Pair)
            .collect();
        run_stages(input, rejected, rules, config)
    }

    /// Like [`run`](Self::run), then replaces `designs` with the final
    /// front.
    ///
    /// On error `designs` is left untouched.
    pub fn run_in_place(
        designs: &mut Vec<Design>,
        metric_order: &[usize],
        config: &OptimizeConfig,
    ) -> Result<OptimizeResult> {
        let result = Self::run(designs, metric_order, config)?;
        designs.clone_from(&result.front);
        Ok(result)
    }

    /// Runs a single stage under layered (MDR) dominance.
    ///
    /// Every metric id named by `layers` must be present in the designs.
    pub fn run_layered(
        designs: &[Design],
        layers: &[DomRel],
        config: &OptimizeConfig,
    ) -> Result<OptimizeResult> {
        let (input, rejected) = prepare(designs, config, |d| fits_layers(d, layers))?;
        let Some(reference) = input.first() else {
            return Ok(empty_result(rejected));
        };
        for rel in layers {
            for metric in rel.ids() {
                reference.require_metric(metric)?;
            }
        }

        let rules = vec![DominanceRule::Layered(layers.to_vec())];
        run_stages(input, rejected, rules, config)
    }

    /// Runs one stage per rule, in order.
    ///
    /// The general form behind [`run`](Self::run) and
    /// [`run_layered`](Self::run_layered); no metric-order checks are made.
    pub fn run_rules(
        designs: &[Design],
        rules: Vec<DominanceRule>,
        config: &OptimizeConfig,
    ) -> Result<OptimizeResult> {
        let (input, rejected) = prepare(designs, config, |_| Ok(()))?;
        if input.is_empty() {
            return Ok(empty_result(rejected));
        }
        run_stages(input, rejected, rules, config)
    }
}

/// Applies the invalid-design policy and returns the working input.
///
/// `require` is only consulted under [`InvalidDesignPolicy::Skip`]; the
/// callers check the surviving reference design themselves.
fn prepare<F>(
    designs: &[Design],
    config: &OptimizeConfig,
    require: F,
) -> Result<(Vec<Design>, Vec<Rejected>)>
where
    F: Fn(&Design) -> Result<()>,
{
    match config.invalid_policy {
        InvalidDesignPolicy::Fail => {
            validate_batch(designs)?;
            Ok((designs.to_vec(), Vec::new()))
        }
        InvalidDesignPolicy::Skip => {
            let (kept, rejected) = screen_batch_with(designs.to_vec(), require);
            for r in &rejected {
                warn!(design = r.design.id(), error = %r.error, "skipping inconsistent design");
            }
            Ok((kept, rejected))
        }
    }
}

fn fits_order(design: &Design, order: &[usize]) -> Result<()> {
    if design.metric_count() != order.len() {
        return Err(MdrError::MetricCountMismatch {
            design: design.id(),
            expected: order.len(),
            found: design.metric_count(),
        });
    }
    order
        .iter()
        .try_for_each(|&metric| design.require_metric(metric).map(|_| ()))
}

fn fits_layers(design: &Design, layers: &[DomRel]) -> Result<()> {
    layers
        .iter()
        .flat_map(|rel| rel.ids())
        .try_for_each(|metric| design.require_metric(metric).map(|_| ()))
}

fn empty_result(rejected: Vec<Rejected>) -> OptimizeResult {
    OptimizeResult {
        front: Vec::new(),
        input: Vec::new(),
        stages: Vec::new(),
        rejected,
    }
}

fn run_stages(
    input: Vec<Design>,
    rejected: Vec<Rejected>,
    rules: Vec<DominanceRule>,
    config: &OptimizeConfig,
) -> Result<OptimizeResult> {
    let mut working = input.clone();
    let mut stages = Vec::with_capacity(rules.len());

    for (index, rule) in rules.into_iter().enumerate() {
        let input_len = working.len();
        let front = pareto_front_with(&working, &rule, config.parallel)?;
        debug!(
            stage = index,
            rule = %rule,
            input = input_len,
            front = front.len(),
            "stage filtered"
        );
        working = front.clone();
        stages.push(StageRecord {
            index,
            rule,
            input_len,
            front,
        });
    }

    info!(
        designs = input.len(),
        stages = stages.len(),
        front = working.len(),
        rejected = rejected.len(),
        "optimization finished"
    );

    Ok(OptimizeResult {
        front: working,
        input,
        stages,
        rejected,
    })
}

// ============================================================================
// Tests
// ============================================================================
