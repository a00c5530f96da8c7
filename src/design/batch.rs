//! Batch-level consistency checks.
//!
//! A batch is consistent when every design carries the same metric ids,
//! in the same number, with the same [`Sense`](super::Sense) per id.
//! [`validate_batch`] measures against the first design; [`screen_batch`]
//! measures against the shape most designs share.

use std::collections::HashMap;

use super::metric::{PerfMetric, Sense};
use super::types::Design;
use crate::error::{MdrError, Result};

/// A design removed by [`screen_batch`] and the reason why.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// The offending design.
    pub design: Design,
    /// First inconsistency found.
    pub error: MdrError,
}

/// Checks that `design` has the same metric shape as `reference`.
pub fn check_against(reference: &Design, design: &Design) -> Result<()> {
    if design.metric_count() != reference.metric_count() {
        return Err(MdrError::MetricCountMismatch {
            design: design.id(),
            expected: reference.metric_count(),
            found: design.metric_count(),
        });
    }
    for expected in reference.metrics() {
        let found = design.require_metric(expected.metric_id())?;
        ensure_same_sense(reference, expected, design, found)?;
    }
    Ok(())
}

/// Validates a whole batch against its first design.
///
/// Empty and single-element batches are trivially consistent.
pub fn validate_batch(designs: &[Design]) -> Result<()> {
    let Some((reference, rest)) = designs.split_first() else {
        return Ok(());
    };
    rest.iter().try_for_each(|d| check_against(reference, d))
}

/// Splits a batch into designs consistent with the majority shape and
/// the rejected remainder, both in input order.
///
/// The majority shape is the (metric id, sense) set carried by the most
/// designs; on a tie the shape seen first wins. A single malformed design
/// therefore never decides the shape, wherever it sits in the batch.
pub fn screen_batch(designs: Vec<Design>) -> (Vec<Design>, Vec<Rejected>) {
    screen_batch_with(designs, |_| Ok(()))
}

/// [`screen_batch`] with an extra per-design requirement.
///
/// Designs failing `require` are rejected with its error before the
/// majority shape is chosen, so they cannot influence it.
pub fn screen_batch_with<F>(designs: Vec<Design>, require: F) -> (Vec<Design>, Vec<Rejected>)
where
    F: Fn(&Design) -> Result<()>,
{
    let verdicts: Vec<Result<()>> = designs.iter().map(&require).collect();
    let reference = majority_shape(
        designs
            .iter()
            .zip(&verdicts)
            .filter(|(_, v)| v.is_ok())
            .map(|(d, _)| d),
    );

    let mut kept = Vec::new();
    let mut rejected = Vec::new();
    for (design, verdict) in designs.into_iter().zip(verdicts) {
        let verdict = verdict.and_then(|()| match &reference {
            Some(reference) => check_against(reference, &design),
            None => Ok(()),
        });
        match verdict {
            Ok(()) => kept.push(design),
            Err(error) => rejected.push(Rejected { design, error }),
        }
    }
    (kept, rejected)
}

fn shape(design: &Design) -> Vec<(usize, Sense)> {
    let mut shape: Vec<(usize, Sense)> = design
        .metrics()
        .iter()
        .map(|m| (m.metric_id(), m.sense()))
        .collect();
    shape.sort_unstable_by_key(|&(id, _)| id);
    shape
}

/// Returns a clone of the first design carrying the most common shape.
fn majority_shape<'a>(designs: impl Iterator<Item = &'a Design>) -> Option<Design> {
    // shape -> (count, first position, design)
    let mut tally: HashMap<Vec<(usize, Sense)>, (usize, usize, &Design)> = HashMap::new();
    for (pos, design) in designs.enumerate() {
        tally.entry(shape(design)).or_insert((0, pos, design)).0 += 1;
    }
    tally
        .into_values()
        .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        .map(|(_, _, design)| design.clone())
}

pub(crate) fn ensure_same_sense(
    a: &Design,
    ma: &PerfMetric,
    b: &Design,
    mb: &PerfMetric,
) -> Result<()> {
    if ma.sense() == mb.sense() {
        return Ok(());
    }
    let (minimized_in, maximized_in) = if ma.is_minimized() {
        (a.id(), b.id())
    } else {
        (b.id(), a.id())
    };
    Err(MdrError::InconsistentSense {
        metric: ma.metric_id(),
        minimized_in,
        maximized_in,
    })
}
