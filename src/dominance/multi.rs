//! Multi-pair (MO) dominance over a metric order.

use super::pair::{compare_pair, Dominance};
use crate::design::{Design, DomRel};
use crate::error::{MdrError, Result};

/// How per-pair results combine in multi-pair dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoSemantics {
    /// One side dominates only if it dominates on every pair.
    #[default]
    AllPairs,
    /// Only the first pair decides; later pairs are validated but ignored.
    ///
    /// Reproduces results of the historical tool, whose running
    /// accumulator never combined later pairs.
    FirstPair,
}

/// Splits a metric order into consecutive pairs.
///
/// `[a, b, c, d]` becomes `(a, b), (c, d)`. An odd trailing id is paired
/// with its predecessor, so `[a, b, c]` becomes `(a, b), (b, c)`.
///
/// # Errors
///
/// [`MdrError::OrderTooShort`] if `order` has fewer than two ids.
///
/// ```
/// use u_mdr::design::DomRel;
/// use u_mdr::dominance::stage_pairs;
///
/// assert_eq!(
///     stage_pairs(&[0, 2, 1]).unwrap(),
///     vec![DomRel::new(0, 2), DomRel::new(2, 1)]
/// );
/// ```
pub fn stage_pairs(order: &[usize]) -> Result<Vec<DomRel>> {
    let n = order.len();
    if n < 2 {
        return Err(MdrError::OrderTooShort(n));
    }

    let mut pairs: Vec<DomRel> = order
        .chunks_exact(2)
        .map(|c| DomRel::new(c[0], c[1]))
        .collect();
    if n % 2 == 1 {
        pairs.push(DomRel::new(order[n - 2], order[n - 1]));
    }
    Ok(pairs)
}

/// Default metric order: every metric id of `design` except the lowest,
/// ascending.
pub fn default_order(design: &Design) -> Vec<usize> {
    let mut ids: Vec<usize> = design.metric_ids().collect();
    ids.sort_unstable();
    ids.dedup();
    ids.into_iter().skip(1).collect()
}

/// Compares `a` and `b` over every consecutive pair of `order`.
///
/// An empty `order` falls back to [`default_order`] of `a`. All pairs
/// are evaluated, so a malformed metric anywhere in the order is
/// reported even when the first pair already decides.
pub fn compare_multi(
    a: &Design,
    b: &Design,
    order: &[usize],
    semantics: MoSemantics,
) -> Result<Dominance> {
    let fallback;
    let order = if order.is_empty() {
        fallback = default_order(a);
        &fallback[..]
    } else {
        order
    };

    let outcomes = stage_pairs(order)?
        .into_iter()
        .map(|rel| compare_pair(a, b, rel))
        .collect::<Result<Vec<_>>>()?;

    Ok(match semantics {
        MoSemantics::FirstPair => outcomes[0],
        MoSemantics::AllPairs => {
            if outcomes.iter().all(|&o| o == Dominance::Left) {
                Dominance::Left
            } else if outcomes.iter().all(|&o| o == Dominance::Right) {
                Dominance::Right
            } else {
                Dominance::Neither
            }
        }
    })
}

/// Returns `true` if `a` dominates `b` over `order`.
pub fn dominates_multi(
    a: &Design,
    b: &Design,
    order: &[usize],
    semantics: MoSemantics,
) -> Result<bool> {
    Ok(compare_multi(a, b, order, semantics)? == Dominance::Left)
}
