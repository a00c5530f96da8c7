//! Domination-count Pareto filter.
//!
//! # Algorithm
//!
//! 1. For every unordered pair `(i, j)`, compare under the active rule
//! 2. Increment the counter of whichever design is dominated
//! 3. Keep the designs whose counter equals the global minimum
//!
//! The minimum is normally zero. No sort order is assumed, so the result
//! does not depend on input order (dominance is only a partial order and
//! no comparator sort is consistent with it in general).
//!
//! # Complexity
//!
//! O(n²) rule evaluations.

use crate::design::Design;
use crate::dominance::{Dominance, DominanceRule};
use crate::error::Result;

/// Counts, for every design, how many others dominate it under `rule`.
///
/// With `parallel` set (and the `parallel` feature enabled) each design's
/// count is computed independently on the rayon pool. Counts are
/// identical to the sequential pass; if the input is malformed, which of
/// several errors is reported may differ.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, Sense};
/// use u_mdr::dominance::DominanceRule;
/// use u_mdr::pareto::domination_counts;
///
/// let designs = vec![
///     Design::from_values(0, &[1.0, 1.0], Sense::Minimize),
///     Design::from_values(1, &[2.0, 2.0], Sense::Minimize),
///     Design::from_values(2, &[3.0, 3.0], Sense::Minimize),
/// ];
/// let counts = domination_counts(&designs, &DominanceRule::pair(0, 1), false).unwrap();
/// assert_eq!(counts, vec![0, 1, 2]);
/// ```
pub fn domination_counts(
    designs: &[Design],
    rule: &DominanceRule,
    parallel: bool,
) -> Result<Vec<usize>> {
    if designs.len() < 2 {
        return Ok(vec![0; designs.len()]);
    }
    count_dominations(designs, rule, parallel)
}

/// Indices of the non-dominated designs, in input order.
///
/// Collections of size 0 or 1 are returned whole without any evaluation.
pub fn pareto_front_indices(
    designs: &[Design],
    rule: &DominanceRule,
    parallel: bool,
) -> Result<Vec<usize>> {
    let counts = domination_counts(designs, rule, parallel)?;
    let Some(&min_count) = counts.iter().min() else {
        return Ok(Vec::new());
    };
    Ok(counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == min_count)
        .map(|(i, _)| i)
        .collect())
}

/// Returns a new collection holding the non-dominated designs of
/// `designs`, in input order.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, Sense};
/// use u_mdr::dominance::DominanceRule;
/// use u_mdr::pareto::pareto_front;
///
/// let designs = vec![
///     Design::from_values(0, &[1.0, 4.0], Sense::Minimize),
///     Design::from_values(1, &[5.0, 5.0], Sense::Minimize),
///     Design::from_values(2, &[4.0, 1.0], Sense::Minimize),
/// ];
/// let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
/// let ids: Vec<usize> = front.iter().map(|d| d.id()).collect();
/// assert_eq!(ids, vec![0, 2]);
/// ```
pub fn pareto_front(designs: &[Design], rule: &DominanceRule) -> Result<Vec<Design>> {
    pareto_front_with(designs, rule, false)
}

/// [`pareto_front`] with an explicit parallelism switch.
pub fn pareto_front_with(
    designs: &[Design],
    rule: &DominanceRule,
    parallel: bool,
) -> Result<Vec<Design>> {
    Ok(pareto_front_indices(designs, rule, parallel)?
        .into_iter()
        .map(|i| designs[i].clone())
        .collect())
}

#[cfg(feature = "parallel")]
fn count_dominations(
    designs: &[Design],
    rule: &DominanceRule,
    parallel: bool,
) -> Result<Vec<usize>> {
    if parallel {
        count_parallel(designs, rule)
    } else {
        count_sequential(designs, rule)
    }
}

#[cfg(not(feature = "parallel"))]
fn count_dominations(
    designs: &[Design],
    rule: &DominanceRule,
    _parallel: bool,
) -> Result<Vec<usize>> {
    count_sequential(designs, rule)
}

fn count_sequential(designs: &[Design], rule: &DominanceRule) -> Result<Vec<usize>> {
    let n = designs.len();
    let mut counts = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match rule.compare(&designs[i], &designs[j])? {
                Dominance::Left => counts[j] += 1,
                Dominance::Right => counts[i] += 1,
                Dominance::Neither => {}
            }
        }
    }

    Ok(counts)
}

/// Splits the unordered pairs by row across the rayon pool: row `i` covers
/// `j > i`, each worker folds into its own counts vector, and the vectors
/// are summed. Same n(n-1)/2 evaluations as the sequential pass.
#[cfg(feature = "parallel")]
fn count_parallel(designs: &[Design], rule: &DominanceRule) -> Result<Vec<usize>> {
    use rayon::prelude::*;

    let n = designs.len();
    (0..n)
        .into_par_iter()
        .try_fold(
            || vec![0usize; n],
            |mut counts, i| -> Result<Vec<usize>> {
                for j in (i + 1)..n {
                    match rule.compare(&designs[i], &designs[j])? {
                        Dominance::Left => counts[j] += 1,
                        Dominance::Right => counts[i] += 1,
                        Dominance::Neither => {}
                    }
                }
                Ok(counts)
            },
        )
        .try_reduce(
            || vec![0usize; n],
            |mut total, part| {
                for (t, p) in total.iter_mut().zip(part) {
                    *t += p;
                }
                Ok(total)
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{DomRel, PerfMetric, Sense};
    use crate::MdrError;

    fn min(id: usize, values: &[f64]) -> Design {
        Design::from_values(id, values, Sense::Minimize)
    }

    fn ids(designs: &[Design]) -> Vec<usize> {
        designs.iter().map(Design::id).collect()
    }

    #[test]
    fn test_mutually_non_dominated() {
        let designs = vec![
            min(0, &[1.0, 4.0]),
            min(1, &[2.0, 3.0]),
            min(2, &[3.0, 2.0]),
            min(3, &[4.0, 1.0]),
        ];
        let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
        assert_eq!(ids(&front), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_strict_domination() {
        let designs = vec![min(0, &[5.0, 5.0]), min(1, &[1.0, 1.0])];
        let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
        assert_eq!(ids(&front), vec![1]);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let mut designs = vec![
            min(0, &[1.0, 5.0]),
            min(1, &[3.0, 3.0]),
            min(2, &[5.0, 1.0]),
            min(3, &[4.0, 4.0]),
            min(4, &[6.0, 6.0]),
        ];
        let rule = DominanceRule::pair(0, 1);
        let forward = ids(&pareto_front(&designs, &rule).unwrap());
        designs.reverse();
        let mut backward = ids(&pareto_front(&designs, &rule).unwrap());
        backward.sort_unstable();
        assert_eq!(forward, vec![0, 1, 2]);
        assert_eq!(backward, forward);
    }

    #[test]
    fn test_trivial_collections() {
        let rule = DominanceRule::pair(0, 1);
        assert!(pareto_front(&[], &rule).unwrap().is_empty());

        // A lone design is returned even if it lacks the compared metrics.
        let lone = vec![min(9, &[1.0])];
        assert_eq!(ids(&pareto_front(&lone, &rule).unwrap()), vec![9]);
    }

    #[test]
    fn test_duplicates_survive_together() {
        let designs = vec![min(0, &[2.0, 2.0]), min(1, &[2.0, 2.0]), min(2, &[3.0, 3.0])];
        let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
        assert_eq!(ids(&front), vec![0, 1]);
    }

    #[test]
    fn test_counts() {
        let designs = vec![
            min(0, &[1.0, 5.0]),
            min(1, &[3.0, 3.0]),
            min(2, &[5.0, 1.0]),
            min(3, &[4.0, 4.0]),
            min(4, &[6.0, 6.0]),
        ];
        let counts = domination_counts(&designs, &DominanceRule::pair(0, 1), false).unwrap();
        assert_eq!(counts, vec![0, 0, 0, 1, 4]);
    }

    #[test]
    fn test_layered_rule() {
        // Layer 0 leaves every pair unresolved; layer 1 decides.
        let designs = vec![
            min(0, &[1.0, 1.0, 1.0, 1.0]),
            min(1, &[1.0, 1.0, 2.0, 2.0]),
            min(2, &[0.5, 3.0, 9.0, 9.0]),
        ];
        let rule = DominanceRule::layered(vec![DomRel::new(0, 1), DomRel::new(2, 3)]);
        assert_eq!(
            domination_counts(&designs, &rule, false).unwrap(),
            vec![0, 1, 2]
        );
        let front = pareto_front(&designs, &rule).unwrap();
        assert_eq!(ids(&front), vec![0]);

        // Under layer 0 alone nobody is dominated.
        let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
        assert_eq!(ids(&front), vec![0, 1, 2]);
    }

    #[test]
    fn test_maximized_metrics() {
        let designs = vec![
            Design::new(0, vec![PerfMetric::maximize(0, 1.0), PerfMetric::minimize(1, 1.0)]),
            Design::new(1, vec![PerfMetric::maximize(0, 2.0), PerfMetric::minimize(1, 0.5)]),
        ];
        let front = pareto_front(&designs, &DominanceRule::pair(0, 1)).unwrap();
        assert_eq!(ids(&front), vec![1]);
    }

    #[test]
    fn test_error_propagates() {
        let designs = vec![min(0, &[1.0, 1.0]), min(1, &[1.0])];
        assert_eq!(
            pareto_front(&designs, &DominanceRule::pair(0, 1)),
            Err(MdrError::MissingMetric {
                design: 1,
                metric: 1
            })
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let designs: Vec<Design> = (0..60)
            .map(|i| {
                let x = (i * 37 % 61) as f64;
                let y = (i * 17 % 53) as f64;
                min(i, &[x, y, (x - y).abs()])
            })
            .collect();
        for rule in [
            DominanceRule::pair(0, 1),
            DominanceRule::pair(1, 2),
            DominanceRule::layered(vec![DomRel::new(0, 1), DomRel::new(1, 2)]),
            DominanceRule::multi_pair(vec![0, 1, 2]),
        ] {
            let seq = domination_counts(&designs, &rule, false).unwrap();
            let par = domination_counts(&designs, &rule, true).unwrap();
            assert_eq!(seq, par, "rule {rule}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_counts_each_pair_once() {
        // 0 beats 1 on (0, 1); 1 beats 2 and 2 beats 0 on (2, 3).
        let designs = vec![
            min(0, &[1.0, 1.0, 3.0, 3.0]),
            min(1, &[2.0, 2.0, 1.0, 1.0]),
            min(2, &[0.0, 5.0, 2.0, 2.0]),
            min(3, &[9.0, 9.0, 9.0, 9.0]),
        ];
        let rule = DominanceRule::layered(vec![DomRel::new(0, 1), DomRel::new(2, 3)]);
        assert_eq!(domination_counts(&designs, &rule, true).unwrap(), vec![1, 1, 1, 3]);
        assert_eq!(domination_counts(&designs, &rule, false).unwrap(), vec![1, 1, 1, 3]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_propagates_errors() {
        let designs = vec![
            min(0, &[1.0, 2.0]),
            Design::new(1, vec![PerfMetric::minimize(0, 1.0)]),
            min(2, &[2.0, 1.0]),
        ];
        assert!(matches!(
            domination_counts(&designs, &DominanceRule::pair(0, 1), true),
            Err(MdrError::MissingMetric { design: 1, metric: 1 })
        ));
    }
}
