//! Two-metric (2D) dominance.

use crate::design::{ensure_same_sense, Design, DomRel, PerfMetric};
use crate::error::Result;

/// Outcome of comparing two designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

impl Dominance {
    /// The same outcome seen from the other side.
    pub fn reversed(self) -> Self {
        match self {
            Dominance::Left => Dominance::Right,
            Dominance::Right => Dominance::Left,
            Dominance::Neither => Dominance::Neither,
        }
    }
}

/// Compares `a` and `b` on the two metrics of `rel`.
///
/// A side dominates when it is strictly better on both metrics, in each
/// metric's own direction. Ties on either metric never dominate.
///
/// # Errors
///
/// - [`MdrError::MissingMetric`](crate::MdrError::MissingMetric) if either
///   design lacks one of the two metrics
/// - [`MdrError::InconsistentSense`](crate::MdrError::InconsistentSense) if
///   the designs disagree on a metric's direction
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, DomRel, Sense};
/// use u_mdr::dominance::{compare_pair, Dominance};
///
/// let a = Design::from_values(0, &[1.0, 9.0, 1.0], Sense::Minimize);
/// let b = Design::from_values(1, &[2.0, 0.0, 2.0], Sense::Minimize);
///
/// assert_eq!(compare_pair(&a, &b, DomRel::new(0, 2)).unwrap(), Dominance::Left);
/// assert_eq!(compare_pair(&a, &b, DomRel::new(0, 1)).unwrap(), Dominance::Neither);
/// ```
pub fn compare_pair(a: &Design, b: &Design, rel: DomRel) -> Result<Dominance> {
    let (a1, b1) = fetch(a, b, rel.first())?;
    let (a2, b2) = fetch(a, b, rel.second())?;

    let (s1, s2) = (a1.sense(), a2.sense());
    let a_better = s1.is_better(a1.value(), b1.value()) && s2.is_better(a2.value(), b2.value());
    let b_better = s1.is_better(b1.value(), a1.value()) && s2.is_better(b2.value(), a2.value());

    Ok(match (a_better, b_better) {
        (true, _) => Dominance::Left,
        (_, true) => Dominance::Right,
        _ => Dominance::Neither,
    })
}

/// Returns `true` if `a` dominates `b` on the pair `rel`.
///
/// See [`compare_pair`] for the rules and errors.
pub fn dominates_pair(a: &Design, b: &Design, rel: DomRel) -> Result<bool> {
    Ok(compare_pair(a, b, rel)? == Dominance::Left)
}

/// Fetches one metric from both designs and checks their directions agree.
fn fetch<'a>(
    a: &'a Design,
    b: &'a Design,
    metric: usize,
) -> Result<(&'a PerfMetric, &'a PerfMetric)> {
    let ma = a.require_metric(metric)?;
    let mb = b.require_metric(metric)?;
    ensure_same_sense(a, ma, b, mb)?;
    Ok((ma, mb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{PerfMetric, Sense};
    use crate::MdrError;

    fn min(id: usize, values: &[f64]) -> Design {
        Design::from_values(id, values, Sense::Minimize)
    }

    #[test]
    fn test_strict_on_both() {
        let a = min(0, &[1.0, 1.0]);
        let b = min(1, &[5.0, 5.0]);
        let rel = DomRel::new(0, 1);
        assert_eq!(compare_pair(&a, &b, rel).unwrap(), Dominance::Left);
        assert_eq!(compare_pair(&b, &a, rel).unwrap(), Dominance::Right);
        assert!(dominates_pair(&a, &b, rel).unwrap());
        assert!(!dominates_pair(&b, &a, rel).unwrap());
    }

    #[test]
    fn test_tie_on_one_metric_is_not_dominance() {
        let a = min(0, &[1.0, 3.0]);
        let b = min(1, &[2.0, 3.0]);
        let rel = DomRel::new(0, 1);
        assert_eq!(compare_pair(&a, &b, rel).unwrap(), Dominance::Neither);
    }

    #[test]
    fn test_equal_designs() {
        let a = min(0, &[2.0, 2.0]);
        let b = min(1, &[2.0, 2.0]);
        assert_eq!(
            compare_pair(&a, &b, DomRel::new(0, 1)).unwrap(),
            Dominance::Neither
        );
    }

    #[test]
    fn test_self_never_dominates() {
        let a = min(0, &[2.0, 7.0, -1.0]);
        for first in 0..3 {
            for second in 0..3 {
                assert!(!dominates_pair(&a, &a, DomRel::new(first, second)).unwrap());
            }
        }
    }

    #[test]
    fn test_trade_off() {
        let a = min(0, &[1.0, 4.0]);
        let b = min(1, &[4.0, 1.0]);
        assert_eq!(
            compare_pair(&a, &b, DomRel::new(0, 1)).unwrap(),
            Dominance::Neither
        );
    }

    #[test]
    fn test_mixed_senses() {
        // metric 0 minimized, metric 1 maximized
        let a = Design::new(
            0,
            vec![PerfMetric::minimize(0, 1.0), PerfMetric::maximize(1, 10.0)],
        );
        let b = Design::new(
            1,
            vec![PerfMetric::minimize(0, 2.0), PerfMetric::maximize(1, 5.0)],
        );
        assert!(dominates_pair(&a, &b, DomRel::new(0, 1)).unwrap());
        assert!(!dominates_pair(&b, &a, DomRel::new(0, 1)).unwrap());
    }

    #[test]
    fn test_all_maximized() {
        let a = Design::from_values(0, &[3.0, 3.0], Sense::Maximize);
        let b = Design::from_values(1, &[1.0, 1.0], Sense::Maximize);
        assert!(dominates_pair(&a, &b, DomRel::new(0, 1)).unwrap());
    }

    #[test]
    fn test_missing_metric() {
        let a = min(0, &[1.0, 1.0]);
        let b = min(1, &[2.0]);
        assert_eq!(
            compare_pair(&a, &b, DomRel::new(0, 1)),
            Err(MdrError::MissingMetric {
                design: 1,
                metric: 1
            })
        );
    }

    #[test]
    fn test_inconsistent_sense() {
        let a = min(0, &[1.0, 1.0]);
        let b = Design::new(
            1,
            vec![PerfMetric::maximize(0, 2.0), PerfMetric::minimize(1, 2.0)],
        );
        assert_eq!(
            compare_pair(&a, &b, DomRel::new(0, 1)),
            Err(MdrError::InconsistentSense {
                metric: 0,
                minimized_in: 0,
                maximized_in: 1
            })
        );
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Dominance::Left.reversed(), Dominance::Right);
        assert_eq!(Dominance::Right.reversed(), Dominance::Left);
        assert_eq!(Dominance::Neither.reversed(), Dominance::Neither);
    }
}
