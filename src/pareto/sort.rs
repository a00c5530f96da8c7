//! Non-dominated sorting under any [`DominanceRule`].
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use crate::design::Design;
use crate::dominance::{Dominance, DominanceRule};
use crate::error::Result;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the design
/// at the same index. Rank 0 is the Pareto front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontSort {
    /// Pareto rank for each design (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Assigns every design a Pareto rank under `rule`.
///
/// Designs dominated by nobody form front 0; removing them, the designs
/// dominated by nobody else form front 1, and so on. When a dominance
/// cycle leaves no undominated design, the front is made of the designs
/// with the fewest remaining dominators instead. Front 0 always equals the
/// output of [`pareto_front_indices`](super::pareto_front_indices), and
/// every design lands in exactly one front.
///
/// # Complexity
///
/// O(n²) rule evaluations, plus O(n) bookkeeping per front.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, Sense};
/// use u_mdr::dominance::DominanceRule;
/// use u_mdr::pareto::sort_fronts;
///
/// let designs = vec![
///     Design::from_values(0, &[1.0, 5.0], Sense::Minimize),
///     Design::from_values(1, &[3.0, 3.0], Sense::Minimize),
///     Design::from_values(2, &[5.0, 1.0], Sense::Minimize),
///     Design::from_values(3, &[4.0, 4.0], Sense::Minimize), // dominated by 1
/// ];
///
/// let sorted = sort_fronts(&designs, &DominanceRule::pair(0, 1)).unwrap();
/// assert_eq!(sorted.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(sorted.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn sort_fronts(designs: &[Design], rule: &DominanceRule) -> Result<FrontSort> {
    let n = designs.len();
    match n {
        0 => return Ok(FrontSort::default()),
        1 => {
            return Ok(FrontSort {
                ranks: vec![0],
                fronts: vec![vec![0]],
            })
        }
        _ => {}
    }

    let mut domination_count = vec![0usize; n];
    let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match rule.compare(&designs[i], &designs[j])? {
                Dominance::Left => {
                    dominates[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominates[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    // Layered dominance is not transitive and may form cycles, leaving
    // no design with a zero count. Each front therefore takes the minimum
    // remaining count, as the filter does, so no design is ever dropped.
    let mut ranks = vec![0usize; n];
    let mut placed = vec![false; n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut remaining = n;

    while remaining > 0 {
        let Some(min_count) = (0..n)
            .filter(|&i| !placed[i])
            .map(|i| domination_count[i])
            .min()
        else {
            break;
        };
        let front: Vec<usize> = (0..n)
            .filter(|&i| !placed[i] && domination_count[i] == min_count)
            .collect();

        for &i in &front {
            placed[i] = true;
            ranks[i] = fronts.len();
        }
        for &i in &front {
            for &j in &dominates[i] {
                if !placed[j] {
                    domination_count[j] -= 1;
                }
            }
        }

        remaining -= front.len();
        fronts.push(front);
    }

    Ok(FrontSort { ranks, fronts })
}
