//! Selection of the active dominance definition.

use std::fmt;

use super::layered::compare_layered;
use super::multi::{compare_multi, MoSemantics};
use super::pair::{compare_pair, Dominance};
use crate::design::{Design, DomRel};
use crate::error::Result;

/// The dominance definition used by a filtering pass.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, DomRel, Sense};
/// use u_mdr::dominance::DominanceRule;
///
/// let a = Design::from_values(0, &[1.0, 1.0], Sense::Minimize);
/// let b = Design::from_values(1, &[2.0, 2.0], Sense::Minimize);
///
/// let rule = DominanceRule::pair(0, 1);
/// assert!(rule.dominates(&a, &b).unwrap());
/// assert!(!rule.dominates(&b, &a).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DominanceRule {
    /// 2D dominance on one metric pair.
    Pair(DomRel),

    /// Dominance over consecutive pairs of a metric order.
    MultiPair {
        /// Metric ids, consumed two at a time. Empty means the default
        /// order of the left-hand design.
        order: Vec<usize>,
        /// How the per-pair results combine.
        semantics: MoSemantics,
    },

    /// Layered (MDR) dominance, highest priority first.
    Layered(Vec<DomRel>),
}

impl DominanceRule {
    /// 2D rule on metrics `first` and `second`.
    pub fn pair(first: usize, second: usize) -> Self {
        DominanceRule::Pair(DomRel::new(first, second))
    }

    /// Multi-pair rule with [`MoSemantics::AllPairs`].
    pub fn multi_pair(order: Vec<usize>) -> Self {
        DominanceRule::MultiPair {
            order,
            semantics: MoSemantics::AllPairs,
        }
    }

    /// Layered rule.
    pub fn layered(layers: Vec<DomRel>) -> Self {
        DominanceRule::Layered(layers)
    }

    /// Three-way comparison of `a` and `b` under this rule.
    pub fn compare(&self, a: &Design, b: &Design) -> Result<Dominance> {
        match self {
            DominanceRule::Pair(rel) => compare_pair(a, b, *rel),
            DominanceRule::MultiPair { order, semantics } => {
                compare_multi(a, b, order, *semantics)
            }
            DominanceRule::Layered(layers) => compare_layered(a, b, layers),
        }
    }

    /// Returns `true` if `a` dominates `b` under this rule.
    pub fn dominates(&self, a: &Design, b: &Design) -> Result<bool> {
        Ok(self.compare(a, b)? == Dominance::Left)
    }
}

impl fmt::Display for DominanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DominanceRule::Pair(rel) => write!(f, "pair {rel}"),
            DominanceRule::MultiPair { order, semantics } => {
                write!(f, "multi-pair {order:?} ({semantics:?})")
            }
            DominanceRule::Layered(layers) => {
                write!(f, "layered [")?;
                for (i, rel) in layers.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{rel}")?;
                }
                write!(f, "]")
            }
        }
    }
}
