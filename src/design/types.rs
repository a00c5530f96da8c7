//! Candidate designs and dominance relations.

use std::fmt;

use super::metric::{PerfMetric, Sense};
use crate::error::{MdrError, Result};

/// A candidate solution scored on several metrics.
///
/// The identity id and the metric vector are fixed at construction. The
/// rank vector holds one counter per dominance layer; it is sized by
/// [`with_rank_layers`](Design::with_rank_layers) and only ever changed
/// by the rank accumulator ([`crate::pareto::update_ranks`]).
///
/// # Examples
///
/// ```
/// use u_mdr::design::{Design, PerfMetric};
///
/// let design = Design::new(
///     7,
///     vec![PerfMetric::minimize(0, 12.5), PerfMetric::maximize(1, 0.8)],
/// )
/// .with_rank_layers(2);
///
/// assert_eq!(design.id(), 7);
/// assert_eq!(design.metric(1).map(|m| m.value()), Some(0.8));
/// assert_eq!(design.ranks(), &[0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Design {
    id: usize,
    metrics: Vec<PerfMetric>,
    ranks: Vec<u32>,
}

impl Design {
    /// Creates a design with no rank layers.
    pub fn new(id: usize, metrics: Vec<PerfMetric>) -> Self {
        Self {
            id,
            metrics,
            ranks: Vec::new(),
        }
    }

    /// Builds a design whose metric ids are the positions in `values`,
    /// all sharing one sense.
    pub fn from_values(id: usize, values: &[f64], sense: Sense) -> Self {
        let metrics = values
            .iter()
            .enumerate()
            .map(|(metric, &value)| PerfMetric::new(metric, value, sense))
            .collect();
        Self::new(id, metrics)
    }

    /// Resets the rank vector to `layers` zeroed counters.
    pub fn with_rank_layers(mut self, layers: usize) -> Self {
        self.ranks = vec![0; layers];
        self
    }

    /// Identity id, usually the original row order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The metric vector in column order.
    pub fn metrics(&self) -> &[PerfMetric] {
        &self.metrics
    }

    /// Number of metrics carried.
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Looks up a metric by id.
    pub fn metric(&self, metric: usize) -> Option<&PerfMetric> {
        // Metric vectors produced by the loader are in id order.
        match self.metrics.get(metric) {
            Some(m) if m.metric_id() == metric => Some(m),
            _ => self.metrics.iter().find(|m| m.metric_id() == metric),
        }
    }

    /// Like [`metric`](Self::metric), failing with
    /// [`MdrError::MissingMetric`] when absent.
    pub fn require_metric(&self, metric: usize) -> Result<&PerfMetric> {
        self.metric(metric).ok_or(MdrError::MissingMetric {
            design: self.id,
            metric,
        })
    }

    /// Metric ids in vector order.
    pub fn metric_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.metrics.iter().map(|m| m.metric_id())
    }

    /// Per-layer rank counters (lower is better).
    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    /// Sum of all rank counters.
    pub fn total_rank(&self) -> u32 {
        self.ranks.iter().sum()
    }

    pub(crate) fn bump_rank(&mut self, layer: usize) {
        self.ranks[layer] += 1;
    }
}

/// An ordered pair of metric ids: one priority layer of comparison.
///
/// ```
/// use u_mdr::design::DomRel;
///
/// let rel = DomRel::new(0, 2);
/// assert_eq!(rel.first(), 0);
/// assert_eq!(rel.second(), 2);
/// assert_eq!(rel.to_string(), "(0, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomRel {
    first: usize,
    second: usize,
}

impl DomRel {
    /// Creates a relation over metrics `first` and `second`.
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// First metric id.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Second metric id.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both ids in order.
    pub fn ids(&self) -> [usize; 2] {
        [self.first, self.second]
    }
}

impl fmt::Display for DomRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
