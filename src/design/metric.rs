//! Metric identifiers and performance values.

use crate::error::{MdrError, Result};

/// Optimization direction of a metric.
///
/// Mirrors the minimize/maximize flag of a metric column: with
/// [`Sense::Minimize`] smaller values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    /// Smaller is better.
    #[default]
    Minimize,
    /// Larger is better.
    Maximize,
}

impl Sense {
    /// Converts a minimize flag into a sense.
    pub fn from_minimize(minimize: bool) -> Self {
        if minimize {
            Sense::Minimize
        } else {
            Sense::Maximize
        }
    }

    /// Returns `true` for [`Sense::Minimize`].
    pub fn is_minimize(self) -> bool {
        self == Sense::Minimize
    }

    /// Returns `true` if `a` is strictly better than `b` in this direction.
    ///
    /// Equal values are never strictly better, and neither are NaNs.
    #[inline]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Sense::Minimize => a < b,
            Sense::Maximize => a > b,
        }
    }
}

/// A named metric with its stable numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricId {
    name: String,
    id: usize,
}

impl MetricId {
    /// Creates a metric identifier.
    pub fn new(name: impl Into<String>, id: usize) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Metric name, as it appeared in the header row.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric id (column position at load time).
    pub fn id(&self) -> usize {
        self.id
    }
}

/// Name ↔ id mapping for the metrics of one batch.
///
/// Ids are assigned densely in registration order, so the `n`-th
/// registered metric has id `n`.
///
/// ```
/// use u_mdr::design::MetricRegistry;
///
/// let mut registry = MetricRegistry::new();
/// let mass = registry.register("mass").unwrap();
/// let lift = registry.register("lift").unwrap();
/// assert_eq!((mass, lift), (0, 1));
/// assert_eq!(registry.id_of("lift"), Some(1));
/// assert_eq!(registry.name_of(0), Some("mass"));
/// assert!(registry.register("mass").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRegistry {
    metrics: Vec<MetricId>,
}

impl MetricRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a metric name and returns its id.
    ///
    /// Fails with [`MdrError::DuplicateMetric`] if the name is taken.
    pub fn register(&mut self, name: impl Into<String>) -> Result<usize> {
        let name = name.into();
        if self.id_of(&name).is_some() {
            return Err(MdrError::DuplicateMetric(name));
        }
        let id = self.metrics.len();
        self.metrics.push(MetricId::new(name, id));
        Ok(id)
    }

    /// Looks up the id of a metric name.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.id)
    }

    /// Looks up the name of a metric id.
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.metrics.get(id).map(|m| m.name.as_str())
    }

    /// Number of registered metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Returns `true` if no metric is registered.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// All metrics in id order.
    pub fn metrics(&self) -> &[MetricId] {
        &self.metrics
    }
}

/// One performance value of a design.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfMetric {
    metric: usize,
    value: f64,
    sense: Sense,
}

impl PerfMetric {
    /// Creates a performance value for metric `metric`.
    pub fn new(metric: usize, value: f64, sense: Sense) -> Self {
        Self {
            metric,
            value,
            sense,
        }
    }

    /// Shorthand for a minimized metric.
    pub fn minimize(metric: usize, value: f64) -> Self {
        Self::new(metric, value, Sense::Minimize)
    }

    /// Shorthand for a maximized metric.
    pub fn maximize(metric: usize, value: f64) -> Self {
        Self::new(metric, value, Sense::Maximize)
    }

    /// Id of the metric this value belongs to.
    pub fn metric_id(&self) -> usize {
        self.metric
    }

    /// The measured value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Optimization direction.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// `true` if smaller values are better.
    pub fn is_minimized(&self) -> bool {
        self.sense.is_minimize()
    }
}
