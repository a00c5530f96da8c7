//! Error types.
//!
//! Every failure in this crate is a deterministic function of the input
//! data, so nothing here is retryable. Errors carry the offending design
//! and metric ids so callers can report or skip a malformed design.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MdrError>;

/// Coarse classification of [`MdrError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Inconsistent or malformed input (lengths, orientations, rank layers).
    Validation,
    /// A referenced metric id is absent from a design.
    MissingMetric,
    /// The metric order does not match the per-design metric count.
    DimensionMismatch,
    /// Text input could not be parsed.
    Parse,
}

/// Errors produced by dominance evaluation, filtering and loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MdrError {
    /// A design lacks a metric referenced by a comparison.
    #[error("design {design} has no metric with id {metric}")]
    MissingMetric { design: usize, metric: usize },

    /// Two compared designs disagree on whether a metric is minimized.
    #[error(
        "metric {metric} is minimized in design {minimized_in} but maximized in design {maximized_in}"
    )]
    InconsistentSense {
        metric: usize,
        minimized_in: usize,
        maximized_in: usize,
    },

    /// A design's metric vector differs in length or id set from the batch.
    #[error("design {design} carries {found} metrics, expected {expected}")]
    MetricCountMismatch {
        design: usize,
        expected: usize,
        found: usize,
    },

    /// The metric order length differs from the per-design metric count.
    #[error("metric order has {order_len} ids but designs carry {metric_count} metrics")]
    DimensionMismatch {
        order_len: usize,
        metric_count: usize,
    },

    /// A design's rank vector does not match the number of dominance layers.
    #[error("design {design} tracks {found} rank layers, expected {expected}")]
    RankLayerMismatch {
        design: usize,
        expected: usize,
        found: usize,
    },

    /// A metric order must contain at least one pair.
    #[error("metric order needs at least two ids, got {0}")]
    OrderTooShort(usize),

    /// The same metric name was registered twice.
    #[error("metric name `{0}` is already registered")]
    DuplicateMetric(String),

    /// Malformed design text.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl MdrError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MdrError::MissingMetric { .. } => ErrorKind::MissingMetric,
            MdrError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            MdrError::Parse { .. } => ErrorKind::Parse,
            MdrError::InconsistentSense { .. }
            | MdrError::MetricCountMismatch { .. }
            | MdrError::RankLayerMismatch { .. }
            | MdrError::OrderTooShort(_)
            | MdrError::DuplicateMetric(_) => ErrorKind::Validation,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MdrError::Parse {
            line,
            message: message.into(),
        }
    }
}
