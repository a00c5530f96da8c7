//! Optimization driver configuration.

/// What the driver does with designs that do not match the batch shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidDesignPolicy {
    /// Abort the run with the first inconsistency found.
    #[default]
    Fail,
    /// Drop inconsistent designs before the first stage and report them
    /// in [`OptimizeResult::rejected`](super::OptimizeResult::rejected).
    Skip,
}

/// Configuration for [`OptimizeRunner`](super::OptimizeRunner).
///
/// # Examples
///
/// ```
/// use u_mdr::optimize::{InvalidDesignPolicy, OptimizeConfig};
///
/// let config = OptimizeConfig::default()
///     .with_parallel(false)
///     .with_invalid_policy(InvalidDesignPolicy::Skip);
/// assert!(!config.parallel);
/// assert_eq!(config.invalid_policy, InvalidDesignPolicy::Skip);
/// ```
#[derive(Debug, Clone)]
pub struct OptimizeConfig {
    /// Whether to run each stage's pairwise pass on the rayon pool.
    ///
    /// Results are identical either way. Ignored when the crate is built
    /// without the `parallel` feature.
    pub parallel: bool,

    /// Handling of designs inconsistent with the first design.
    pub invalid_policy: InvalidDesignPolicy,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            invalid_policy: InvalidDesignPolicy::Fail,
        }
    }
}

impl OptimizeConfig {
    /// Enables or disables the parallel pairwise pass.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the policy for inconsistent designs.
    pub fn with_invalid_policy(mut self, policy: InvalidDesignPolicy) -> Self {
        self.invalid_policy = policy;
        self
    }
}
