use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can end a threshold search without a result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// Every tested value behaved as not moved, up to the domain bounds.
    ///
    /// This signals a configuration problem rather than a crash: widen
    /// `domain_max` or increase `initial_step`.
    #[error("no moving regime found in [{domain_min}, {domain_max}]")]
    NoMovingRegime { domain_min: f64, domain_max: f64 },

    /// An evaluator call failed; the search state past this point is not
    /// trustworthy, so the whole run aborts.
    #[error("evaluator call failed at value {value}")]
    Evaluator {
        value: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
