use crate::Verdict;

/// A callable that classifies a parameter value as moved or not moved.
///
/// Implementations are expected to be expensive (one external simulation
/// run per call) and side-effecting. Callers are responsible for keeping
/// `value` finite and within their search domain; evaluators do not clamp.
pub trait Evaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates one parameter value.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation could not be carried out or its
    /// outcome could not be classified.
    fn evaluate(&self, value: f64) -> Result<Verdict, Self::Error>;
}

/// A captured value/verdict pair from one evaluator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub value: f64,
    pub verdict: Verdict,
}

impl Trial {
    /// Creates a new trial from an evaluated value and its verdict.
    #[must_use]
    pub fn new(value: f64, verdict: Verdict) -> Self {
        Self { value, verdict }
    }
}
