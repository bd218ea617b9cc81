/// Configuration for the threshold search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// First parameter value to test.
    pub start_value: f64,
    /// Initial walk step size.
    pub initial_step: f64,
    /// The search converges once the step size falls below this value.
    pub tolerance: f64,
    /// Hard lower clamp on any tested value.
    pub domain_min: f64,
    /// Hard upper clamp on any tested value.
    pub domain_max: f64,
    /// Iteration guardrail against non-convergence.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_value: 1.0,
            initial_step: 0.5,
            tolerance: 0.005,
            domain_min: 0.001,
            domain_max: 100.0,
            max_iters: 200,
        }
    }
}

impl Config {
    /// Validates the search settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is non-finite, a step or tolerance is
    /// not positive, or the domain is empty or touches zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.start_value.is_finite() {
            return Err("start_value must be finite");
        }
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err("initial_step must be finite and positive");
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if !self.domain_min.is_finite() || self.domain_min <= 0.0 {
            return Err("domain_min must be finite and positive");
        }
        if !self.domain_max.is_finite() || self.domain_max <= self.domain_min {
            return Err("domain_max must be finite and greater than domain_min");
        }
        Ok(())
    }

    /// Clamps a candidate value into the search domain.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.domain_min, self.domain_max)
    }
}
