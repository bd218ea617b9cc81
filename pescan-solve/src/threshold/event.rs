use pescan_core::Trial;

/// Event emitted by the threshold search for each evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// The seed evaluation before any stepping.
    Seed {
        /// The evaluated trial.
        trial: Trial,
    },
    /// A step whose verdict matched the previous one.
    Step {
        /// Iteration counter (1-based within the walk).
        iter: usize,
        /// The evaluated trial.
        trial: Trial,
        /// Step size in effect for this iteration.
        step: f64,
    },
    /// A step whose verdict flipped; the step size was halved.
    Flip {
        /// Iteration counter (1-based within the walk).
        iter: usize,
        /// The evaluated trial.
        trial: Trial,
        /// Step size after halving.
        step: f64,
        /// Provisional critical estimate after this flip.
        estimate: f64,
    },
}

impl Event {
    /// Returns the trial evaluated for this event.
    #[must_use]
    pub fn trial(&self) -> Trial {
        match self {
            Event::Seed { trial }
            | Event::Step { trial, .. }
            | Event::Flip { trial, .. } => *trial,
        }
    }

    /// Returns the evaluated parameter value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.trial().value
    }
}
