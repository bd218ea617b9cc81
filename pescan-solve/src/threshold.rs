mod config;
mod error;
mod event;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use pescan_core::{Evaluator, Observer, Trial};

/// Control actions supported by the threshold search.
pub enum Action {
    /// Stop the search early and return the best current estimate.
    StopEarly,
}

/// Locates the critical parameter value separating the not-moved regime
/// from the moved regime.
///
/// The search walks from `start_value` toward the boundary: down while the
/// verdict is moved, up while it is not. Each time the verdict flips the
/// step is halved and the estimate is pinned to the flip endpoint that
/// moved, until the step falls below the configured tolerance. Candidates
/// are clamped into `[domain_min, domain_max]`, and no verdict is ever
/// reused: every step runs a fresh evaluation.
///
/// The walk assumes the verdict is monotone in the parameter over the
/// domain. Under a non-monotone (noisy) evaluator the result is locally
/// consistent with the verdicts seen, but may not be the true boundary.
///
/// Observers see one event per evaluation and may stop the search early.
///
/// # Errors
///
/// Returns an error if the config is invalid, an evaluator call fails, or
/// the search ends without ever observing a moved verdict.
pub fn search<E, Obs>(
    evaluator: &E,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut value = config.clamp(config.start_value);
    let mut step = config.initial_step;

    let seed = evaluate(evaluator, value)?;
    let mut verdict = seed.verdict;
    let mut estimate = verdict.is_moved().then_some(value);
    let mut evaluations = 1;
    let mut flips = 0;

    if let Some(Action::StopEarly) = observer.observe(&Event::Seed { trial: seed }) {
        return finish(Status::StoppedByObserver, estimate, 0, evaluations, flips, step, config);
    }

    for iter in 1..=config.max_iters {
        // Walk toward the boundary: down while moving, up while stuck.
        let target = if verdict.is_moved() {
            value - step
        } else {
            value + step
        };
        let candidate = config.clamp(target);

        let trial = evaluate(evaluator, candidate)?;
        evaluations += 1;

        if trial.verdict != verdict {
            step *= 0.5;
            flips += 1;

            // The flip endpoint that moved is the new critical estimate.
            let moving = if trial.verdict.is_moved() {
                candidate
            } else {
                value
            };
            estimate = Some(moving);

            let event = Event::Flip {
                iter,
                trial,
                step,
                estimate: moving,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return finish(
                    Status::StoppedByObserver,
                    estimate,
                    iter,
                    evaluations,
                    flips,
                    step,
                    config,
                );
            }

            if step < config.tolerance {
                return finish(
                    Status::Converged,
                    estimate,
                    iter,
                    evaluations,
                    flips,
                    step,
                    config,
                );
            }
        } else {
            let event = Event::Step { iter, trial, step };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return finish(
                    Status::StoppedByObserver,
                    estimate,
                    iter,
                    evaluations,
                    flips,
                    step,
                    config,
                );
            }
        }

        value = candidate;
        verdict = trial.verdict;
    }

    finish(
        Status::BudgetExhausted,
        estimate,
        config.max_iters,
        evaluations,
        flips,
        step,
        config,
    )
}

/// Runs the search without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, an evaluator call fails, or
/// the search ends without ever observing a moved verdict.
pub fn search_unobserved<E>(evaluator: &E, config: &Config) -> Result<Solution, Error>
where
    E: Evaluator,
{
    search(evaluator, config, ())
}

/// Runs one evaluation and wraps any failure with the tested value.
fn evaluate<E>(evaluator: &E, value: f64) -> Result<Trial, Error>
where
    E: Evaluator,
{
    let verdict = evaluator
        .evaluate(value)
        .map_err(|source| Error::Evaluator {
            value,
            source: Box::new(source),
        })?;

    Ok(Trial::new(value, verdict))
}

/// Builds the final solution, or reports that no moving regime was seen.
fn finish(
    status: Status,
    estimate: Option<f64>,
    iters: usize,
    evaluations: usize,
    flips: usize,
    final_step: f64,
    config: &Config,
) -> Result<Solution, Error> {
    let Some(estimate) = estimate else {
        return Err(Error::NoMovingRegime {
            domain_min: config.domain_min,
            domain_max: config.domain_max,
        });
    };

    Ok(Solution {
        status,
        estimate,
        iters,
        evaluations,
        flips,
        final_step,
    })
}
