//! Threshold search for critical-parameter scans.
//!
//! Given an [`pescan_core::Evaluator`] that classifies a parameter value as
//! moved or not moved, [`threshold::search`] locates the boundary between
//! the two regimes with an adaptive step-halving walk, using as few
//! evaluator calls as practical.

pub mod threshold;
