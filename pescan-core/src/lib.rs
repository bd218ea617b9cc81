//! Core traits and types shared by the pescan crates.
//!
//! This crate defines the seam between the threshold search and whatever
//! produces verdicts on its behalf:
//!
//! - [`Verdict`] — the binary outcome of one evaluation
//! - [`Trial`] — a captured value/verdict pair
//! - [`Evaluator`] — a callable that maps a parameter value to a verdict
//! - [`Observer`] — receives search events and may steer the search

mod evaluator;
mod observe;
mod verdict;

pub use evaluator::{Evaluator, Trial};
pub use observe::Observer;
pub use verdict::Verdict;
