//! Evaluator adapter for the droplet-motion simulation executable.
//!
//! The simulation is a black box: it receives one parameter value as its
//! only argument, runs to completion, and reports its outcome as a status
//! line on its diagnostic output. This crate turns that convention into a
//! trusted [`pescan_core::Verdict`]:
//!
//! - [`parse_verdict`] — pure classification of raw output text
//! - [`SimCommand`] — an [`pescan_core::Evaluator`] that spawns one
//!   simulation process per call

mod command;
mod parse;

pub use command::{SimCommand, SimError};
pub use parse::{MOVED_MARKER, NOT_MOVED_MARKER, ParseError, parse_verdict};
