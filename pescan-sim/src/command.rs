use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use pescan_core::{Evaluator, Verdict};
use thiserror::Error;

use crate::parse::{self, ParseError, parse_verdict};

/// Errors from launching or interpreting one simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The simulation process could not be started.
    #[error("failed to launch evaluator `{program}`")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The simulation process exited abnormally.
    #[error("evaluator exited abnormally ({status}); last lines:\n{tail}")]
    Exited { status: ExitStatus, tail: String },

    /// The output carried no recognizable status line.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Runs the simulation executable once per evaluation.
///
/// Each call spawns `<program> <value>`, waits for it to exit, and scans
/// its combined stdout/stderr for a status line. One process per call; the
/// process is fully consumed before the call returns. No retries, no
/// caching, and no timeout: an unresponsive simulation blocks the caller.
#[derive(Debug, Clone)]
pub struct SimCommand {
    program: PathBuf,
}

impl SimCommand {
    /// Creates an evaluator for the given simulation executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the path of the simulation executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Evaluator for SimCommand {
    type Error = SimError;

    fn evaluate(&self, value: f64) -> Result<Verdict, SimError> {
        let output = Command::new(&self.program)
            .arg(value.to_string())
            .output()
            .map_err(|source| SimError::Launch {
                program: self.program.clone(),
                source,
            })?;

        // The status line conventionally lands on stdout; stderr is
        // scanned as well.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            return Err(SimError::Exited {
                status: output.status,
                tail: parse::tail(&combined),
            });
        }

        Ok(parse_verdict(&combined)?)
    }
}
