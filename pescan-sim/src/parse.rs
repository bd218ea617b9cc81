use pescan_core::Verdict;
use thiserror::Error;

/// Trailing marker of a status line reporting droplet motion.
pub const MOVED_MARKER: &str = "STATUS MOVED";

/// Trailing marker of a status line reporting no motion.
pub const NOT_MOVED_MARKER: &str = "STATUS NOT_MOVED";

/// Number of trailing output lines kept as diagnostic context.
const TAIL_LINES: usize = 20;

/// No status marker was found anywhere in the evaluator output.
#[derive(Debug, Error)]
#[error("no status marker in evaluator output; last lines:\n{tail}")]
pub struct ParseError {
    /// The last lines of the raw output, for diagnosis.
    pub tail: String,
}

/// Classifies raw evaluator output into a verdict.
///
/// Lines are trimmed and blank lines skipped; a line ending in
/// [`MOVED_MARKER`] or [`NOT_MOVED_MARKER`] carries a verdict. When several
/// status lines appear (retries, verbose runs), the last one wins.
///
/// # Errors
///
/// Returns [`ParseError`] with the output tail if no status line is found.
pub fn parse_verdict(raw: &str) -> Result<Verdict, ParseError> {
    let mut verdict = None;

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.ends_with(NOT_MOVED_MARKER) {
            verdict = Some(Verdict::NotMoved);
        } else if line.ends_with(MOVED_MARKER) {
            verdict = Some(Verdict::Moved);
        }
    }

    verdict.ok_or_else(|| ParseError { tail: tail(raw) })
}

/// Returns the last [`TAIL_LINES`] lines of `raw`, untrimmed.
pub(crate) fn tail(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_single_status_line() {
        let out = "step 1\nstep 2\nt=4.00 STATUS MOVED\n";
        assert_eq!(parse_verdict(out).expect("has status"), Verdict::Moved);

        let out = "step 1\nt=4.00 STATUS NOT_MOVED\n";
        assert_eq!(parse_verdict(out).expect("has status"), Verdict::NotMoved);
    }

    #[test]
    fn last_status_line_wins() {
        let out = "t=1.00 STATUS NOT_MOVED\nrestarting\nt=4.00 STATUS MOVED\n";
        assert_eq!(parse_verdict(out).expect("has status"), Verdict::Moved);

        let out = "t=1.00 STATUS MOVED\nre-check\nt=4.00 STATUS NOT_MOVED\n";
        assert_eq!(parse_verdict(out).expect("has status"), Verdict::NotMoved);
    }

    #[test]
    fn tolerates_whitespace_and_blank_lines() {
        let out = "\n\n   t=4.00 STATUS MOVED   \n\n";
        assert_eq!(parse_verdict(out).expect("has status"), Verdict::Moved);
    }

    #[test]
    fn status_must_end_the_line() {
        // Marker buried mid-line is not a status report.
        let out = "expecting STATUS MOVED or STATUS NOT_MOVED later\n";
        assert!(parse_verdict(out).is_err());
    }

    #[test]
    fn missing_status_keeps_output_tail() {
        let out: String = (0..30).map(|i| format!("line {i}\n")).collect();
        let err = parse_verdict(&out).expect_err("no status");

        assert!(err.tail.contains("line 29"));
        assert!(err.tail.contains("line 10"));
        assert!(!err.tail.contains("line 9\n"));
    }

    #[test]
    fn short_output_tail_is_everything() {
        let err = parse_verdict("only line\n").expect_err("no status");
        assert_eq!(err.tail, "only line");
    }
}
