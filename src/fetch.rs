//! Fetching a board snapshot from the engine's get-board query.
//!
//! The query itself belongs to whoever drives the engine client; this module
//! only decides when a response means "try again" and how long to wait.

use crate::config::RetryPolicy;
use crate::error::FetchError;
use crate::game::Grid;
use crate::vlog;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;

/// Phrase the engine client prints when the board is not available yet
pub const UNAVAILABLE_MARKER: &str = "could not fetch board";

/// Anything that can answer a get-board query with raw text
pub trait BoardSource {
    fn get_board(&mut self) -> io::Result<String>;
}

/// Re-reads a file the orchestration layer writes the query output to
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl BoardSource for FileSource {
    fn get_board(&mut self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// A response captured once, e.g. from stdin
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl BoardSource for StaticSource {
    fn get_board(&mut self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

pub fn is_unavailable(response: &str) -> bool {
    response.to_ascii_lowercase().contains(UNAVAILABLE_MARKER)
}

/// Query the source, retrying while the engine reports the board unavailable
pub fn fetch_snapshot<S: BoardSource + ?Sized>(
    source: &mut S,
    policy: &RetryPolicy,
) -> Result<String, FetchError> {
    for attempt in 1..=policy.attempts() {
        let response = source.get_board()?;
        if !is_unavailable(&response) {
            return Ok(response);
        }
        if attempt < policy.attempts() {
            vlog!(
                "board unavailable (attempt {}), retrying in {:?}",
                attempt,
                policy.delay
            );
            thread::sleep(policy.delay);
        }
    }
    Err(FetchError::BoardUnavailable {
        attempts: policy.attempts(),
    })
}

pub fn fetch_and_parse<S: BoardSource + ?Sized>(
    source: &mut S,
    policy: &RetryPolicy,
) -> Result<Grid, FetchError> {
    let snapshot = fetch_snapshot(source, policy)?;
    Ok(Grid::parse(&snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    struct Scripted {
        responses: VecDeque<String>,
        calls: usize,
    }

    impl Scripted {
        fn new(responses: &[&str]) -> Self {
            Scripted {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                calls: 0,
            }
        }
    }

    impl BoardSource for Scripted {
        fn get_board(&mut self) -> io::Result<String> {
            let exhausted = || io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted");
            self.calls += 1;
            self.responses.pop_front().ok_or_else(exhausted)
        }
    }

    fn quick() -> RetryPolicy {
        RetryPolicy::new(1, Duration::ZERO)
    }

    #[test]
    fn retries_once_then_succeeds() {
        let board = Grid::empty().to_string();
        let mut source = Scripted::new(&["Error: Could not fetch board", &board]);
        let grid = fetch_and_parse(&mut source, &quick()).unwrap();
        assert_eq!(grid, Grid::empty());
        assert_eq!(source.calls, 2);
    }

    #[test]
    fn second_failure_is_final() {
        let mut source = Scripted::new(&[UNAVAILABLE_MARKER, UNAVAILABLE_MARKER, "unused"]);
        let err = fetch_snapshot(&mut source, &quick()).unwrap_err();
        assert!(matches!(err, FetchError::BoardUnavailable { attempts: 2 }));
        assert_eq!(source.calls, 2);
    }

    #[test]
    fn malformed_board_is_not_retried() {
        let mut source = Scripted::new(&["[[Empty]]"]);
        let err = fetch_and_parse(&mut source, &quick()).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn io_errors_surface() {
        let mut source = Scripted::new(&[]);
        let result = fetch_snapshot(&mut source, &quick());
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
