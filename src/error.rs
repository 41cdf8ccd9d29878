use std::io;

/// A token outside the four cell states the engine prints
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cell state {0:?}")]
pub struct UnknownCellState(pub String);

/// Reasons a board snapshot could not be turned into a grid
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("no [[ ... ]] board literal found in snapshot")]
    MissingDelimiters,
    #[error("expected 100 cells, found {found}")]
    TokenCount { found: usize },
    #[error("unknown cell token {token:?} at position {position}")]
    UnknownToken { position: usize, token: String },
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("engine could not fetch board after {attempts} attempt(s)")]
    BoardUnavailable { attempts: usize },
    #[error("malformed board snapshot: {0}")]
    Parse(#[from] BoardParseError),
}
