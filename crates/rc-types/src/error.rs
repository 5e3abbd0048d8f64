use thiserror::Error;

/// Errors produced by type conversions and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("invalid vote direction: {0} (expected 1 or -1)")]
    InvalidVoteDirection(i64),
}
