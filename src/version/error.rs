use std::num::ParseIntError;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("version string can not be empty")]
    Empty,

    #[error("{0} is not a valid version")]
    InvalidFormat(String),

    #[error("invalid version component '{component}': {source}")]
    InvalidComponent {
        component: String,
        #[source]
        source: ParseIntError,
    },

    #[error("version component must be a non-negative integer, got {0}")]
    NegativeComponent(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cannot select latest version: '{literal}' is invalid: {source}")]
    InvalidVersion {
        literal: String,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid tag prefix '{prefix}': {source}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listing tags of {url} failed ({status}): {stderr}")]
    CommandFailed {
        url: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by the full tag selection pipeline
#[derive(Debug, Error)]
pub enum LatestError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
