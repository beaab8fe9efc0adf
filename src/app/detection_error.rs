use std::path::PathBuf;

use thiserror::Error;

use super::CommandRunError;
use super::detection_context::Interruption;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionError {
    #[error("distribution detection was cancelled")]
    Cancelled,

    #[error("distribution detection timed out")]
    DeadlineExceeded,

    #[error("unable to detect the distribution: every source was tried and none succeeded")]
    Exhausted,
}

impl DetectionError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DetectionError::Cancelled | DetectionError::DeadlineExceeded)
    }
}

impl From<Interruption> for DetectionError {
    fn from(value: Interruption) -> Self {
        match value {
            Interruption::Cancelled => DetectionError::Cancelled,
            Interruption::DeadlineExceeded => DetectionError::DeadlineExceeded,
        }
    }
}

/// Failure of one candidate source. Only `Interrupted` stops the chain.
#[derive(Error, Debug)]
pub(in crate::app) enum SourceError {
    #[error("{0} does not exist")]
    NotFound(PathBuf),

    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no executor available to run `{0}`")]
    NoExecutor(String),

    #[error("`{command}` failed with exit code {exit_code:?}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("`{0}` could not be run: {1}")]
    CommandUnavailable(String, #[source] CommandRunError),

    #[error("`{0}` was interrupted before it finished")]
    CommandInterrupted(String),

    #[error("`{0}` reported no distributor id")]
    EmptyDistributorId(String),

    #[error(transparent)]
    Interrupted(#[from] Interruption),
}
