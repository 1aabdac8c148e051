use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a round from starting.
///
/// Word rejections are not errors; they come back as
/// [`ValidationOutcome::Rejected`](crate::validator::ValidationOutcome::Rejected).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the root word list is empty")]
    EmptyCandidateList,
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
