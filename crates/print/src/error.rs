use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Failed to create print surface: {0}")]
    Surface(String),

    #[error("Print surface {session} never became ready: {reason}")]
    NotReady { session: String, reason: String },

    #[error("Print dialog could not be opened for {session}: {reason}")]
    DialogUnavailable { session: String, reason: String },

    #[error("Failed to spool '{path}': {source}")]
    Spool {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Print command '{program}' could not be started: {source}")]
    Command {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
