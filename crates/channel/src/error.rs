use std::path::PathBuf;
use thiserror::Error;

/// Failures of the channel itself. A token with nothing behind it is not one
/// of them: consuming it yields `Ok(None)`.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Invalid print token '{0}'")]
    InvalidToken(String),

    #[error("Payload store lock poisoned")]
    LockPoisoned,

    #[error("Payload store I/O on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Payload behind token '{token}' is unreadable: {source}")]
    Decode {
        token: String,
        #[source]
        source: serde_json::Error,
    },
}
