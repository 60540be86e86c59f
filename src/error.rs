use docket_channel::ChannelError;
use docket_layout::LayoutError;
use docket_print::PrintError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a print view. Missing values and unknown tokens
/// are not here: they render as blanks and "nothing to print".
#[derive(Error, Debug)]
pub enum DocketError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Payload channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Printing failed: {0}")]
    Print(#[from] PrintError),

    #[error("Failed to read configuration '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration '{path}' is invalid: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Payload is not a valid document: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
