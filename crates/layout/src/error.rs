use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout descriptor is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse layout descriptor '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read layout descriptor '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout directory '{0}' does not exist")]
    MissingDirectory(PathBuf),

    #[error("Font family {0:?} cannot be written into a stylesheet")]
    UnsafeFontFamily(String),
}
