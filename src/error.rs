use std::path::PathBuf;

/// Errors from loading the board, decoding the background, and writing exports.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid board file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{0:?} is not a percentage")]
    Percent(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;
