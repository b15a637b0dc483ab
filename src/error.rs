use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed GPX: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    // fitparser errors hold an Rc, so only the message crosses threads
    #[error("malformed FIT: {0}")]
    FitParse(String),

    #[error("gzip decompression failed: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("invalid boundary: {0}")]
    Boundary(String),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("cannot list {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
