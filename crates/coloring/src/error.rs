use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColoringError {
    #[error("Failed to load source image: {0}")]
    LoadFailed(image::ImageError),

    #[error("Outline pipeline failed: {0}")]
    PipelineFailed(String),

    #[error("Flood fill failed: {0}")]
    FillFailed(String),

    #[error("Failed to write page to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No coloring page loaded")]
    NoPageLoaded,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ColoringError>;
