use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid scale factor: {0}. Must be greater than 0 and at most 1")]
    InvalidScale(f64),

    #[error("Image too small to resize: {0}x{1} would become {2}x{3}")]
    ZeroDimensions(u32, u32, u32, u32),

    #[error("File is not under the input directory: {0}")]
    OutsideInputRoot(PathBuf),

    #[error("Failed to create output directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, #[source] std::io::Error),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ResizeError>;
