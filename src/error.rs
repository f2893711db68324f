use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("Could not find polygon points: no <polygon> element with a non-empty points attribute")]
    MissingBorderPolygon,

    #[error("Tileset directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("SVG serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TileError>;
