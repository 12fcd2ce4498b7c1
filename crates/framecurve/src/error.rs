//! Error types used across the crate.

use thiserror::Error;

/// Errors produced while constructing frames or building curves.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame, or a subdivision of one, collapsed to zero width or height.
    #[error("invalid geometry: {0}")]
    Geometry(String),
    /// A curve order outside the supported range.
    #[error("invalid order: {0}")]
    Order(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
