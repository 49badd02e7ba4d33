//! Error types for poster operations.
//!
//! This module provides the main error type [`AtlasvizError`] covering the
//! failure modes of rendering and export. Both rendering and export are
//! cheap and idempotent, so every variant is terminal for one invocation:
//! the caller reports the message and exits.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for poster operations.
#[derive(Debug, Error)]
pub enum AtlasvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The drawing backend is missing a resource it needs, typically font
    /// faces for raster text. No output may be emitted after this error.
    #[error("rendering backend unavailable: {0}")]
    RenderingUnavailable(String),

    /// The export destination directory does not exist. Export never
    /// creates directories, so this names the path the caller must create.
    #[error("output destination unavailable: {}", path.display())]
    DestinationUnavailable { path: PathBuf },

    #[error("raster export failed: {0}")]
    Raster(String),
}
