//! SVG file writing.

use std::{fs, path::Path};

use log::{error, info};

use crate::error::AtlasvizError;

/// Writes the serialized SVG document to `path`.
pub(super) fn write_svg(content: &str, path: &Path) -> Result<(), AtlasvizError> {
    info!(path:? = path; "Writing SVG file");

    fs::write(path, content).map_err(|err| {
        error!(path:? = path, err:err; "Failed to write SVG file");
        AtlasvizError::Io(err)
    })
}
