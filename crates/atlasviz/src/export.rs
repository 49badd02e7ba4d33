//! Export of a rendered canvas to the output files.
//!
//! One call writes both artifacts: `<base>.svg` and `<base>.png`. The
//! destination directory must already exist. Both outputs are encoded in
//! memory before any file is touched, and a failed second write removes
//! the first file, so a base path never ends up with only one of the two
//! outputs.

mod raster;
mod svg;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::{canvas::Canvas, error::AtlasvizError};

/// Writes `<base_path>.svg` and `<base_path>.png` for the given canvas.
///
/// Existing files at those paths are overwritten.
///
/// # Errors
///
/// - [`AtlasvizError::DestinationUnavailable`] if the directory containing
///   `base_path` does not exist. Nothing is written.
/// - [`AtlasvizError::RenderingUnavailable`] if the raster backend has no
///   font faces to draw text with. Nothing is written.
/// - [`AtlasvizError::Raster`] / [`AtlasvizError::Io`] for encode or write
///   failures.
pub(crate) fn export(canvas: &Canvas, base_path: &Path, scale: f32) -> Result<(), AtlasvizError> {
    let directory = destination_directory(base_path);
    if !directory.is_dir() {
        error!(path:? = directory; "Output directory does not exist");
        return Err(AtlasvizError::DestinationUnavailable { path: directory });
    }

    let svg_path = base_path.with_extension("svg");
    let png_path = base_path.with_extension("png");

    // Encode both outputs before writing either, so encoding failures
    // leave the filesystem untouched.
    let svg_content = canvas.to_svg_string();
    let png_content = raster::rasterize(&svg_content, canvas, scale)?;

    svg::write_svg(&svg_content, &svg_path)?;

    if let Err(err) = fs::write(&png_path, &png_content) {
        error!(path:? = png_path, err:err; "Failed to write PNG file");
        // Do not leave a lone SVG behind
        let _ = fs::remove_file(&svg_path);
        return Err(err.into());
    }

    info!(svg:? = svg_path, png:? = png_path; "Poster exported");

    Ok(())
}

/// The directory a base path writes into. A bare file name writes into the
/// current directory.
fn destination_directory(base_path: &Path) -> PathBuf {
    match base_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_directory_of_nested_path() {
        let dir = destination_directory(Path::new("assets/atlas_architecture"));
        assert_eq!(dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_destination_directory_of_bare_name() {
        let dir = destination_directory(Path::new("atlas_architecture"));
        assert_eq!(dir, PathBuf::from("."));
    }
}
