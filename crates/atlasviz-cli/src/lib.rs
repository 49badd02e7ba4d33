//! CLI logic for the ATLAS poster generator.
//!
//! Running the binary renders the poster and writes
//! `assets/atlas_architecture.svg` and `assets/atlas_architecture.png`
//! relative to the current directory, then prints a confirmation line.

mod args;

pub use args::Args;

use std::path::Path;

use log::info;

use atlasviz::{AtlasvizError, PosterRenderer};

/// Directory the poster files are written into, relative to the current
/// directory. It must already exist; the generator never creates it.
pub const OUTPUT_DIR: &str = "assets";

/// Base file name shared by both outputs.
pub const BASE_NAME: &str = "atlas_architecture";

/// Run the poster generator with the fixed output location.
///
/// # Errors
///
/// Returns `AtlasvizError` for rendering failures, a missing output
/// directory, or file write errors.
pub fn run() -> Result<(), AtlasvizError> {
    run_with_output_dir(Path::new(OUTPUT_DIR))
}

/// Run the poster generator, writing into the given directory.
///
/// Split out from [`run`] so tests can target a temporary directory; the
/// binary itself always uses [`OUTPUT_DIR`].
pub fn run_with_output_dir(output_dir: &Path) -> Result<(), AtlasvizError> {
    info!(output_dir:? = output_dir; "Generating poster");

    let renderer = PosterRenderer::default();
    let canvas = renderer.render()?;

    let base_path = output_dir.join(BASE_NAME);
    renderer.export(&canvas, &base_path)?;

    println!(
        "ATLAS architecture poster saved to {} and {}",
        base_path.with_extension("svg").display(),
        base_path.with_extension("png").display()
    );

    Ok(())
}
