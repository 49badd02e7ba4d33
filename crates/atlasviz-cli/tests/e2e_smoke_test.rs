use std::fs;

use tempfile::tempdir;

use atlasviz::AtlasvizError;
use atlasviz_cli::{BASE_NAME, run_with_output_dir};

#[test]
fn e2e_smoke_test_writes_both_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    match run_with_output_dir(temp_dir.path()) {
        Ok(()) => {}
        // Hosts without installed fonts cannot rasterize the PNG
        Err(AtlasvizError::RenderingUnavailable(reason)) => {
            eprintln!("skipping: {reason}");
            return;
        }
        Err(err) => panic!("Poster generation failed: {err}"),
    }

    let base_path = temp_dir.path().join(BASE_NAME);
    for extension in ["svg", "png"] {
        let path = base_path.with_extension(extension);
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing output file {}", path.display()));
        assert!(
            metadata.len() > 0,
            "output file {} is empty",
            path.display()
        );
    }
}

#[test]
fn e2e_smoke_test_rerun_overwrites_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    match run_with_output_dir(temp_dir.path()) {
        Ok(()) => {}
        Err(AtlasvizError::RenderingUnavailable(reason)) => {
            eprintln!("skipping: {reason}");
            return;
        }
        Err(err) => panic!("First poster generation failed: {err}"),
    }

    // Second run over the same directory must overwrite without error
    run_with_output_dir(temp_dir.path()).expect("Re-run over existing outputs failed");
}

#[test]
fn e2e_smoke_test_missing_directory_is_fatal() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing_dir = temp_dir.path().join("assets");

    let result = run_with_output_dir(&missing_dir);
    match result {
        Err(AtlasvizError::DestinationUnavailable { path }) => {
            assert_eq!(path, missing_dir);
        }
        other => panic!("Expected DestinationUnavailable, got {other:?}"),
    }

    // Neither output file may exist after the failure
    assert!(!missing_dir.join(BASE_NAME).with_extension("svg").exists());
    assert!(!missing_dir.join(BASE_NAME).with_extension("png").exists());
}
